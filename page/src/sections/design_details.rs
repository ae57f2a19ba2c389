use leptos::prelude::*;

use crate::content::PALETTE;
use crate::motion::EASE_SOFT;

/// Palette, typography, and motion notes. The motion card reads its copy
/// from the actual easing constant so the two can't drift apart.
#[component]
pub fn DesignDetails() -> impl IntoView {
    let motion_notes = format!(
        "Subtle easing ({EASE_SOFT}), durations 180ms to 600ms, \
         micro-interactions on hover and tap."
    );

    view! {
        <section class="section">
            <h3 class="section-title">"Design details"</h3>
            <p class="section-lede">
                "Soft pastel palette, rounded cards, and micro-interactions make "
                "BlinkBook feel cozy and premium. Animations use subtle easing and "
                "short durations for a satisfying, non-obtrusive experience."
            </p>

            <div class="detail-grid">
                <div class="detail-card">
                    <div class="detail-title">"Palette"</div>
                    <div class="detail-body">
                        <div class="swatch-row">
                            {PALETTE
                                .iter()
                                .map(|color| view! {
                                    <div
                                        class="swatch"
                                        style=format!("background: {color};")
                                    ></div>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="detail-card">
                    <div class="detail-title">"Typography"</div>
                    <div class="detail-body">
                        <div class="type-face">"Inter / System UI"</div>
                        <div class="type-note">"Headlines: 700 40px, Body: 16px Regular"</div>
                    </div>
                </div>

                <div class="detail-card">
                    <div class="detail-title">"Motion"</div>
                    <div class="detail-body">{motion_notes}</div>
                </div>
            </div>
        </section>
    }
}
