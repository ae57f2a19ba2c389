use leptos::prelude::*;

use crate::content::DEMO_IMAGE_URL;
use crate::motion::{DEMO_CARD, DEMO_PHOTO, DEMO_SHADE};

/// The mock blink: photo settles in, the shade dims it a beat later, and the
/// memory card rises underneath. Three independent one-shot entrances; the
/// timed two-second blink itself is narrative copy, not behavior.
#[component]
pub fn BlinkDemo() -> impl IntoView {
    view! {
        <div class="demo-frame">
            <div class="demo-stage">
                <img
                    class="demo-photo"
                    src=DEMO_IMAGE_URL
                    alt="A captured moment, mid-blink"
                    style=DEMO_PHOTO.style()
                />
                <div class="demo-shade" style=DEMO_SHADE.style()></div>
            </div>

            <div class="memory-card" style=DEMO_CARD.style()>
                <div class="memory-card-head">
                    <div>
                        <div class="memory-card-title">"Memory card"</div>
                        <div class="memory-card-sub">"2s blink \u{2192} flip"</div>
                    </div>
                    <div class="memory-card-mood">"\u{1F970}"</div>
                </div>

                <p class="memory-card-body">
                    "When the blink finishes, the photo flips into this card. "
                    "Add a caption, doodle, or voice note."
                </p>

                <div class="memory-card-actions">
                    <button class="btn-ghost">"Add doodle"</button>
                    <button class="btn-ghost">"Voice note"</button>
                </div>
            </div>
        </div>
    }
}
