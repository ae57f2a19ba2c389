use leptos::prelude::*;

use super::BlinkDemo;
use crate::content::HIGHLIGHTS;
use crate::motion::{HERO_HEADING, HERO_LEDE};

/// Hero copy block with the staggered two-line reveal, plus the blink demo
/// in the right column. The headline rises first, the lede 100ms later.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <h2 class="hero-title" style=HERO_HEADING.style()>
                        "Capture a moment. See it for a blink. Keep it forever."
                    </h2>
                    <p class="hero-lede" style=HERO_LEDE.style()>
                        "BlinkBook turns photos into tiny, two-second flashes that flip into "
                        "soft memory cards you and your partner curate together. Simple, "
                        "private, and oddly addictive."
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary">"Create your deck"</button>
                        <button class="btn btn-secondary">"View demo"</button>
                    </div>
                    <ul class="hero-highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|item| view! { <li class="hero-highlight">{*item}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="demo-slot">
                    <BlinkDemo />
                </div>
            </div>
        </section>
    }
}
