use leptos::prelude::*;

use crate::content::ROADMAP;

/// Ordered MVP roadmap list.
#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section id="roadmap" class="section">
            <h3 class="section-title">"MVP roadmap"</h3>
            <ol class="roadmap-list">
                {ROADMAP
                    .iter()
                    .map(|item| view! { <li class="roadmap-item">{*item}</li> })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
