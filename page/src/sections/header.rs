use leptos::prelude::*;

use crate::content::{BRAND, TAGLINE};

/// Brand block and section nav.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="brand">
                <div class="brand-mark">"BB"</div>
                <div>
                    <h1 class="brand-name">{BRAND}</h1>
                    <p class="brand-tagline">{TAGLINE}</p>
                </div>
            </div>
            <nav class="site-nav">
                <a href="#how-it-works" class="nav-link">"How it works"</a>
                <a href="#decks" class="nav-link">"Decks"</a>
                <a href="#roadmap" class="nav-link">"Roadmap"</a>
                <button class="nav-cta">"Sign up"</button>
            </nav>
        </header>
    }
}
