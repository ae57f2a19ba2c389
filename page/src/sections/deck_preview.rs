use leptos::prelude::*;

use crate::content::{DeckSummary, DECKS};

/// Gradient summary cards for the three sample decks.
#[component]
pub fn DeckPreview() -> impl IntoView {
    view! {
        <section id="decks" class="section">
            <h3 class="section-title">"Deck preview"</h3>
            <div class="deck-grid">
                {DECKS
                    .iter()
                    .copied()
                    .map(|deck| view! { <DeckCard deck=deck /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn DeckCard(deck: DeckSummary) -> impl IntoView {
    view! {
        <div class="deck-card" style=deck.gradient()>
            <div class="deck-title">{deck.title}</div>
            <div class="deck-subtitle">{deck.subtitle}</div>
            <div class="deck-count">{deck.count}</div>
        </div>
    }
}
