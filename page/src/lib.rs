//! # blinkbook-page
//!
//! Leptos renderer for the BlinkBook marketing page.
//!
//! The whole page is presentational: literal copy and display records
//! ([`content`]), a fixed set of sections ([`sections`]), a stylesheet
//! ([`styles`]), and declarative entrance motion ([`motion`]) for the few
//! elements that animate when they first enter the tree. There is no state
//! beyond those one-shot entrances, no configuration, and no events back to
//! the host.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = blinkbook_page::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("page.html", html).unwrap();
//! ```
//!
//! ## Render modes
//!
//! With the default `ssr` feature the page renders to a static HTML string
//! via Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Page /> };
//! let html: String = view.to_html();
//! ```
//!
//! The `csr` feature swaps the render mode so a browser crate can mount
//! [`Page`] directly with `leptos::mount::mount_to_body`.

#![doc(html_root_url = "https://docs.rs/blinkbook-page/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod content;
pub mod motion;
/// Page sections, one module per block of the layout.
pub mod sections;
pub mod styles;

use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

use sections::{DeckPreview, DesignDetails, Footer, Header, Hero, HowItWorks, Roadmap};
use styles::PAGE_CSS;

/// The complete page: header, content sections in fixed order, footer.
///
/// Carries its own stylesheet (including the generated entrance keyframes)
/// so it looks the same whether mounted in a browser or rendered to a
/// string. Accepts no props and emits nothing to its host.
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <style>{motion::entrance_css()}</style>
        <div class="container">
            <Header />
            <main>
                <Hero />
                <HowItWorks />
                <DeckPreview />
                <DesignDetails />
                <Roadmap />
            </main>
            <Footer />
        </div>
    }
}

/// Render the page as a complete static HTML document.
///
/// Pure function of the literal content: calling it twice yields identical
/// strings. This is also the surface the test suite checks markup against.
///
/// # Example
///
/// ```rust
/// let html = blinkbook_page::render_page();
/// assert!(html.contains("BlinkBook"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page() -> String {
    let doc = view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"BlinkBook \u{2014} tiny flashes, big memories"</title>
            </head>
            <body>
                <Page />
            </body>
        </html>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_a_complete_document() {
        let html = render_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("BlinkBook"));
    }

    #[test]
    fn renders_every_literal_collection_in_full() {
        let html = render_page();
        assert_eq!(html.matches("class=\"deck-card\"").count(), 3);
        assert_eq!(html.matches("class=\"step-card\"").count(), 3);
        assert_eq!(html.matches("class=\"detail-card\"").count(), 3);
        assert_eq!(html.matches("class=\"roadmap-item\"").count(), 5);
        assert_eq!(html.matches("class=\"hero-highlight\"").count(), 4);
    }

    #[test]
    fn deck_literals_appear_verbatim() {
        let html = render_page();
        assert!(html.contains(">Us<"));
        assert!(html.contains(">Rom-com<"));
        assert!(html.contains(">42<"));
        assert!(html.contains(">2am Hilarities<"));
        assert!(html.contains(">12<"));
        assert!(html.contains(">Tiny Wins<"));
        assert!(html.contains(">99<"));
    }

    #[test]
    fn deck_cards_carry_their_gradients() {
        let html = render_page();
        for deck in content::DECKS {
            assert!(html.contains(&deck.gradient()), "missing gradient for {}", deck.title);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn demo_image_is_the_only_network_fetch() {
        let html = render_page();
        assert_eq!(html.matches(content::DEMO_IMAGE_URL).count(), 1);
        assert_eq!(html.matches("https://").count(), 1);
    }

    #[test]
    fn every_entrance_is_wired_into_the_markup() {
        let html = render_page();
        for entrance in motion::ENTRANCES {
            assert!(
                html.contains(&entrance.style()),
                "{} not applied to any element",
                entrance.name
            );
            assert!(
                html.contains(&format!("@keyframes {}", entrance.name)),
                "{} keyframes missing from stylesheet",
                entrance.name
            );
        }
    }

    #[test]
    fn shade_settles_at_its_low_resting_opacity() {
        let html = render_page();
        assert!(html.contains("opacity: 0.12;"));
        // `both` fill pins elements to their resting pose after the run.
        assert!(html.contains("both;"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let html = render_page();
        let hero = html.find("class=\"hero\"").unwrap();
        let how = html.find("id=\"how-it-works\"").unwrap();
        let decks = html.find("id=\"decks\"").unwrap();
        let roadmap = html.find("id=\"roadmap\"").unwrap();
        let footer = html.find("class=\"site-footer\"").unwrap();
        assert!(hero < how && how < decks && decks < roadmap && roadmap < footer);
    }

    #[test]
    fn footer_year_is_a_literal() {
        let html = render_page();
        assert!(html.contains("\u{a9} 2026 BlinkBook"));
    }
}
