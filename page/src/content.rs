//! Literal display data for the page.
//!
//! Everything the page shows is a compile-time constant: deck summaries,
//! how-it-works steps, the roadmap, palette swatches, and the one remote
//! demo photo. Nothing here is created or mutated at runtime.

/// Product name shown in the header and footer.
pub const BRAND: &str = "BlinkBook";

/// One-line tagline under the brand mark.
pub const TAGLINE: &str = "Tiny photo blinks. Big soft memories.";

/// The single remote placeholder photo used by the blink demo.
///
/// If it fails to load the frame stays in place with an empty image area;
/// there is no fallback or retry.
pub const DEMO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1503023345310-bd7c1de61c7d";

/// Summary card for a deck: a named collection of blinks.
///
/// Only the summary exists - there is no underlying collection behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckSummary {
    /// Deck name.
    pub title: &'static str,
    /// Short genre/mood label.
    pub subtitle: &'static str,
    /// Number of blinks the deck claims to hold.
    pub count: u32,
    /// First gradient stop for the card background.
    pub color_from: &'static str,
    /// Second gradient stop for the card background.
    pub color_to: &'static str,
}

impl DeckSummary {
    /// Card background as a CSS gradient between the two stops.
    pub fn gradient(&self) -> String {
        format!(
            "background: linear-gradient(135deg, {}, {});",
            self.color_from, self.color_to
        )
    }
}

/// The three decks shown in the preview grid.
pub const DECKS: [DeckSummary; 3] = [
    DeckSummary {
        title: "Us",
        subtitle: "Rom-com",
        count: 42,
        color_from: "#FFD1DC",
        color_to: "#FFFAE6",
    },
    DeckSummary {
        title: "2am Hilarities",
        subtitle: "Memes",
        count: 12,
        color_from: "#DDEBFF",
        color_to: "#F6FBFF",
    },
    DeckSummary {
        title: "Tiny Wins",
        subtitle: "Daily",
        count: 99,
        color_from: "#E9F9F1",
        color_to: "#F0FFF7",
    },
];

/// One step in the how-it-works walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Step heading, numbered in the copy itself.
    pub title: &'static str,
    /// Step body text.
    pub description: &'static str,
}

/// The three-step walkthrough.
pub const STEPS: [Step; 3] = [
    Step {
        title: "1. Upload a Blink",
        description: "Add a photo - set deck and optional mood. It will show as a 2s blink.",
    },
    Step {
        title: "2. See the Blink",
        description: "When someone opens it, the photo flashes for two seconds with a soft animation.",
    },
    Step {
        title: "3. Memory Card",
        description: "After the blink, the card flips revealing caption, doodle, and voice note.",
    },
];

/// Hero bullet list.
pub const HIGHLIGHTS: [&str; 4] = [
    "\u{2728} Blink preview animation",
    "\u{1F4AC} Voice notes on cards",
    "\u{1F331} Growable decks",
    "\u{1F512} Private by default",
];

/// MVP roadmap, in order.
pub const ROADMAP: [&str; 5] = [
    "Authentication + user decks",
    "Blink upload + 2s preview + memory card",
    "Shared deck collaboration",
    "Mobile-friendly UI and basic analytics",
    "Premium themes + stickers",
];

/// Pastel swatches shown in the design-details palette card.
pub const PALETTE: [&str; 4] = ["#FFD1DC", "#FFF3E8", "#DDEBFF", "#E9F9F1"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_gradient_uses_both_stops() {
        let css = DECKS[0].gradient();
        assert!(css.contains("linear-gradient(135deg"));
        assert!(css.contains("#FFD1DC"));
        assert!(css.contains("#FFFAE6"));
    }

    #[test]
    fn palette_swatches_are_hex_colors() {
        for swatch in PALETTE {
            assert!(swatch.starts_with('#') && swatch.len() == 7, "bad swatch {swatch}");
            assert!(swatch[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn demo_image_is_the_only_remote_url() {
        assert!(DEMO_IMAGE_URL.starts_with("https://"));
        // The URL is matched verbatim in rendered markup, so it must not
        // contain characters the HTML serializer would escape.
        assert!(!DEMO_IMAGE_URL.contains('&'));
    }
}
