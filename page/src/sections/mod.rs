// Page sections, composed in fixed order by `Page`

mod blink_demo;
mod deck_preview;
mod design_details;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod roadmap;

pub use blink_demo::BlinkDemo;
pub use deck_preview::DeckPreview;
pub use design_details::DesignDetails;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use roadmap::Roadmap;
