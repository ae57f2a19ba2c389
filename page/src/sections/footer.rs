use leptos::prelude::*;

use crate::content::BRAND;

/// Footer note and inert policy links.
#[component]
pub fn Footer() -> impl IntoView {
    let note = format!("\u{a9} 2026 {BRAND} \u{2014} tiny flashes, big memories");
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-note">{note}</p>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Privacy"</a>
                    <a href="#" class="footer-link">"Terms"</a>
                    <a href="#" class="footer-link">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
