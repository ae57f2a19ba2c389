// BlinkBook Landing Page — Leptos 0.8 Edition

use blinkbook_page::Page;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    // Console greeting on mount
    Effect::new(move || {
        print_console_greeting();
    });

    view! { <Page /> }
}

/// Print a styled greeting to the browser console
fn print_console_greeting() {
    if let Some(_window) = web_sys::window() {
        web_sys::console::log_2(
            &JsValue::from_str("%cBlinkBook — tiny flashes, big memories"),
            &JsValue::from_str("color: #ff8fab; font-weight: bold; font-size: 14px;"),
        );
        web_sys::console::log_2(
            &JsValue::from_str("%cCapture a moment. See it for a blink. Keep it forever."),
            &JsValue::from_str("color: #888;"),
        );
    }
}
