use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use theme_ui::{ThemeToggle, ThemeTokens};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ThemeTokens {}
        header {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem; background: var(--window-bg); border-bottom: 1px solid var(--border-color);",
            h1 { style: "margin: 0; font-size: 1.125rem;", "Notes" }
            ThemeToggle {}
        }
        main {
            style: "padding: 1rem; color: var(--text-secondary);",
            p { "Your theme choice is remembered on this device." }
        }
    }
}
