//! Entry points for plain HTML pages that load the wasm module directly.
//!
//! ```html
//! <button id="themeToggleBtn"></button>
//! <script type="module">
//!   import init, { install } from "./theme_ui.js";
//!   await init();
//!   install();
//! </script>
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use wasm_bindgen::prelude::*;

use crate::browser::{page_config, page_controller, BrowserThemeController};
use crate::interop::{on_click, on_page_load, on_storage_change};

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<BrowserThemeController>>> = const { RefCell::new(None) };
    static WIRED: Cell<bool> = const { Cell::new(false) };
}

/// Page controller, built on first use. The indicator is looked up at that
/// point, so building before the document is parsed may miss it.
fn controller() -> Rc<BrowserThemeController> {
    CONTROLLER.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| Rc::new(page_controller(page_config())))
            .clone()
    })
}

/// Applies the saved theme on page load and wires the indicator click.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    on_page_load(|| {
        // Rebuild so the indicator lookup sees the parsed document.
        CONTROLLER.with(|slot| slot.borrow_mut().take());
        let controller = controller();
        let theme = controller.initialize();
        log::info!("Theme controller installed with {} theme", theme);
        wire_events(&controller);
    })
    .map_err(|e| JsValue::from_str(&e))
}

fn wire_events(controller: &Rc<BrowserThemeController>) {
    if WIRED.with(|wired| wired.replace(true)) {
        return;
    }

    if let Some(indicator) = controller.indicator() {
        if let Err(e) = on_click(indicator.element(), || {
            if let Err(e) = controller_toggle() {
                warn!("Theme toggle failed: {}", e);
            }
        }) {
            warn!("Failed to wire theme indicator click: {}", e);
        }
    }

    if controller.config().sync_across_tabs {
        let controller = Rc::clone(controller);
        if let Err(e) = on_storage_change(move |key, new_value| {
            controller.apply_external(key.as_deref(), new_value.as_deref());
        }) {
            warn!("Failed to subscribe to theme changes from other tabs: {}", e);
        }
    }
}

fn controller_toggle() -> theme_core::Result<theme_core::Theme> {
    controller().toggle()
}

/// Flips the theme; returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    controller_toggle()
        .map(|theme| theme.as_str().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sets `name` ("light" or "dark"); other names throw without changing anything.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) -> Result<(), JsValue> {
    controller()
        .set_named(name)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    controller().current().map(|theme| theme.as_str().to_string())
}
