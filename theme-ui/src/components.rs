use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use theme_core::Theme;

use crate::browser::{headless_controller, page_config};

/// Indicator button that owns the page theme.
///
/// The button renders its own label and tooltip, so the controller is built
/// without a DOM indicator. `sync_across_tabs` is not honoured here: changes
/// made in other tabs show up after a reload. Pages that need live sync use
/// [`crate::script::install`] instead.
#[component]
pub fn ThemeToggle() -> Element {
    let controller = use_hook(|| {
        let config = page_config();
        if config.sync_across_tabs {
            debug!("ThemeToggle does not follow other tabs; sync_across_tabs ignored");
        }
        Rc::new(headless_controller(config))
    });
    let mut current_theme = use_signal(|| None::<Theme>);
    let indicator_id = controller.config().indicator_id.clone();

    {
        let controller = controller.clone();
        use_effect(move || {
            current_theme.set(Some(controller.initialize()));
        });
    }

    let on_toggle = move |_: Event<MouseData>| match controller.toggle() {
        Ok(theme) => current_theme.set(Some(theme)),
        Err(e) => {
            warn!("Theme toggle failed: {}", e);
            current_theme.set(controller.current());
        }
    };

    let theme = current_theme().unwrap_or_default();

    rsx! {
        button {
            id: "{indicator_id}",
            class: "theme-toggle-btn",
            style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: var(--window-bg, #1f2937); color: var(--text-secondary, #9ca3af); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0;",
            title: theme.indicator_tooltip(),
            onclick: on_toggle,
            {theme.indicator_label()}
        }
    }
}

/// CSS custom properties for both themes, keyed off `:root[data-theme]`.
#[component]
pub fn ThemeTokens() -> Element {
    rsx! {
        style { {THEME_TOKENS} }
    }
}

const THEME_TOKENS: &str = r#"
:root,
:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --accent-bg: #2563eb;
    --border-color: #cbd5e1;
    --window-bg: var(--bg-secondary);
    --hover-bg: rgba(15, 23, 42, 0.08);
    --radius-md: 8px;
}

:root[data-theme="dark"] {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --accent-bg: #3b82f6;
    --border-color: #334155;
    --window-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.theme-toggle-btn:hover {
    background: var(--hover-bg) !important;
}
"#;
