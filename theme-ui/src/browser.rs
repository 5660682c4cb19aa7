//! `web-sys` implementations of the controller capabilities.

use dioxus_logger::tracing::warn;
use theme_core::{
    Indicator, PreferenceStore, PresentationRoot, Result, Theme, ThemeConfig, ThemeController,
    ThemeError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Storage};

pub const CONFIG_ELEMENT_ID: &str = "theme-config";

pub type BrowserThemeController = ThemeController<BrowserStore, DocumentRoot, ElementIndicator>;

pub(crate) fn describe_js_error(err: JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `window.localStorage`. Disabled storage is remembered and reported on
/// every access instead of failing construction.
pub struct BrowserStore {
    storage: std::result::Result<Storage, String>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = match web_sys::window() {
            None => Err("no global `window` exists".to_string()),
            Some(window) => match window.local_storage() {
                Ok(Some(storage)) => Ok(storage),
                Ok(None) => Err("localStorage is disabled".to_string()),
                Err(e) => Err(describe_js_error(e)),
            },
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .map_err(|reason| ThemeError::StorageUnavailable(reason.clone()))
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::PreferenceRead {
                key: key.to_string(),
                reason: describe_js_error(e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::PreferenceWrite {
                key: key.to_string(),
                reason: describe_js_error(e),
            })
    }
}

/// Attribute on `document.documentElement`.
pub struct DocumentRoot {
    root: Option<Element>,
    attribute: String,
}

impl DocumentRoot {
    pub fn new(document: Option<&Document>, attribute: &str) -> Self {
        Self {
            root: document.and_then(|d| d.document_element()),
            attribute: attribute.to_string(),
        }
    }
}

impl PresentationRoot for DocumentRoot {
    fn current(&self) -> Option<String> {
        self.root.as_ref()?.get_attribute(&self.attribute)
    }

    fn apply(&self, theme: Theme) -> Result<()> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| ThemeError::Presentation("document has no root element".to_string()))?;
        root.set_attribute(&self.attribute, theme.as_str())
            .map_err(|e| ThemeError::Presentation(describe_js_error(e)))
    }
}

/// Control looked up once by id; callers get `None` when it is not in the page.
pub struct ElementIndicator {
    element: HtmlElement,
}

impl ElementIndicator {
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        element
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|element| Self { element })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Indicator for ElementIndicator {
    fn show(&self, label: &str, tooltip: &str) {
        self.element.set_text_content(Some(label));
        self.element.set_title(tooltip);
    }
}

/// Host overrides from `<script type="application/json" id="theme-config">`.
pub fn page_config() -> ThemeConfig {
    let raw = document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => ThemeConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring page theme config: {}", e);
            ThemeConfig::default()
        }),
        _ => ThemeConfig::default(),
    }
}

/// Controller over the live document, including the indicator if present.
pub fn page_controller(config: ThemeConfig) -> BrowserThemeController {
    let document = document();
    let indicator = document
        .as_ref()
        .and_then(|d| ElementIndicator::find(d, &config.indicator_id));
    let root = DocumentRoot::new(document.as_ref(), &config.attribute);
    ThemeController::with_config(config, BrowserStore::local(), root, indicator)
}

/// Controller for callers that render the indicator themselves.
pub fn headless_controller(config: ThemeConfig) -> BrowserThemeController {
    let document = document();
    let root = DocumentRoot::new(document.as_ref(), &config.attribute);
    ThemeController::with_config(config, BrowserStore::local(), root, None)
}
