use tracing::{debug, warn};

use crate::capability::{Indicator, PreferenceStore, PresentationRoot};
use crate::config::ThemeConfig;
use crate::error::Result;
use crate::theme::Theme;

/// Keeps the persisted preference, the document presentation and the
/// optional indicator on the same theme.
///
/// The controller holds no theme of its own: the presentation root is the
/// source of truth for [`toggle`](Self::toggle), and the store is only read
/// by [`initialize`](Self::initialize).
pub struct ThemeController<S, R, I> {
    config: ThemeConfig,
    store: S,
    root: R,
    indicator: Option<I>,
}

impl<S, R, I> ThemeController<S, R, I>
where
    S: PreferenceStore,
    R: PresentationRoot,
    I: Indicator,
{
    pub fn new(store: S, root: R, indicator: Option<I>) -> Self {
        Self::with_config(ThemeConfig::default(), store, root, indicator)
    }

    pub fn with_config(config: ThemeConfig, store: S, root: R, indicator: Option<I>) -> Self {
        Self {
            config,
            store,
            root,
            indicator,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn indicator(&self) -> Option<&I> {
        self.indicator.as_ref()
    }

    /// Applies the stored preference, falling back to the configured default
    /// when it is missing, unrecognized or unreadable. Never fails.
    pub fn initialize(&self) -> Theme {
        let theme = self.stored_theme();
        if let Err(e) = self.set(theme) {
            warn!("Theme '{}' applied with errors on load: {}", theme, e);
        }
        theme
    }

    /// Switches to the opposite of the rendered theme and persists it.
    pub fn toggle(&self) -> Result<Theme> {
        let current = self.root.current();
        let next = Theme::toggled_from(current.as_deref());
        self.set(next)?;
        Ok(next)
    }

    /// Applies `theme` to the presentation, the store and the indicator.
    ///
    /// Every step is attempted; the first failure is returned afterwards.
    pub fn set(&self, theme: Theme) -> Result<()> {
        let applied = self.root.apply(theme);
        let persisted = self.store.set(&self.config.storage_key, theme.as_str());
        self.show_indicator(theme);

        debug!("Theme set to {}", theme);

        applied.and(persisted)
    }

    /// Parses `name` and sets it. Invalid names change nothing.
    pub fn set_named(&self, name: &str) -> Result<Theme> {
        let theme: Theme = name.parse()?;
        self.set(theme)?;
        Ok(theme)
    }

    /// Rendered theme, `None` before initialize or if foreign markup set an
    /// unknown value.
    pub fn current(&self) -> Option<Theme> {
        self.root.current().as_deref().and_then(Theme::parse)
    }

    /// Follows a preference change made by another page of the same origin.
    ///
    /// The value is applied without being written back. Returns the applied
    /// theme, or `None` when the change is for another key, a removal, or an
    /// unrecognized value.
    pub fn apply_external(&self, key: Option<&str>, new_value: Option<&str>) -> Option<Theme> {
        if key != Some(self.config.storage_key.as_str()) {
            return None;
        }
        let theme = new_value.and_then(Theme::parse)?;
        if let Err(e) = self.root.apply(theme) {
            warn!("Failed to apply theme from another tab: {}", e);
        }
        self.show_indicator(theme);
        Some(theme)
    }

    fn stored_theme(&self) -> Theme {
        let key = &self.config.storage_key;
        match self.store.get(key) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring unrecognized stored theme '{}'", value);
                self.config.default_theme
            }),
            Ok(None) => self.config.default_theme,
            Err(e) => {
                warn!("Failed to read theme preference, using default: {}", e);
                self.config.default_theme
            }
        }
    }

    fn show_indicator(&self, theme: Theme) {
        if let Some(indicator) = &self.indicator {
            indicator.show(theme.indicator_label(), theme.indicator_tooltip());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::memory::{MemoryIndicator, MemoryRoot, MemoryStore};

    type MemoryController = ThemeController<MemoryStore, MemoryRoot, MemoryIndicator>;

    fn controller(store: &MemoryStore, root: &MemoryRoot) -> MemoryController {
        ThemeController::new(store.clone(), root.clone(), Some(MemoryIndicator::new()))
    }

    #[test]
    fn set_attempts_every_step_when_presentation_fails() {
        let store = MemoryStore::new();
        let root = MemoryRoot::new();
        let indicator = MemoryIndicator::new();
        let controller =
            ThemeController::new(store.clone(), root.clone(), Some(indicator.clone()));

        root.reject_applies(true);
        let err = controller.set(Theme::Dark).expect_err("must fail");

        assert!(matches!(err, ThemeError::Presentation(_)));
        assert_eq!(store.value("theme"), Some("dark".to_string()));
        assert_eq!(indicator.label(), Some("☀️".to_string()));
    }

    #[test]
    fn set_named_rejects_before_touching_state() {
        let store = MemoryStore::new();
        let root = MemoryRoot::new();
        let controller = controller(&store, &root);

        let err = controller.set_named("blue").expect_err("must fail");
        assert_eq!(err, ThemeError::InvalidTheme("blue".to_string()));
        assert_eq!(root.value(), None);
        assert_eq!(store.writes(), 0);

        assert_eq!(controller.set_named("dark"), Ok(Theme::Dark));
    }

    #[test]
    fn toggle_from_foreign_value_goes_light() {
        let store = MemoryStore::new();
        let root = MemoryRoot::with_value("sepia");
        let controller = controller(&store, &root);

        assert_eq!(controller.current(), None);
        assert_eq!(controller.toggle(), Ok(Theme::Light));
        assert_eq!(root.value(), Some("light".to_string()));
    }

    #[test]
    fn custom_key_and_default_are_honored() {
        let store = MemoryStore::new();
        let root = MemoryRoot::new();
        let config = ThemeConfig {
            storage_key: "notes-theme".to_string(),
            default_theme: Theme::Dark,
            ..ThemeConfig::default()
        };
        let controller =
            ThemeController::<_, _, MemoryIndicator>::with_config(config, &store, &root, None);

        assert_eq!(controller.initialize(), Theme::Dark);
        assert_eq!(store.value("notes-theme"), Some("dark".to_string()));
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn apply_external_filters_key_and_value() {
        let store = MemoryStore::new();
        let root = MemoryRoot::new();
        let controller = controller(&store, &root);

        assert_eq!(controller.apply_external(Some("other"), Some("dark")), None);
        assert_eq!(controller.apply_external(Some("theme"), None), None);
        assert_eq!(controller.apply_external(Some("theme"), Some("blue")), None);
        assert_eq!(controller.apply_external(None, None), None);
        assert_eq!(root.value(), None);

        assert_eq!(
            controller.apply_external(Some("theme"), Some("dark")),
            Some(Theme::Dark)
        );
        assert_eq!(root.value(), Some("dark".to_string()));
        assert_eq!(store.writes(), 0);
    }
}
