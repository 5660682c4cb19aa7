use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_INDICATOR_ID: &str = "themeToggleBtn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding the persisted preference
    pub storage_key: String,
    /// Attribute set on the document root element
    pub attribute: String,
    /// Element id of the optional indicator control
    pub indicator_id: String,
    /// Theme used when nothing usable is stored
    pub default_theme: Theme,
    /// Follow preference changes made in other tabs of the same origin.
    pub sync_across_tabs: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            indicator_id: DEFAULT_INDICATOR_ID.to_string(),
            default_theme: Theme::Light,
            sync_across_tabs: false,
        }
    }
}

impl ThemeConfig {
    /// Parses host-supplied overrides. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ThemeConfig =
            serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".into()));
        }
        if self.attribute.is_empty() {
            return Err(ThemeError::Config("attribute must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.indicator_id, "themeToggleBtn");
        assert_eq!(config.default_theme, Theme::Light);
        assert!(!config.sync_across_tabs);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ThemeConfig::from_json(r#"{"sync_across_tabs": true}"#).expect("parses");
        assert!(config.sync_across_tabs);
        assert_eq!(config.storage_key, "theme");

        let config = ThemeConfig::from_json(r#"{"default_theme": "dark"}"#).expect("parses");
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    fn rejects_unknown_theme_and_empty_key() {
        let err = ThemeConfig::from_json(r#"{"default_theme": "blue"}"#).expect_err("must fail");
        assert!(matches!(err, ThemeError::Config(_)));

        let err = ThemeConfig::from_json(r#"{"storage_key": ""}"#).expect_err("must fail");
        assert!(err.to_string().contains("storage_key"));
    }
}
