use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Visual mode applied to the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored or rendered value. Anything but the two literal
    /// names is `None`.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme a toggle moves to from whatever the presentation currently shows.
    /// Unknown or missing values toggle to light.
    pub fn toggled_from(current: Option<&str>) -> Theme {
        match current.and_then(Theme::parse) {
            Some(theme) => theme.opposite(),
            None => Theme::Light,
        }
    }

    /// Indicator label: the theme a click switches to.
    pub fn indicator_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn indicator_tooltip(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to Light Mode",
            Theme::Light => "Switch to Dark Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| ThemeError::InvalidTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_literal_names() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(" light"), None);
        assert_eq!(Theme::parse("blue"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn from_str_reports_invalid_value() {
        let err = "blue".parse::<Theme>().expect_err("must fail");
        assert_eq!(err, ThemeError::InvalidTheme("blue".to_string()));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn toggled_from_flips_known_and_defaults_unknown() {
        assert_eq!(Theme::toggled_from(Some("dark")), Theme::Light);
        assert_eq!(Theme::toggled_from(Some("light")), Theme::Dark);
        assert_eq!(Theme::toggled_from(Some("sepia")), Theme::Light);
        assert_eq!(Theme::toggled_from(None), Theme::Light);
    }

    #[test]
    fn indicator_text_matches_contract() {
        assert_eq!(Theme::Dark.indicator_label(), "☀️");
        assert_eq!(Theme::Dark.indicator_tooltip(), "Switch to Light Mode");
        assert_eq!(Theme::Light.indicator_label(), "🌙");
        assert_eq!(Theme::Light.indicator_tooltip(), "Switch to Dark Mode");
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"blue\"").is_err());
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
