use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid theme '{0}': expected 'light' or 'dark'")]
    InvalidTheme(String),

    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("failed to read preference '{key}': {reason}")]
    PreferenceRead { key: String, reason: String },

    #[error("failed to write preference '{key}': {reason}")]
    PreferenceWrite { key: String, reason: String },

    #[error("failed to apply theme to document: {0}")]
    Presentation(String),

    #[error("invalid theme config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
