//! Capabilities the controller is injected with.
//!
//! All methods take `&self`: browser handles are shared references, and the
//! in-memory versions use interior mutability to match.

use crate::error::Result;
use crate::theme::Theme;

/// Origin-scoped key-value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Root-level marker external styling keys off.
pub trait PresentationRoot {
    /// Raw value currently rendered, if any. May be a value this crate
    /// never writes.
    fn current(&self) -> Option<String>;

    fn apply(&self, theme: Theme) -> Result<()>;
}

/// Optional control reflecting the active theme.
pub trait Indicator {
    fn show(&self, label: &str, tooltip: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: PresentationRoot + ?Sized> PresentationRoot for &T {
    fn current(&self) -> Option<String> {
        (**self).current()
    }

    fn apply(&self, theme: Theme) -> Result<()> {
        (**self).apply(theme)
    }
}

impl<T: Indicator + ?Sized> Indicator for &T {
    fn show(&self, label: &str, tooltip: &str) {
        (**self).show(label, tooltip)
    }
}
