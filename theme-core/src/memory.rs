//! In-memory capabilities for native hosts and tests.
//!
//! Clones share state, so a test can hand one handle to a controller and
//! inspect another, or build a second controller over the same store to
//! simulate a reload or another tab.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::capability::{Indicator, PreferenceStore, PresentationRoot};
use crate::error::{Result, ThemeError};
use crate::theme::Theme;

#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<String, String>,
    reads_fail: bool,
    writes_fail: bool,
    writes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Stored value, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.state.borrow().entries.get(key).cloned()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().reads_fail = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().writes_fail = fail;
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.borrow();
        if state.reads_fail {
            return Err(ThemeError::PreferenceRead {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            });
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.writes_fail {
            return Err(ThemeError::PreferenceWrite {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RootState {
    value: Option<String>,
    rejects: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    state: Rc<RefCell<RootState>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the root with an arbitrary rendered value, as foreign markup might.
    pub fn with_value(value: &str) -> Self {
        let root = Self::new();
        root.state.borrow_mut().value = Some(value.to_string());
        root
    }

    pub fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    pub fn reject_applies(&self, reject: bool) {
        self.state.borrow_mut().rejects = reject;
    }
}

impl PresentationRoot for MemoryRoot {
    fn current(&self) -> Option<String> {
        self.value()
    }

    fn apply(&self, theme: Theme) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.rejects {
            return Err(ThemeError::Presentation("root element detached".to_string()));
        }
        state.value = Some(theme.as_str().to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryIndicator {
    shown: Rc<RefCell<Option<(String, String)>>>,
}

impl MemoryIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> Option<String> {
        self.shown.borrow().as_ref().map(|(label, _)| label.clone())
    }

    pub fn tooltip(&self) -> Option<String> {
        self.shown.borrow().as_ref().map(|(_, tooltip)| tooltip.clone())
    }
}

impl Indicator for MemoryIndicator {
    fn show(&self, label: &str, tooltip: &str) {
        *self.shown.borrow_mut() = Some((label.to_string(), tooltip.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(other.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(other.writes(), 1);
    }

    #[test]
    fn injected_failures_leave_entries_untouched() {
        let store = MemoryStore::with_entry("theme", "light");
        store.fail_writes(true);
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.value("theme"), Some("light".to_string()));
        assert_eq!(store.writes(), 0);

        store.fail_reads(true);
        assert!(matches!(
            store.get("theme"),
            Err(ThemeError::PreferenceRead { .. })
        ));
    }

    #[test]
    fn root_keeps_foreign_value_until_applied() {
        let root = MemoryRoot::with_value("sepia");
        assert_eq!(root.current(), Some("sepia".to_string()));
        root.apply(Theme::Dark).unwrap();
        assert_eq!(root.current(), Some("dark".to_string()));
    }
}
