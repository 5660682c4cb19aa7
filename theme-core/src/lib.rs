//! Light/dark theme control shared by the browser UI
//!
//! The controller is generic over three capabilities so it runs against
//! `web-sys` handles in the browser (see `theme-ui`) and against the
//! in-memory versions in [`memory`] everywhere else.

pub mod capability;
pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod theme;

pub use capability::{Indicator, PreferenceStore, PresentationRoot};
pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{Result, ThemeError};
pub use theme::Theme;
