pub mod browser;
pub mod components;
pub mod interop;
pub mod script;

pub use browser::*;
pub use components::*;
pub use interop::*;
