//! Theming for the histty terminal interface.
//!
//! Flavors are TOML color tables compiled into the binary and resolved by
//! [`loader::ThemeLoader`]. [`ThemeManager`] holds the active flavor behind
//! a process-wide mutex and exposes one accessor per color; every accessor
//! degrades to a hard fallback color when the manager is uninitialized, so
//! rendering code never fails on missing theme state.

pub mod loader;
pub mod manager;
pub mod types;

pub use manager::ThemeManager;
pub use types::ThemeConfig;
