//! Application logic for the histty TUI.
//!
//! Model-view-update: the [`model::Model`] owns the component application
//! and the [`history_state::HistoryState`] store, [`updates`] mutates the
//! store in response to component messages and remounts the list with a
//! fresh props snapshot, and the view module draws the layout.

/// Version-history state owned by the application
pub mod history_state;
/// Core application model and lifecycle
pub mod model;
/// Message processing and state update logic
pub mod updates;
/// UI rendering and view composition
pub mod view;
