//! # histty
//!
//! Terminal viewer for content version history. Renders the historical
//! versions and snapshots of a content item as a themed table, with a
//! compare mode for picking two versions, an alert panel for transient
//! status messages, and injectable row/header/alert renderers.
//!
//! ## Modules
//!
//! - [`app`] - Application model, update handling and view composition
//! - [`components`] - UI components, including the version list
//! - [`config`] - Configuration loading (file + environment)
//! - [`error`] - Error types
//! - [`localization`] - Label catalog
//! - [`logger`] - Logging setup
//! - [`models`] - Version history data model
//! - [`theme`] - Theme flavors and color accessors
//!
//! This library interface enables integration testing by providing access
//! to internal modules.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod localization;
pub mod logger;
pub mod models;
pub mod theme;

// Re-export commonly used types
pub use components::common::Msg;
pub use components::version_list::{
    ExtraClasses, ListRenderers, VersionList, VersionListProps, build_list_layout,
    is_version_active, list_class_name,
};
pub use error::AppError;
pub use models::{ComparisonState, StatusKind, StatusMessage, Version};
