// Core components
pub mod common;
pub mod state;

// Display components
pub mod help_bar;
pub mod text_label;

// Complex components
pub mod version_list;

// System components
pub mod global_key_watcher;
