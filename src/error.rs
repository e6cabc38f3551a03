use std::fmt::Display;

/// Application-wide error types for the histty terminal user interface.
///
/// Covers component lifecycle, application state transitions, configuration
/// loading and the file I/O done by the history loader. Rendering itself
/// defines no error conditions; absent optional inputs degrade to
/// "no match" or "render nothing" instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors (mount, remount, focus).
    Component(String),

    /// Application state management issues.
    State(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// File system and I/O failures, typically from loading a history export.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Io(format!("invalid history data: {err}"))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
