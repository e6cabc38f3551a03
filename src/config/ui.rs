use serde::Deserialize;

/// UI-specific configuration: startup defaults for the version list view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    show_header: Option<bool>,
    compare_mode_available: Option<bool>,
    extra_class: Option<String>,
}

impl UiConfig {
    /// Whether the version list renders its header row.
    pub fn show_header(&self) -> bool {
        self.show_header.unwrap_or(true)
    }

    /// Whether compare mode is offered at all.
    pub fn compare_mode_available(&self) -> bool {
        self.compare_mode_available.unwrap_or(true)
    }

    /// Extra style token appended to the list's class name.
    pub fn extra_class(&self) -> &str {
        self.extra_class.as_deref().unwrap_or("history-viewer__table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_defaults() {
        let ui = UiConfig::default();
        assert!(ui.show_header());
        assert!(ui.compare_mode_available());
        assert_eq!(ui.extra_class(), "history-viewer__table");
    }

    #[test]
    fn test_ui_overrides() {
        let ui: UiConfig = toml::from_str(
            r#"
            show_header = false
            compare_mode_available = false
            extra_class = "audit-log__table"
            "#,
        )
        .expect("ui config should parse");

        assert!(!ui.show_header());
        assert!(!ui.compare_mode_available());
        assert_eq!(ui.extra_class(), "audit-log__table");
    }
}
