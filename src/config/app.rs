use super::{keys::KeyBindingsConfig, ui::UiConfig};
use crate::theme::types::ThemeConfig;
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,
    locale: Option<String>,

    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    theme: Option<ThemeConfig>,
}

impl AppConfig {
    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(50))
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone().unwrap_or_default()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_on_empty_config() {
        let config: AppConfig = toml::from_str("").expect("empty config should parse");

        assert_eq!(config.poll_timeout(), Duration::from_millis(50));
        assert_eq!(config.crossterm_input_listener_retries(), 10);
        assert_eq!(config.locale(), "en");
        assert_eq!(config.logging().level(), "info");
        assert!(config.logging().file().is_none());
    }

    #[test]
    fn test_sections_deserialize() {
        let config: AppConfig = toml::from_str(
            r#"
            locale = "en"
            tick_interval_millis = 25

            [logging]
            level = "debug"
            file = "out.log"

            [keys]
            key_quit = "Q"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.tick_interval(), Duration::from_millis(25));
        assert_eq!(config.logging().level(), "debug");
        assert_eq!(config.logging().file(), Some("out.log"));
        assert_eq!(config.keys().quit(), 'Q');
    }
}
