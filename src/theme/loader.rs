use crate::error::{AppError, AppResult};
use crate::theme::types::Theme;

/// Built-in theme flavors, compiled into the binary so the viewer needs no
/// theme files on disk.
const NIGHTFALL: &str = include_str!("../../themes/nightfall.toml");
const DAYLIGHT: &str = include_str!("../../themes/daylight.toml");

/// Theme loader resolving flavor names against the embedded flavor set.
#[derive(Debug, Default)]
pub struct ThemeLoader;

impl ThemeLoader {
    pub fn new() -> Self {
        Self
    }

    /// Names of all embedded flavors.
    pub fn flavors(&self) -> Vec<&'static str> {
        vec!["nightfall", "daylight"]
    }

    pub fn load_flavor(&self, flavor_name: &str) -> AppResult<Theme> {
        let source = match flavor_name {
            "nightfall" => NIGHTFALL,
            "daylight" => DAYLIGHT,
            other => {
                return Err(AppError::Config(format!(
                    "Unknown theme flavor '{other}'. Available flavors: nightfall, daylight"
                )));
            }
        };

        let mut theme: Theme = toml::from_str(source)
            .map_err(|e| AppError::Config(format!("Failed to parse theme '{flavor_name}': {e}")))?;

        if theme.metadata.flavor_name.is_none() {
            theme.metadata.flavor_name = Some(flavor_name.to_string());
        }

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_embedded_flavors_parse() {
        let loader = ThemeLoader::new();
        for flavor in loader.flavors() {
            let theme = assert_ok!(loader.load_flavor(flavor));
            assert_eq!(theme.metadata.flavor_name.as_deref(), Some(flavor));
        }
    }

    #[test]
    fn test_unknown_flavor_is_config_error() {
        let loader = ThemeLoader::new();
        let err = assert_err!(loader.load_flavor("void"));
        assert!(matches!(err, AppError::Config(_)));
    }
}
