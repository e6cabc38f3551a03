use config::{Config, Environment, File};

pub mod app;
pub mod keys;
pub mod ui;

pub use app::{AppConfig, LoggingConfig};

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Path of the configuration file, set once from the CLI before first access.
static CONFIG_PATH: std::sync::OnceLock<String> = std::sync::OnceLock::new();

#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

/// Override the configuration file path. Must be called before the first
/// [`get_config`] call to take effect.
pub fn set_config_path(path: &str) {
    let _ = CONFIG_PATH.set(path.to_string());
}

fn load_config() -> ConfigLoadResult {
    let path = CONFIG_PATH.get().map(String::as_str).unwrap_or("histty");
    // The file is optional; environment entries override file values.
    let file_source = File::with_name(path).required(false);
    let env_source = Environment::with_prefix("HISTTY").separator("__");

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!("Configuration loading failed: {e}"));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            panic!("Failed to load config: {e}");
        }
        ConfigLoadResult::DeserializeError(e) => {
            panic!("Failed to deserialize config: {e}");
        }
    }
}
