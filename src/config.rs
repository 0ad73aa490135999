use crate::core::season::Hemisphere;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub geolocation: GeolocationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: None,
        }
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}
fn default_server_port() -> u16 {
    8080
}

/// Target for the text-generation service
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_generation_host")]
    pub host: String,
    #[serde(default = "default_generation_model")]
    pub model: String,
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            host: default_generation_host(),
            model: default_generation_model(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

fn default_generation_host() -> String {
    "http://ollama-llm:11434".to_string()
}
fn default_generation_model() -> String {
    "gpt-oss:20b-cloud".to_string()
}
fn default_generation_timeout() -> u64 {
    30
}

/// IP lookup endpoint and the fallbacks used when it fails or is disabled
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationSettings {
    #[serde(default = "default_geolocation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_geolocation_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_region")]
    pub default_region: String,
    #[serde(default)]
    pub default_hemisphere: Hemisphere,
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geolocation_endpoint(),
            enabled: true,
            timeout_secs: default_geolocation_timeout(),
            default_region: default_region(),
            default_hemisphere: Hemisphere::default(),
        }
    }
}

fn default_geolocation_endpoint() -> String {
    "https://ipinfo.io/json".to_string()
}
fn default_geolocation_timeout() -> u64 {
    5
}
fn default_region() -> String {
    "france".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PAIR_)
    /// 4. Legacy flat environment names (OLLAMA_HOST, DEFAULT_REGION, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PAIR_)
            // e.g., PAIR_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PAIR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Flat environment names predate the structured overrides; keep
        // honoring them.
        settings = apply_legacy_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PAIR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Map the legacy flat environment names onto their structured keys
///
/// OLLAMA_HOST, OLLAMA_MODEL, DEFAULT_REGION, DEFAULT_HEMISPHERE and
/// GEOLOCATE_ENABLED override the corresponding generation.* and
/// geolocation.* settings.
fn apply_legacy_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("OLLAMA_HOST") {
        builder = builder.set_override("generation.host", host)?;
    }
    if let Ok(model) = env::var("OLLAMA_MODEL") {
        builder = builder.set_override("generation.model", model)?;
    }
    if let Ok(region) = env::var("DEFAULT_REGION") {
        builder = builder.set_override("geolocation.default_region", region)?;
    }
    if let Ok(hemisphere) = env::var("DEFAULT_HEMISPHERE") {
        builder = builder.set_override("geolocation.default_hemisphere", hemisphere)?;
    }
    if let Ok(enabled) = env::var("GEOLOCATE_ENABLED") {
        builder = builder.set_override("geolocation.enabled", enabled.to_lowercase() == "true")?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.generation.host, "http://ollama-llm:11434");
        assert_eq!(settings.generation.model, "gpt-oss:20b-cloud");
        assert_eq!(settings.generation.timeout_secs, 30);
        assert_eq!(settings.geolocation.endpoint, "https://ipinfo.io/json");
        assert!(settings.geolocation.enabled);
        assert_eq!(settings.geolocation.default_region, "france");
        assert_eq!(settings.geolocation.default_hemisphere, Hemisphere::Northern);
    }

    #[test]
    fn test_defaults_deserialize_from_empty_source() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.geolocation.timeout_secs, 5);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
