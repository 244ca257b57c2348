use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,
}

fn default_gemini_endpoint() -> String { crate::services::gemini::DEFAULT_ENDPOINT.to_string() }
fn default_gemini_model() -> String { crate::services::gemini::DEFAULT_MODEL.to_string() }
fn default_gemini_timeout() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "data/properties.json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with VIBE_)
    /// 4. GEMINI_API_KEY, if set
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., VIBE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(ConfigError::Message("gemini.api_key must not be empty".to_string()));
        }
        Ok(self)
    }
}

/// Apply the conventional GEMINI_API_KEY variable on top of loaded sources
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
        builder = builder.set_override("gemini.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml("[gemini]\napi_key = \"secret\"\n").unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.gemini.model, "gemini-2.5-flash");
        assert_eq!(settings.gemini.timeout_secs, 60);
        assert_eq!(settings.dataset.path, "data/properties.json");
    }

    #[test]
    fn test_missing_api_key_fails() {
        assert!(from_toml("[server]\nport = 8080\n").is_err());
        assert!(from_toml("[gemini]\napi_key = \"  \"\n").is_err());
    }
}
