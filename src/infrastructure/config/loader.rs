use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Model identifier cannot be empty")]
    EmptyModel,

    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid max_tokens: {0}. Must be at least 1")]
    InvalidMaxTokens(u32),

    #[error("Invalid temperature: {0}. Must be between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),

    #[error("Store path cannot be empty")]
    EmptyStorePath,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .postsmith/config.yaml (project config)
    /// 3. .postsmith/local.yaml (local overrides, optional)
    /// 4. Environment variables (`POSTSMITH_`* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".postsmith/config.yaml"))
            .merge(Yaml::file(".postsmith/local.yaml"))
            .merge(Env::prefixed("POSTSMITH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.openai.model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if config.openai.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.openai.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens(config.openai.max_tokens));
        }

        if !(0.0..=2.0).contains(&config.openai.temperature) {
            return Err(ConfigError::InvalidTemperature(config.openai.temperature));
        }

        if config.openai.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.openai.timeout_secs));
        }

        if config.store.path.is_empty() {
            return Err(ConfigError::EmptyStorePath);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let mut config = Config::default();
        config.openai.temperature = 3.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.openai.model = String::new();
        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_env_variables_override_defaults() {
        temp_env::with_vars(
            [
                ("POSTSMITH_OPENAI__MODEL", Some("gpt-4o-mini")),
                ("POSTSMITH_OPENAI__API_KEY", Some("sk-from-env")),
                ("POSTSMITH_LOGGING__LEVEL", Some("debug")),
            ],
            || {
                let config = ConfigLoader::load().unwrap();
                assert_eq!(config.openai.model, "gpt-4o-mini");
                assert_eq!(config.openai.api_key.as_deref(), Some("sk-from-env"));
                assert_eq!(config.logging.level, "debug");
                // Untouched settings keep their defaults.
                assert_eq!(config.openai.max_tokens, 700);
            },
        );
    }

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "openai:\n  model: gpt-4-turbo\nlogging:\n  format: json\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.openai.model, "gpt-4-turbo");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.store.path, ".postsmith/draft.json");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "logging:\n  format: xml\n").unwrap();

        assert!(ConfigLoader::load_from_file(&path).is_err());
    }
}
