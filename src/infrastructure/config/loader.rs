use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::UserDirs;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Config file location relative to the home directory.
pub const CONFIG_FILE: &str = ".config/github-desktop-notifications/config.yaml";

/// Prefix of environment variable overrides, e.g. `GHDN_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "GHDN_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid api_url: {0:?}. Must be an http(s) URL")]
    InvalidApiUrl(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `~/.config/github-desktop-notifications/config.yaml` (optional)
    /// 3. Environment variables (`GHDN_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        match Self::default_path() {
            Some(path) => Self::load_from_file(path),
            None => Self::extract(Self::figment(None)),
        }
    }

    /// Load configuration from a specific file, still honouring env overrides
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        Self::extract(Self::figment(Some(path)))
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Default config file path, if a home directory can be found
    pub fn default_path() -> Option<PathBuf> {
        UserDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILE))
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .context("Failed to extract configuration from figment")?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let api_url = config.github.api_url.as_str();
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.to_string()));
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        Ok(())
    }
}
