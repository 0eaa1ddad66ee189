//! Optional RON config file plus environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use pickr_core::DEFAULT_PER_PAGE;
use pickr_engine::{
    ClientSettings, RetryPolicy, DEFAULT_INITIAL_DELAY_MS, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_DELAY_MS,
};
use pickr_logging::{pickr_info, LogDestination, LogSettings};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_FILENAME: &str = "pickr.ron";
const API_KEY_ENV: &str = "FLICKR_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogTarget {
    File,
    #[default]
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub per_page: Option<u32>,
    pub retry: RetryConfig,
    pub log_destination: LogTarget,
}

impl AppConfig {
    /// Reads `path`, or `./pickr.ron` if it exists, then applies `FLICKR_API_KEY`.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = Some(key.trim().to_string());
            }
        }
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        pickr_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, String> {
        ron::from_str(content).map_err(|err| err.to_string())
    }

    pub fn client_settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            api_key: self.api_key.clone().unwrap_or_default(),
            request_timeout: self
                .request_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            ..defaults
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_attempts,
            Duration::from_millis(self.retry.initial_delay_ms),
            Duration::from_millis(self.retry.max_delay_ms),
        )
    }

    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    pub fn log_settings(&self, verbose: bool) -> LogSettings {
        LogSettings {
            level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            destination: match self.log_destination {
                LogTarget::File => LogDestination::File,
                LogTarget::Terminal => LogDestination::Terminal,
                LogTarget::Both => LogDestination::Both,
            },
            ..LogSettings::default()
        }
    }
}
