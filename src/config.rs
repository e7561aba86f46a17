//! Startup configuration: backend base URL and HTTP timeouts.
//!
//! The base URL comes from `BOSON_DETECTOR_API` when set, then from
//! `api_base_url` in `config.toml` inside the app directory, then from
//! [`DEFAULT_API_BASE_URL`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Filename of the optional TOML config inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable holding the backend base URL.
pub const API_ENV_VAR: &str = "BOSON_DETECTOR_API";
/// Base URL used when neither the environment nor the config file set one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:10000";

/// Resolved configuration handed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    pub http: HttpSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http: HttpSettings::default(),
        }
    }
}

impl AppConfig {
    /// URL of the schema endpoint, also shown while connecting.
    pub fn schema_url(&self) -> String {
        format!("{}/v1/schema", self.api_base_url)
    }

    /// URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/v1/predict", self.api_base_url)
    }
}

/// Timeouts applied to every backend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub http: HttpSettings,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config location unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Load configuration from the app directory and the process environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let file = load_file_or_default(&path)?;
    resolve(file, std::env::var(API_ENV_VAR).ok())
}

/// Path of `config.toml` inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Parse `path` when it exists; a missing file yields defaults.
pub fn load_file_or_default(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge the config file with an optional environment override.
pub fn resolve(file: ConfigFile, env_base_url: Option<String>) -> Result<AppConfig, ConfigError> {
    let raw = env_base_url
        .filter(|value| !value.trim().is_empty())
        .or(file.api_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    Ok(AppConfig {
        api_base_url: normalize_base_url(&raw)?,
        http: file.http,
    })
}

/// Validate an http(s) base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_read_timeout_secs() -> u64 {
    30
}
