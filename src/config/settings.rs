// src/config/settings.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_DIR_NAME: &str = "health-predict";
pub const ENV_PREFIX: &str = "HEALTH_PREDICT";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "health_predict_gui=info";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Config(#[from] config::ConfigError),
    #[error("api_base_url must not be empty")]
    EmptyBaseUrl,
}

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub api_base_url: String,
    /// Unset means requests wait for the backend indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `<config dir>/health-predict/settings.*`, then `HEALTH_PREDICT_*` env vars.
    pub fn load() -> Result<Self, SettingsError> {
        let config_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));
        Self::load_from(config_dir.as_deref(), ENV_PREFIX)
    }

    pub fn load_from(config_dir: Option<&Path>, env_prefix: &str) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        if let Some(dir) = config_dir {
            let file_stem = settings_file_stem(dir);
            builder = builder.add_source(
                config::File::with_name(&file_stem.to_string_lossy()).required(false),
            );
        }

        let settings: Settings = builder
            .add_source(config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validated()
    }

    fn validated(mut self) -> Result<Self, SettingsError> {
        let trimmed = self.api_base_url.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::EmptyBaseUrl);
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn settings_file_stem(dir: &Path) -> PathBuf {
    dir.join("settings")
}
