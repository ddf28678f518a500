//! User configuration loaded from `config.toml`.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::APP_NAME;
use delve_core::rules::ENEMY_TICK_MILLIS;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("tick_interval_ms must be positive")]
    ZeroTickInterval,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Period of the enemy timer.
    pub tick_interval_ms: u64,
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    pub log_filter: String,
    /// Falls back to the platform data dir when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { tick_interval_ms: ENEMY_TICK_MILLIS, log_filter: "info".to_string(), log_dir: None }
    }
}

impl AppConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads `explicit` if given, else the platform default. A missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::get_default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Self::load_file(&path)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };
        let config: Self = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_tick_override(mut self, tick_ms: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(tick_ms) = tick_ms {
            self.tick_interval_ms = tick_ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("delve-logs"))
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
