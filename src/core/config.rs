//! TOML configuration for the problem finder engine
//!
//! Hosts may ship a `problemscan.toml` next to their own settings or rely on
//! the per-user default location. Missing files fall back to defaults; a
//! present-but-broken file is reported as an error so hosts can surface it.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Engine configuration with host-overridable defaults
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Minimum wall-clock time between two non-forced scan cycles, in milliseconds
    pub throttle_millis: u64,

    /// Whether host change notifications trigger scans automatically
    pub auto_refresh: bool,

    /// Initial log level handed to `core::logging::init_logging`
    pub log_level: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            throttle_millis: 1_000,
            auto_refresh: true,
            log_level: "info".to_string(),
        }
    }
}

impl FinderConfig {
    /// Throttle interval as a `Duration`
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_millis)
    }

    /// Default per-user configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("problemscan").join("problemscan.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// or parsed is logged and also falls back to defaults, so a broken
    /// config never disables the problem finder itself.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring configuration file: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
