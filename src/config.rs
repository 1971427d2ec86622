/// Application configuration
///
/// Read from `config.toml` in the user's config directory. Every field is
/// optional; a missing file means all defaults. The backend URL can also
/// be set with `SNAPPRO_BACKEND_URL`.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable overriding [`Config::api_url`].
pub const BACKEND_URL_ENV: &str = "SNAPPRO_BACKEND_URL";

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Allowed range for the contact confirmation delay, in milliseconds
const CONTACT_CLOSE_DELAY_MS: std::ops::RangeInclusive<u64> = 2000..=3000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the SnapPro backend, without trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// How long the contact confirmation stays up before closing.
    /// Clamped to 2-3 seconds.
    pub contact_close_delay_ms: u64,
    /// Where the login session is stored. Defaults to the data directory.
    pub session_db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 15,
            contact_close_delay_ms: 2000,
            session_db: None,
        }
    }
}

impl Config {
    /// Load from the default path, then apply the environment override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            config.set_api_url(&url);
        }
        Ok(config)
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        let url = config.api_url.clone();
        config.set_api_url(&url);
        Ok(config)
    }

    /// `<config dir>/snappro/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snappro").join("config.toml"))
    }

    fn set_api_url(&mut self, url: &str) {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            self.api_url = url.to_string();
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn contact_close_delay(&self) -> Duration {
        Duration::from_millis(
            self.contact_close_delay_ms
                .clamp(*CONTACT_CLOSE_DELAY_MS.start(), *CONTACT_CLOSE_DELAY_MS.end()),
        )
    }
}
