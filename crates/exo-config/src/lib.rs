//! # exo-config
//!
//! Layered configuration loading for exodash using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXODASH_*` prefix, `__` as separator)
//! 2. Project-level `.exodash/config.toml`
//! 3. User-level `~/.config/exodash/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EXODASH_APOD__API_KEY` -> `apod.api_key`,
//! `EXODASH_ARCHIVE__ROW_LIMIT` -> `archive.row_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use exo_config::ExoConfig;
//!
//! let config = ExoConfig::load_with_dotenv().expect("config");
//!
//! if !config.apod.is_configured() {
//!     println!("no image-of-the-day key; the image panel will be empty");
//! }
//! ```

mod apod;
mod archive;
mod error;

pub use apod::ApodConfig;
pub use archive::{ArchiveConfig, ResultFormat};
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExoConfig {
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub apod: ApodConfig,
}

impl ExoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".exodash/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EXODASH_").split("__"))
    }

    /// Reject values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive.row_limit == 0 {
            return Err(invalid("archive.row_limit", "must be at least 1"));
        }
        if self.archive.timeout_secs == 0 {
            return Err(invalid("archive.timeout_secs", "must be at least 1"));
        }
        if self.apod.timeout_secs == 0 {
            return Err(invalid("apod.timeout_secs", "must be at least 1"));
        }
        if self.archive.endpoint.trim().is_empty() {
            return Err(invalid("archive.endpoint", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("exodash").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
