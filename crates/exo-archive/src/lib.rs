//! # exo-archive
//!
//! HTTP clients for the two remote services the dashboard reads:
//! - the exoplanet archive's TAP endpoint (catalog query and name search)
//! - the astronomy picture of the day service
//!
//! Each call is a single GET with a per-request timeout and no retries;
//! callers decide what to do with a [`FetchError`]. Dropping the returned
//! future cancels the request.

pub mod apod;
pub mod format;
pub mod query;
pub mod tap;

mod error;
mod http;

pub use error::{FetchError, FetchErrorKind};
pub use query::{CatalogQuery, sanitize_term};

use exo_config::{ApodConfig, ArchiveConfig, ExoConfig};

/// User agent sent with every request.
const USER_AGENT: &str = "exodash/0.1";

/// HTTP client for the archive and image services.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    archive: ArchiveConfig,
    apod: ApodConfig,
}

impl ArchiveClient {
    /// Create a client for the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(archive: ArchiveConfig, apod: ApodConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            archive,
            apod,
        })
    }

    /// Create a client from a loaded [`ExoConfig`].
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &ExoConfig) -> Result<Self, FetchError> {
        Self::new(config.archive.clone(), config.apod.clone())
    }

    #[must_use]
    pub const fn archive_config(&self) -> &ArchiveConfig {
        &self.archive
    }

    #[must_use]
    pub const fn apod_config(&self) -> &ApodConfig {
        &self.apod
    }
}
