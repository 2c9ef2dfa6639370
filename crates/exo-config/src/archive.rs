//! Exoplanet archive (TAP service) configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default synchronous TAP endpoint of the exoplanet archive.
fn default_endpoint() -> String {
    String::from("https://exoplanetarchive.ipac.caltech.edu/TAP/sync")
}

/// Catalog requests may take a while on a cold archive.
const fn default_timeout_secs() -> u64 {
    30
}

/// Upper bound on rows per query, bounding memory and render latency.
const fn default_row_limit() -> u32 {
    1000
}

/// One hour.
const fn default_ttl_secs() -> u64 {
    3600
}

/// Result format requested from the TAP service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    #[default]
    Json,
    Csv,
}

impl ResultFormat {
    /// Value of the TAP `format` request parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchiveConfig {
    /// TAP synchronous query endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Response format (`json` or `csv`).
    #[serde(default)]
    pub format: ResultFormat,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of rows requested per query.
    #[serde(default = "default_row_limit")]
    pub row_limit: u32,

    /// How long a catalog snapshot stays fresh, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            format: ResultFormat::default(),
            timeout_secs: default_timeout_secs(),
            row_limit: default_row_limit(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl ArchiveConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
