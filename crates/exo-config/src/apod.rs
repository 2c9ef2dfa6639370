//! Astronomy picture of the day configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_endpoint() -> String {
    String::from("https://api.nasa.gov/planetary/apod")
}

const fn default_thumbs() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

/// One day.
const fn default_ttl_secs() -> u64 {
    86_400
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApodConfig {
    /// Image-of-the-day endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key. Never baked into the build; set `EXODASH_APOD__API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Ask the service for a thumbnail URL on video entries.
    #[serde(default = "default_thumbs")]
    pub thumbs: bool,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long an image lookup stays fresh, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            thumbs: default_thumbs(),
            timeout_secs: default_timeout_secs(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl ApodConfig {
    /// Check if an API key has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApodConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.endpoint, "https://api.nasa.gov/planetary/apod");
        assert!(config.thumbs);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = ApodConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn configured_with_key() {
        let config = ApodConfig {
            api_key: "DEMO_KEY".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
