//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when querying the archive or the image service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connection refused, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Response body could not be parsed in the expected format.
    #[error("parse error: {0}")]
    Parse(String),

    /// Response parsed but held no rows.
    #[error("service returned no rows")]
    Empty,

    /// The query could not be built from the caller's input.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A required configuration value is missing.
    #[error("not configured: {0}")]
    NotConfigured(&'static str),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Transport failure, timeout, or non-2xx status.
    Network,
    /// Reachable service, unusable body.
    Service,
    /// Rejected before any request was sent.
    Request,
}

impl FetchError {
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Http(_) | Self::Api { .. } | Self::RateLimited { .. } => FetchErrorKind::Network,
            Self::Parse(_) | Self::Empty => FetchErrorKind::Service,
            Self::InvalidQuery(_) | Self::NotConfigured(_) => FetchErrorKind::Request,
        }
    }

    /// Whether the request hit its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
