use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::ExoplanetRecord;

/// Where the records of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Fetched from the archive and normalized.
    Remote,
    /// Built-in sample catalog used after a failed fetch.
    Fallback,
}

impl Provenance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog table captured at one point in time.
///
/// Snapshots are replaced whole on refresh. Filtering borrows from a
/// snapshot and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CatalogSnapshot {
    pub records: Vec<ExoplanetRecord>,
    pub fetched_at: DateTime<Utc>,
    pub provenance: Provenance,
    /// Why the snapshot is a fallback, for display as a non-fatal warning.
    pub warning: Option<String>,
}

impl CatalogSnapshot {
    #[must_use]
    pub const fn remote(records: Vec<ExoplanetRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            records,
            fetched_at,
            provenance: Provenance::Remote,
            warning: None,
        }
    }

    #[must_use]
    pub fn fallback(
        records: Vec<ExoplanetRecord>,
        fetched_at: DateTime<Utc>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            records,
            fetched_at,
            provenance: Provenance::Fallback,
            warning: Some(warning.into()),
        }
    }

    /// Whether the records are live archive data rather than the sample set.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.provenance == Provenance::Remote
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name matches exactly.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ExoplanetRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}
