//! Untyped archive rows.
//!
//! A [`RawTable`] is what the archive returns before normalization: cells are
//! kept as JSON values so both the JSON and CSV result formats land in the
//! same shape. CSV cells arrive as strings and empty CSV cells as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One archive row, keyed by archive column name.
pub type RawRow = Map<String, Value>;

/// Ordered rows as returned by the archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTable {
    rows: Vec<RawRow>,
}

impl RawTable {
    #[must_use]
    pub const fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names present in the first row.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRow> {
        self.rows.iter()
    }
}

impl From<Vec<RawRow>> for RawTable {
    fn from(rows: Vec<RawRow>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a RawTable {
    type Item = &'a RawRow;
    type IntoIter = std::slice::Iter<'a, RawRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
