//! ADQL query construction for the planetary systems table.
//!
//! Every query selects the same fixed column list from `ps`, restricted to
//! the archive's default parameter set (one row per planet). User search
//! terms are sanitized before they are interpolated into a string literal.

use exo_core::{DISCOVERY_YEAR_COLUMN, HOST_STAR_COLUMN, PLANET_NAME_COLUMN, archive_columns};

use crate::error::FetchError;

/// Planetary systems table.
pub const PLANETS_TABLE: &str = "ps";

/// Restricts `ps` to one representative row per planet.
const DEFAULT_ROW_FILTER: &str = "default_flag = 1";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    /// Newest discoveries first.
    Latest,
    /// Sanitized, lower-cased substring matched against name and host.
    Search(String),
}

/// A catalog query ready to be rendered as ADQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    selection: Selection,
    limit: u32,
}

impl CatalogQuery {
    /// The most recent `limit` planets, ordered by discovery year descending.
    #[must_use]
    pub const fn latest(limit: u32) -> Self {
        Self {
            selection: Selection::Latest,
            limit,
        }
    }

    /// Planets whose name or host contains `term`, case-insensitively,
    /// ordered by planet name.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidQuery`] if nothing is left of `term`
    /// after sanitizing.
    pub fn search(term: &str, limit: u32) -> Result<Self, FetchError> {
        let term = sanitize_term(term)
            .ok_or_else(|| FetchError::InvalidQuery(format!("empty search term: {term:?}")))?;
        Ok(Self {
            selection: Selection::Search(term),
            limit,
        })
    }

    /// Render the query as ADQL.
    #[must_use]
    pub fn to_adql(&self) -> String {
        let columns = archive_columns().join(", ");
        let limit = self.limit;
        match &self.selection {
            Selection::Latest => format!(
                "SELECT TOP {limit} {columns} FROM {PLANETS_TABLE} \
                 WHERE {DEFAULT_ROW_FILTER} \
                 ORDER BY {DISCOVERY_YEAR_COLUMN} DESC"
            ),
            Selection::Search(term) => format!(
                "SELECT TOP {limit} {columns} FROM {PLANETS_TABLE} \
                 WHERE {DEFAULT_ROW_FILTER} \
                 AND (LOWER({PLANET_NAME_COLUMN}) LIKE '%{term}%' \
                 OR LOWER({HOST_STAR_COLUMN}) LIKE '%{term}%') \
                 ORDER BY {PLANET_NAME_COLUMN}"
            ),
        }
    }
}

/// Make a user search term safe to embed in an ADQL `LIKE` literal.
///
/// Trims and lower-cases the term, drops control characters and the `LIKE`
/// wildcards `%` and `_`, and doubles single quotes. Returns `None` when
/// nothing searchable remains.
#[must_use]
pub fn sanitize_term(term: &str) -> Option<String> {
    let cleaned: String = term
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_control() && *c != '%' && *c != '_')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(cleaned.replace('\'', "''"))
}
