//! Conjunctive record filters.
//!
//! A record passes when it satisfies all three predicates: method set
//! membership, case-insensitive name substring, and inclusive year range.
//! Default values pass everything. Filtering borrows from the input and
//! keeps its order.

use std::collections::BTreeSet;

use exo_core::{CatalogSnapshot, ExoplanetRecord};
use serde::{Deserialize, Serialize};

/// Inclusive discovery-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Every representable year.
    pub const ALL: Self = Self {
        min: i32::MIN,
        max: i32::MAX,
    };

    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((min, max): (i32, i32)) -> Self {
        Self::new(min, max)
    }
}

/// User-supplied filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Allowed discovery methods. Empty allows all.
    #[serde(default)]
    pub methods: BTreeSet<String>,
    /// Required substring of the planet name, matched case-insensitively.
    /// Empty matches all.
    #[serde(default)]
    pub name_contains: String,
    #[serde(default)]
    pub years: YearRange,
}

impl CatalogFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_methods<I, M>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.methods = methods.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = needle.into();
        self
    }

    #[must_use]
    pub const fn with_years(mut self, min: i32, max: i32) -> Self {
        self.years = YearRange::new(min, max);
        self
    }

    /// Whether every field is at its pass-through default.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.methods.is_empty() && self.name_contains.is_empty() && self.years == YearRange::ALL
    }

    #[must_use]
    pub fn matches(&self, record: &ExoplanetRecord) -> bool {
        self.matches_with_needle(record, &self.name_contains.to_lowercase())
    }

    /// Records passing the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ExoplanetRecord]) -> Vec<&'a ExoplanetRecord> {
        let needle = self.name_contains.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_with_needle(r, &needle))
            .collect()
    }

    fn matches_with_needle(&self, record: &ExoplanetRecord, needle: &str) -> bool {
        (self.methods.is_empty() || self.methods.contains(&record.discovery_method))
            && (needle.is_empty() || record.name.to_lowercase().contains(needle))
            && self.years.contains(record.discovery_year)
    }
}

/// Filter a snapshot by method set, name substring, and year range.
#[must_use]
pub fn filter<'a>(
    snapshot: &'a CatalogSnapshot,
    methods: &BTreeSet<String>,
    name_substring: &str,
    years: impl Into<YearRange>,
) -> Vec<&'a ExoplanetRecord> {
    let filter = CatalogFilter {
        methods: methods.clone(),
        name_contains: name_substring.to_string(),
        years: years.into(),
    };
    filter.apply(&snapshot.records)
}
