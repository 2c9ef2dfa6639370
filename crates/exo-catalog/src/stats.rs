//! Dashboard figures and chart series.
//!
//! Every function takes any iterator of record references, so it works on a
//! whole snapshot (`&snapshot.records`) or on a filtered view.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use exo_core::{Column, ExoplanetRecord};
use serde::Serialize;

/// Discoveries from this year on count as recent.
pub const RECENT_DISCOVERY_YEAR: i32 = 2020;

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_planets: usize,
    pub host_stars: usize,
    pub discovery_methods: usize,
    pub recent_discoveries: usize,
}

#[must_use]
pub fn summarize<'a, I>(records: I) -> CatalogSummary
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    let mut total_planets = 0;
    let mut recent_discoveries = 0;
    let mut hosts = HashSet::new();
    let mut methods = HashSet::new();
    for r in records {
        total_planets += 1;
        if r.discovery_year >= RECENT_DISCOVERY_YEAR {
            recent_discoveries += 1;
        }
        hosts.insert(r.host_star.as_str());
        methods.insert(r.discovery_method.as_str());
    }
    CatalogSummary {
        total_planets,
        host_stars: hosts.len(),
        discovery_methods: methods.len(),
        recent_discoveries,
    }
}

/// Planets per discovery method, most common first, ties by name.
#[must_use]
pub fn method_counts<'a, I>(records: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.discovery_method.as_str()).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(method, n)| (method.to_string(), n))
        .collect();
    // Stable sort keeps the BTreeMap's name order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` most common discovery methods.
#[must_use]
pub fn top_methods<'a, I>(records: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    let mut counts = method_counts(records);
    counts.truncate(n);
    counts
}

/// Planets discovered per year, oldest year first.
#[must_use]
pub fn discoveries_per_year<'a, I>(records: I) -> Vec<(i32, usize)>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for r in records {
        *per_year.entry(r.discovery_year).or_default() += 1;
    }
    per_year.into_iter().collect()
}

/// Earliest and latest discovery year, for a year-range control.
#[must_use]
pub fn year_bounds<'a, I>(records: I) -> Option<(i32, i32)>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    records.into_iter().fold(None, |bounds, r| {
        let y = r.discovery_year;
        Some(bounds.map_or((y, y), |(lo, hi): (i32, i32)| (lo.min(y), hi.max(y))))
    })
}

/// Distinct discovery methods, sorted, for a method picker.
#[must_use]
pub fn distinct_methods<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    records
        .into_iter()
        .map(|r| r.discovery_method.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// One point of a two-column scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub method: String,
    pub x: f64,
    pub y: f64,
}

/// Points for records that have both columns, in input order.
#[must_use]
pub fn scatter<'a, I>(records: I, x: Column, y: Column) -> Vec<ScatterPoint>
where
    I: IntoIterator<Item = &'a ExoplanetRecord>,
{
    records
        .into_iter()
        .filter_map(|r| {
            Some(ScatterPoint {
                name: r.name.clone(),
                method: r.discovery_method.clone(),
                x: r.value(x)?,
                y: r.value(y)?,
            })
        })
        .collect()
}
