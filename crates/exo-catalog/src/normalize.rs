//! Raw archive rows → [`ExoplanetRecord`]s.
//!
//! Normalization never fails. Unusable cells become missing values, rows
//! without a name or host are dropped, and input order is preserved.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use exo_core::{
    Column, DISCOVERY_METHOD_COLUMN, DISCOVERY_YEAR_COLUMN, ExoplanetRecord, HOST_STAR_COLUMN,
    PLANET_NAME_COLUMN, RawRow, RawTable,
};
use serde_json::Value;

/// Label used when a row has no discovery method.
pub const UNKNOWN_METHOD: &str = "Unknown";

/// What to do with a row whose discovery year is missing or not a number.
///
/// `CurrentYear` keeps the row and stamps it with the current calendar year.
/// That inflates the current year in discovery statistics; it is the default
/// only because earlier dashboards behaved that way. `DropRow` discards the
/// row instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingYearPolicy {
    #[default]
    CurrentYear,
    DropRow,
}

/// Lower bound a numeric column must satisfy to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Positive,
    NonNegative,
    Unbounded,
}

const fn bound(column: Column) -> Bound {
    match column {
        Column::OrbitalPeriodDays | Column::InsolationFlux => Bound::NonNegative,
        Column::EquilibriumTempK => Bound::Unbounded,
        Column::PlanetRadiusEarth
        | Column::PlanetMassEarth
        | Column::SemiMajorAxisAu
        | Column::StarTemperatureK
        | Column::StarRadiusSolar
        | Column::StarMassSolar
        | Column::DistanceParsec => Bound::Positive,
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Year stamped by `CurrentYear`. `None` reads the clock on each call.
    current_year: Option<i32>,
    year_policy: MissingYearPolicy,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// A normalizer that stamps missing years with the UTC year at the time
    /// of each [`Self::normalize`] call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_year: None,
            year_policy: MissingYearPolicy::default(),
        }
    }

    /// Pin the year used by [`MissingYearPolicy::CurrentYear`].
    #[must_use]
    pub const fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    #[must_use]
    pub const fn with_year_policy(mut self, policy: MissingYearPolicy) -> Self {
        self.year_policy = policy;
        self
    }

    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Utc::now().year())
    }

    /// Convert every usable row, in input order.
    ///
    /// Rows are dropped when the name or host is blank, when the year is
    /// unusable under [`MissingYearPolicy::DropRow`], or when the same
    /// `(name, host)` pair was already seen.
    #[must_use]
    pub fn normalize(&self, table: &RawTable) -> Vec<ExoplanetRecord> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(table.len());
        let mut defaulted_years = 0usize;
        let current_year = self.current_year();

        for row in table {
            let Some((record, year_defaulted)) = self.normalize_row(row, current_year) else {
                continue;
            };
            if !seen.insert((record.name.clone(), record.host_star.clone())) {
                tracing::debug!(name = %record.name, host = %record.host_star, "dropping duplicate row");
                continue;
            }
            if year_defaulted {
                defaulted_years += 1;
            }
            records.push(record);
        }

        let dropped = table.len() - records.len();
        if dropped > 0 || defaulted_years > 0 {
            tracing::debug!(
                rows = table.len(),
                kept = records.len(),
                dropped,
                defaulted_years,
                "normalized archive rows"
            );
        }
        records
    }

    /// Returns the record and whether its year was substituted.
    fn normalize_row(
        &self,
        row: &RawRow,
        current_year: i32,
    ) -> Option<(ExoplanetRecord, bool)> {
        let name = coerce_text(row.get(PLANET_NAME_COLUMN))?;
        let host_star = coerce_text(row.get(HOST_STAR_COLUMN))?;
        let method = coerce_text(row.get(DISCOVERY_METHOD_COLUMN))
            .unwrap_or_else(|| UNKNOWN_METHOD.to_string());

        let (year, defaulted) = match coerce_year(row.get(DISCOVERY_YEAR_COLUMN)) {
            Some(year) => (year, false),
            None => match self.year_policy {
                MissingYearPolicy::CurrentYear => (current_year, true),
                MissingYearPolicy::DropRow => return None,
            },
        };

        let mut record = ExoplanetRecord::new(name, host_star, method, year);
        for column in Column::ALL {
            let value = coerce_float(row.get(column.archive_name()))
                .filter(|v| within_bound(*v, bound(column)));
            record.set(column, value);
        }
        Some((record, defaulted))
    }
}

/// Non-blank text. Numbers are rendered, everything else is missing.
fn coerce_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// A finite float from a JSON number or a numeric string.
fn coerce_float(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// An integer year from an integer, an integral float, or a numeric string.
fn coerce_year(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => integral(n.as_f64()?),
        },
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i32>()
                .ok()
                .or_else(|| integral(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral(value: f64) -> Option<i32> {
    let in_range = value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX);
    in_range.then(|| value as i32)
}

fn within_bound(value: f64, bound: Bound) -> bool {
    match bound {
        Bound::Positive => value > 0.0,
        Bound::NonNegative => value >= 0.0,
        Bound::Unbounded => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn table(rows: serde_json::Value) -> RawTable {
        serde_json::from_value(rows).unwrap()
    }

    fn normalizer() -> Normalizer {
        Normalizer::new().with_current_year(2026)
    }

    #[test]
    fn numeric_strings_and_numbers_are_coerced() {
        let records = normalizer().normalize(&table(json!([{
            "pl_name": "TOI-700 d", "hostname": "TOI-700", "discoverymethod": "Transit",
            "disc_year": "2020", "pl_orbper": "37.426", "pl_rade": 1.144, "st_teff": " 3480 "
        }])));

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.discovery_year, 2020);
        assert_eq!(r.orbital_period_days, Some(37.426));
        assert_eq!(r.planet_radius_earth, Some(1.144));
        assert_eq!(r.star_temperature_k, Some(3480.0));
        assert_eq!(r.planet_mass_earth, None);
    }

    #[test]
    fn bad_numbers_become_missing_not_zero() {
        let records = normalizer().normalize(&table(json!([{
            "pl_name": "b", "hostname": "a", "disc_year": 2020,
            "pl_orbper": "n/a", "pl_rade": "NaN", "pl_bmasse": -3.0, "sy_dist": 0,
            "pl_eqt": -40.5, "pl_insol": 0, "st_mass": true
        }])));

        let r = &records[0];
        assert_eq!(r.orbital_period_days, None);
        assert_eq!(r.planet_radius_earth, None);
        assert_eq!(r.planet_mass_earth, None);
        assert_eq!(r.distance_parsec, None);
        assert_eq!(r.star_mass_solar, None);
        assert_eq!(r.equilibrium_temp_k, Some(-40.5));
        assert_eq!(r.insolation_flux, Some(0.0));
    }

    #[test]
    fn rows_without_name_or_host_are_dropped() {
        let records = normalizer().normalize(&table(json!([
            {"pl_name": "", "hostname": "a", "disc_year": 2020},
            {"pl_name": "b", "hostname": "   ", "disc_year": 2020},
            {"pl_name": null, "hostname": "a", "disc_year": 2020},
            {"hostname": "a", "disc_year": 2020},
            {"pl_name": " c ", "hostname": " d ", "disc_year": 2020}
        ])));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "c");
        assert_eq!(records[0].host_star, "d");
    }

    #[test]
    fn integral_float_years_are_accepted() {
        let records = normalizer().normalize(&table(json!([
            {"pl_name": "b", "hostname": "a", "disc_year": "2014.0"},
            {"pl_name": "c", "hostname": "a", "disc_year": 2015.0}
        ])));
        assert_eq!(records[0].discovery_year, 2014);
        assert_eq!(records[1].discovery_year, 2015);
    }

    #[test]
    fn unusable_year_defaults_to_current_year() {
        let records = normalizer().normalize(&table(json!([
            {"pl_name": "b", "hostname": "a", "disc_year": "not_a_number"},
            {"pl_name": "c", "hostname": "a", "disc_year": 2014.5},
            {"pl_name": "d", "hostname": "a"}
        ])));
        let years: Vec<i32> = records.iter().map(|r| r.discovery_year).collect();
        assert_eq!(years, vec![2026, 2026, 2026]);
    }

    #[test]
    fn unpinned_normalizer_reads_the_clock_per_call() {
        let normalizer = Normalizer::new();
        let rows = table(json!([{"pl_name": "b", "hostname": "a", "disc_year": "not_a_number"}]));

        let before = Utc::now().year();
        let records = normalizer.normalize(&rows);
        let after = Utc::now().year();

        let year = records[0].discovery_year;
        assert!(year == before || year == after, "stamped {year}");
        assert_eq!(normalizer.clone().with_current_year(1999).current_year(), 1999);
        assert!(normalizer.current_year() >= before);
    }

    #[test]
    fn drop_row_policy_discards_unusable_years() {
        let records = normalizer()
            .with_year_policy(MissingYearPolicy::DropRow)
            .normalize(&table(json!([
                {"pl_name": "b", "hostname": "a", "disc_year": "not_a_number"},
                {"pl_name": "c", "hostname": "a", "disc_year": 2019}
            ])));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "c");
    }

    #[test]
    fn missing_method_is_unknown() {
        let records = normalizer().normalize(&table(json!([
            {"pl_name": "b", "hostname": "a", "disc_year": 2019, "discoverymethod": null}
        ])));
        assert_eq!(records[0].discovery_method, UNKNOWN_METHOD);
    }

    #[test]
    fn order_is_preserved_and_duplicates_dropped() {
        let records = normalizer().normalize(&table(json!([
            {"pl_name": "z", "hostname": "a", "disc_year": 2023},
            {"pl_name": "a", "hostname": "a", "disc_year": 2024},
            {"pl_name": "z", "hostname": "a", "disc_year": 1999},
            {"pl_name": "m", "hostname": "a", "disc_year": 2001}
        ])));
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
        assert_eq!(records[0].discovery_year, 2023);
    }

    #[test]
    fn empty_table_normalizes_to_empty() {
        assert!(normalizer().normalize(&RawTable::default()).is_empty());
    }
}
