//! Numeric catalog columns.
//!
//! Each variant maps one optional numeric field of [`ExoplanetRecord`] to the
//! archive column it is read from and to the label charts display.
//!
//! [`ExoplanetRecord`]: crate::ExoplanetRecord

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Archive column holding the planet name.
pub const PLANET_NAME_COLUMN: &str = "pl_name";
/// Archive column holding the host star name.
pub const HOST_STAR_COLUMN: &str = "hostname";
/// Archive column holding the discovery method.
pub const DISCOVERY_METHOD_COLUMN: &str = "discoverymethod";
/// Archive column holding the discovery year.
pub const DISCOVERY_YEAR_COLUMN: &str = "disc_year";

/// Every archive column a catalog query selects, identity columns first.
#[must_use]
pub fn archive_columns() -> Vec<&'static str> {
    let mut columns = vec![
        PLANET_NAME_COLUMN,
        HOST_STAR_COLUMN,
        DISCOVERY_METHOD_COLUMN,
        DISCOVERY_YEAR_COLUMN,
    ];
    columns.extend(Column::ALL.iter().map(|c| c.archive_name()));
    columns
}

/// A numeric column of the exoplanet catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    OrbitalPeriodDays,
    PlanetRadiusEarth,
    PlanetMassEarth,
    SemiMajorAxisAu,
    StarTemperatureK,
    StarRadiusSolar,
    StarMassSolar,
    DistanceParsec,
    EquilibriumTempK,
    InsolationFlux,
}

impl Column {
    /// Every numeric column, in archive query order.
    pub const ALL: [Self; 10] = [
        Self::OrbitalPeriodDays,
        Self::PlanetRadiusEarth,
        Self::PlanetMassEarth,
        Self::SemiMajorAxisAu,
        Self::StarTemperatureK,
        Self::StarRadiusSolar,
        Self::StarMassSolar,
        Self::DistanceParsec,
        Self::EquilibriumTempK,
        Self::InsolationFlux,
    ];

    /// Column name in the archive's planetary systems table.
    #[must_use]
    pub const fn archive_name(self) -> &'static str {
        match self {
            Self::OrbitalPeriodDays => "pl_orbper",
            Self::PlanetRadiusEarth => "pl_rade",
            Self::PlanetMassEarth => "pl_bmasse",
            Self::SemiMajorAxisAu => "pl_orbsmax",
            Self::StarTemperatureK => "st_teff",
            Self::StarRadiusSolar => "st_rad",
            Self::StarMassSolar => "st_mass",
            Self::DistanceParsec => "sy_dist",
            Self::EquilibriumTempK => "pl_eqt",
            Self::InsolationFlux => "pl_insol",
        }
    }

    /// Human-readable label with units.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrbitalPeriodDays => "Orbital Period (days)",
            Self::PlanetRadiusEarth => "Planet Radius (Earth radii)",
            Self::PlanetMassEarth => "Planet Mass (Earth mass)",
            Self::SemiMajorAxisAu => "Orbit Semi-Major Axis (AU)",
            Self::StarTemperatureK => "Star Temperature (K)",
            Self::StarRadiusSolar => "Star Radius (Solar radii)",
            Self::StarMassSolar => "Star Mass (Solar mass)",
            Self::DistanceParsec => "Distance from Earth (pc)",
            Self::EquilibriumTempK => "Equilibrium Temperature (K)",
            Self::InsolationFlux => "Insolation Flux (Earth flux)",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrbitalPeriodDays => "orbital_period_days",
            Self::PlanetRadiusEarth => "planet_radius_earth",
            Self::PlanetMassEarth => "planet_mass_earth",
            Self::SemiMajorAxisAu => "semi_major_axis_au",
            Self::StarTemperatureK => "star_temperature_k",
            Self::StarRadiusSolar => "star_radius_solar",
            Self::StarMassSolar => "star_mass_solar",
            Self::DistanceParsec => "distance_parsec",
            Self::EquilibriumTempK => "equilibrium_temp_k",
            Self::InsolationFlux => "insolation_flux",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
