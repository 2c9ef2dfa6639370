use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::column::Column;

/// One confirmed planet, fully typed.
///
/// `name` and `host_star` are never empty once a record leaves the
/// normalizer. Optional numeric fields hold a finite value or `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExoplanetRecord {
    pub name: String,
    pub host_star: String,
    pub discovery_method: String,
    pub discovery_year: i32,
    pub orbital_period_days: Option<f64>,
    pub planet_radius_earth: Option<f64>,
    pub planet_mass_earth: Option<f64>,
    pub semi_major_axis_au: Option<f64>,
    pub star_temperature_k: Option<f64>,
    pub star_radius_solar: Option<f64>,
    pub star_mass_solar: Option<f64>,
    pub distance_parsec: Option<f64>,
    pub equilibrium_temp_k: Option<f64>,
    pub insolation_flux: Option<f64>,
}

impl ExoplanetRecord {
    /// Create a record with every numeric column missing.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host_star: impl Into<String>,
        discovery_method: impl Into<String>,
        discovery_year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            host_star: host_star.into(),
            discovery_method: discovery_method.into(),
            discovery_year,
            orbital_period_days: None,
            planet_radius_earth: None,
            planet_mass_earth: None,
            semi_major_axis_au: None,
            star_temperature_k: None,
            star_radius_solar: None,
            star_mass_solar: None,
            distance_parsec: None,
            equilibrium_temp_k: None,
            insolation_flux: None,
        }
    }

    /// Set one numeric column, returning the record.
    #[must_use]
    pub fn with(mut self, column: Column, value: f64) -> Self {
        self.set(column, Some(value));
        self
    }

    /// Read a numeric column.
    #[must_use]
    pub const fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::OrbitalPeriodDays => self.orbital_period_days,
            Column::PlanetRadiusEarth => self.planet_radius_earth,
            Column::PlanetMassEarth => self.planet_mass_earth,
            Column::SemiMajorAxisAu => self.semi_major_axis_au,
            Column::StarTemperatureK => self.star_temperature_k,
            Column::StarRadiusSolar => self.star_radius_solar,
            Column::StarMassSolar => self.star_mass_solar,
            Column::DistanceParsec => self.distance_parsec,
            Column::EquilibriumTempK => self.equilibrium_temp_k,
            Column::InsolationFlux => self.insolation_flux,
        }
    }

    /// Overwrite a numeric column.
    pub fn set(&mut self, column: Column, value: Option<f64>) {
        let slot = match column {
            Column::OrbitalPeriodDays => &mut self.orbital_period_days,
            Column::PlanetRadiusEarth => &mut self.planet_radius_earth,
            Column::PlanetMassEarth => &mut self.planet_mass_earth,
            Column::SemiMajorAxisAu => &mut self.semi_major_axis_au,
            Column::StarTemperatureK => &mut self.star_temperature_k,
            Column::StarRadiusSolar => &mut self.star_radius_solar,
            Column::StarMassSolar => &mut self.star_mass_solar,
            Column::DistanceParsec => &mut self.distance_parsec,
            Column::EquilibriumTempK => &mut self.equilibrium_temp_k,
            Column::InsolationFlux => &mut self.insolation_flux,
        };
        *slot = value;
    }
}
