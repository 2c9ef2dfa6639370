use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Planet radius slider range, in the same unit as the star radius.
pub const PLANET_RADIUS_RANGE: RangeInclusive<f64> = 0.1..=20.0;
/// Orbital period slider range, days.
pub const ORBITAL_PERIOD_RANGE: RangeInclusive<f64> = 0.5..=365.0;
pub const IMPACT_PARAMETER_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const STAR_RADIUS_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Degrees.
pub const INCLINATION_RANGE: RangeInclusive<f64> = 85.0..=90.0;

/// Inputs to the light-curve model.
///
/// The ranges above are advisory. [`TransitParams::validate`] only rejects
/// values the formula cannot evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitParams {
    pub planet_radius: f64,
    pub orbital_period: f64,
    pub star_radius: f64,
    /// Accepted but not used by the model.
    pub impact_parameter: f64,
    /// Accepted but not used by the model.
    pub inclination_deg: f64,
}

impl Default for TransitParams {
    fn default() -> Self {
        Self {
            planet_radius: 1.0,
            orbital_period: 10.0,
            star_radius: 1.0,
            impact_parameter: 0.3,
            inclination_deg: 89.5,
        }
    }
}

impl TransitParams {
    #[must_use]
    pub const fn new(
        planet_radius: f64,
        orbital_period: f64,
        star_radius: f64,
        impact_parameter: f64,
        inclination_deg: f64,
    ) -> Self {
        Self {
            planet_radius,
            orbital_period,
            star_radius,
            impact_parameter,
            inclination_deg,
        }
    }

    /// Check the parameters the formula divides by or scales with.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for the first of planet radius, orbital period,
    /// star radius that is not finite or not greater than zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        positive("planet_radius", self.planet_radius)?;
        positive("orbital_period", self.orbital_period)?;
        positive("star_radius", self.star_radius)?;
        Ok(())
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(DomainError::NonPositive { parameter, value });
    }
    Ok(())
}
