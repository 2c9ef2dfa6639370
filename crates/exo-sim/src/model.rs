//! Gaussian-dip transit approximation.
//!
//! Flux is normalized to 1 out of transit and dips to `1 - depth` at
//! mid-period:
//!
//! ```text
//! depth    = (planet_radius / star_radius)^2
//! center   = orbital_period / 2
//! duration = orbital_period * star_radius / (π * planet_radius)
//! flux(t)  = 1 - depth * exp(-(((t - center) * 2) / (duration / 4))^2)
//! ```
//!
//! This is a visual approximation, not a limb-darkened trapezoid fit. Depth
//! can exceed 1 for planets larger than their star, giving negative flux.

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::DomainError;
use crate::params::TransitParams;

/// Samples per curve when the caller does not choose.
pub const DEFAULT_SAMPLES: usize = 1000;

/// A validated light-curve model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitModel {
    depth: f64,
    center: f64,
    duration: f64,
    period: f64,
}

impl TransitModel {
    /// # Errors
    ///
    /// Returns [`DomainError`] when `params` fails [`TransitParams::validate`],
    /// or when the radius ratio is so extreme that the depth overflows or the
    /// duration underflows to zero.
    pub fn new(params: &TransitParams) -> Result<Self, DomainError> {
        params.validate()?;
        let ratio = params.planet_radius / params.star_radius;
        let depth = ratio * ratio;
        if !depth.is_finite() {
            return Err(DomainError::NonFinite {
                parameter: "transit_depth",
                value: depth,
            });
        }
        let duration = params.orbital_period * params.star_radius / (PI * params.planet_radius);
        if !duration.is_finite() {
            return Err(DomainError::NonFinite {
                parameter: "transit_duration",
                value: duration,
            });
        }
        if duration <= 0.0 {
            return Err(DomainError::NonPositive {
                parameter: "transit_duration",
                value: duration,
            });
        }
        Ok(Self {
            depth,
            center: params.orbital_period / 2.0,
            duration,
            period: params.orbital_period,
        })
    }

    /// Fractional dimming at mid-transit.
    #[must_use]
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    #[must_use]
    pub const fn center(&self) -> f64 {
        self.center
    }

    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub const fn period(&self) -> f64 {
        self.period
    }

    #[must_use]
    pub fn flux_at(&self, t: f64) -> f64 {
        // Same as `2 / (duration / 4)`; avoids 0/0 when `duration / 4` underflows.
        let x = (t - self.center) * 8.0 / self.duration;
        self.depth.mul_add(-(-x * x).exp(), 1.0)
    }

    /// Sample the model at `samples` evenly spaced times over `[0, period]`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooFewSamples`] when `samples < 2`.
    pub fn sample(&self, samples: usize) -> Result<LightCurve, DomainError> {
        if samples < 2 {
            return Err(DomainError::TooFewSamples { samples });
        }
        #[allow(clippy::cast_precision_loss)]
        let last = (samples - 1) as f64;
        let times: Vec<f64> = (0..samples)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                self.period * (i / last)
            })
            .collect();
        let fluxes = times.iter().map(|&t| self.flux_at(t)).collect();
        Ok(LightCurve { times, fluxes })
    }
}

/// Flux against time, in time order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCurve {
    times: Vec<f64>,
    fluxes: Vec<f64>,
}

impl LightCurve {
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn fluxes(&self) -> &[f64] {
        &self.fluxes
    }

    /// `(time, flux)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.fluxes.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Lowest sampled flux.
    #[must_use]
    pub fn min_flux(&self) -> f64 {
        self.fluxes.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Light curve for the given parameters with [`DEFAULT_SAMPLES`] samples.
///
/// `impact_parameter` and `inclination_deg` are accepted for interface
/// compatibility and currently have no effect on the curve.
///
/// # Errors
///
/// Returns [`DomainError`] when a radius or the period is not finite or not
/// greater than zero.
pub fn simulate(
    planet_radius: f64,
    orbital_period: f64,
    star_radius: f64,
    impact_parameter: f64,
    inclination_deg: f64,
) -> Result<LightCurve, DomainError> {
    let params = TransitParams::new(
        planet_radius,
        orbital_period,
        star_radius,
        impact_parameter,
        inclination_deg,
    );
    simulate_with_samples(&params, DEFAULT_SAMPLES)
}

/// # Errors
///
/// Returns [`DomainError`] for invalid parameters or fewer than 2 samples.
pub fn simulate_with_samples(
    params: &TransitParams,
    samples: usize,
) -> Result<LightCurve, DomainError> {
    TransitModel::new(params)?.sample(samples)
}
