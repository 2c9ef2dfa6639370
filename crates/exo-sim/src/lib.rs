//! # exo-sim
//!
//! Transit light-curve simulator. Pure and stateless: the same parameters
//! always produce the same curve.
//!
//! ```
//! let curve = exo_sim::simulate(1.0, 10.0, 1.0, 0.3, 89.5).unwrap();
//! assert_eq!(curve.len(), exo_sim::DEFAULT_SAMPLES);
//! ```

mod error;
mod model;
mod params;

pub use error::DomainError;
pub use model::{DEFAULT_SAMPLES, LightCurve, TransitModel, simulate, simulate_with_samples};
pub use params::{
    IMPACT_PARAMETER_RANGE, INCLINATION_RANGE, ORBITAL_PERIOD_RANGE, PLANET_RADIUS_RANGE,
    STAR_RADIUS_RANGE, TransitParams,
};
