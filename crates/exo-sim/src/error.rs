use thiserror::Error;

/// Simulator input outside the model's domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A radius, period or derived duration was zero or negative.
    #[error("{parameter} must be greater than zero, got {value}")]
    NonPositive {
        parameter: &'static str,
        value: f64,
    },

    /// A parameter, or a quantity derived from them, was NaN or infinite.
    #[error("{parameter} must be a finite number, got {value}")]
    NonFinite {
        parameter: &'static str,
        value: f64,
    },

    /// A light curve needs both endpoints of the period.
    #[error("a light curve needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },
}

impl DomainError {
    /// Name of the offending parameter, for pointing a form at the right field.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::NonPositive { parameter, .. } | Self::NonFinite { parameter, .. } => parameter,
            Self::TooFewSamples { .. } => "samples",
        }
    }
}
