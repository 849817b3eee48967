//! Construction-time validation errors.

use thiserror::Error;

/// Why a [`Domain`](crate::Domain) could not be built.
///
/// There is no repair path: a selector is never constructed over a domain
/// the caller did not ask for.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    #[error("domain bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("min ({min}) must be strictly less than max ({max})")]
    EmptyDomain { min: f64, max: f64 },

    #[error("domain span overflows (min={min}, max={max})")]
    NonFiniteSpan { min: f64, max: f64 },

    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("min gap must be a finite number, got {0}")]
    InvalidMinGap(f64),

    #[error("min gap ({min_gap}) must be at least one step ({step})")]
    GapBelowStep { min_gap: f64, step: f64 },

    #[error("min gap ({min_gap}) must be smaller than the domain span ({span})")]
    GapExceedsSpan { min_gap: f64, span: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
