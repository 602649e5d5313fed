//! Error types for generator parameter validation.
//!
//! Every failure here is local and synchronous: generators validate at call
//! entry and return one of these variants before any randomness is drawn.

use thiserror::Error;

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Categorised validation errors.
///
/// # Variants
/// - `InvalidDimension`: a 2D size descriptor is malformed or non-positive
/// - `InvalidRange`: a range descriptor is missing a bound or is not finite
/// - `InvalidSampleRate`: an audio sample rate is below the anti-aliasing floor
/// - `InvalidParameter`: a count is negative or a scalar is out of its domain
///
/// # Examples
/// ```
/// use hijibiji_core::GeneratorError;
///
/// let err = GeneratorError::InvalidSampleRate { sample_rate: 30_000, minimum: 40_000 };
/// assert!(err.to_string().contains("30000"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeneratorError {
    /// Dimension descriptor is not exactly two positive integers, or their
    /// product does not fit in an addressable buffer.
    #[error(
        "Invalid dimension {descriptor:?}: must be a list of two positive integers with an addressable product"
    )]
    InvalidDimension {
        /// The rejected descriptor as supplied
        descriptor: Vec<i64>,
    },

    /// Range descriptor is missing a bound or holds non-finite values.
    #[error("Invalid range '{name}' {descriptor:?}: {reason}")]
    InvalidRange {
        /// Parameter name of the range
        name: &'static str,
        /// The rejected descriptor as supplied
        descriptor: Vec<f64>,
        /// Why the descriptor was rejected
        reason: String,
    },

    /// Sample rate below the Nyquist-Shannon margin.
    #[error(
        "Invalid sample rate {sample_rate} Hz: must be at least {minimum} Hz to avoid aliasing"
    )]
    InvalidSampleRate {
        /// The rejected sample rate
        sample_rate: u32,
        /// The minimum accepted sample rate
        minimum: u32,
    },

    /// Count or scalar parameter outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },
}

impl GeneratorError {
    /// Shorthand for an [`GeneratorError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
