//! Fail-fast parameter checks shared across generators.
//!
//! Each function turns a raw descriptor into a validated value or returns a
//! [`GeneratorError`]. Nothing here draws randomness or has side effects, so
//! generators call these before touching their random source.

use crate::types::{Dimension2D, GeneratorError, Range, Result};

/// Lowest accepted audio sample rate in Hz.
///
/// Twice the ~20 kHz upper edge of the audible band, so any tone up to that
/// frequency is sampled above its Nyquist rate.
pub const MIN_SAMPLE_RATE: u32 = 40_000;

/// Validates a 2D size descriptor.
///
/// # Errors
///
/// Returns `InvalidDimension` unless `descriptor` has exactly two elements,
/// both strictly positive, whose product does not exceed
/// [`MAX_CELLS`](crate::types::dimension::MAX_CELLS).
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::validation;
///
/// assert!(validation::dimension(&[16, 20]).is_ok());
/// assert!(validation::dimension(&[16]).is_err());
/// assert!(validation::dimension(&[16, -1]).is_err());
/// ```
pub fn dimension(descriptor: &[i64]) -> Result<Dimension2D> {
    let invalid = || GeneratorError::InvalidDimension {
        descriptor: descriptor.to_vec(),
    };

    let &[rows, cols] = descriptor else {
        return Err(invalid());
    };
    let rows = usize::try_from(rows).map_err(|_| invalid())?;
    let cols = usize::try_from(cols).map_err(|_| invalid())?;
    Dimension2D::new(rows, cols).ok_or_else(invalid)
}

/// Validates a range descriptor.
///
/// Both bounds are checked independently; reversed bounds are accepted and
/// normalised by [`Range::new`].
///
/// # Errors
///
/// Returns `InvalidRange` if `descriptor` does not have exactly two elements,
/// if a bound is not finite, or if the width is too large to sample.
pub fn range(name: &'static str, descriptor: &[f64]) -> Result<Range> {
    let invalid = |reason: &str| GeneratorError::InvalidRange {
        name,
        descriptor: descriptor.to_vec(),
        reason: reason.to_string(),
    };

    let &[low, high] = descriptor else {
        return Err(invalid("must have both lower and upper bound"));
    };
    if !low.is_finite() || !high.is_finite() {
        return Err(invalid("bounds must be finite"));
    }
    Range::new(low, high).ok_or_else(|| invalid("width overflows"))
}

/// Validates an audio sample rate against [`MIN_SAMPLE_RATE`].
///
/// # Errors
///
/// Returns `InvalidSampleRate` if `sample_rate < MIN_SAMPLE_RATE`.
pub fn sample_rate(sample_rate: u32) -> Result<u32> {
    if sample_rate < MIN_SAMPLE_RATE {
        return Err(GeneratorError::InvalidSampleRate {
            sample_rate,
            minimum: MIN_SAMPLE_RATE,
        });
    }
    Ok(sample_rate)
}

/// Validates a non-negative count.
///
/// # Errors
///
/// Returns `InvalidParameter` if `value` is negative.
pub fn count(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        GeneratorError::invalid_parameter(name, format!("must be non-negative, got {}", value))
    })
}

/// Validates a finite, strictly positive scalar.
///
/// # Errors
///
/// Returns `InvalidParameter` if `value` is not finite or not `> 0`.
pub fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeneratorError::invalid_parameter(
            name,
            format!("must be finite and positive, got {}", value),
        ))
    }
}
