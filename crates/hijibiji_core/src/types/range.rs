//! Closed interval of finite reals used for uniform sampling.

use serde::{Deserialize, Serialize};

/// A closed interval `[low, high]` with finite bounds.
///
/// Bounds given in reverse order are swapped, so `low() <= high()` always
/// holds. An interval with equal bounds is valid and samples a constant.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::Range;
///
/// let r = Range::new(5.0, -5.0).unwrap();
/// assert_eq!((r.low(), r.high()), (-5.0, 5.0));
/// assert!(r.contains(0.0));
/// assert!(Range::new(f64::NAN, 1.0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Range {
    low: f64,
    high: f64,
}

impl Range {
    /// Creates a normalised range, or `None` if a bound is not finite or the
    /// width overflows.
    ///
    /// The width must stay finite after scaling by `1 / (1 - ε)`, which is
    /// what inclusive uniform sampling applies to it.
    pub fn new(a: f64, b: f64) -> Option<Self> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if !low.is_finite() || !high.is_finite() {
            return None;
        }
        if !((high - low) / (1.0 - f64::EPSILON)).is_finite() {
            return None;
        }
        Some(Self { low, high })
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies in `[low, high]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Maps a unit draw `u` in [0, 1) onto the interval.
    ///
    /// The result is clamped to `high` so float rounding never leaves the
    /// interval.
    #[inline]
    pub fn lerp(&self, u: f64) -> f64 {
        (self.low + self.width() * u).min(self.high)
    }
}

impl TryFrom<[f64; 2]> for Range {
    type Error = String;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        Range::new(bounds[0], bounds[1])
            .ok_or_else(|| format!("range bounds {:?} must be finite and sampleable", bounds))
    }
}

impl From<Range> for [f64; 2] {
    fn from(range: Range) -> Self {
        [range.low, range.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reversed_bounds_are_normalised() {
        let r = Range::new(10.0, 0.0).unwrap();
        assert_eq!(r.low(), 0.0);
        assert_eq!(r.high(), 10.0);
        assert_eq!(r.width(), 10.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Range::new(0.0, f64::INFINITY).is_none());
        assert!(Range::new(f64::NAN, 0.0).is_none());
        assert!(Range::new(-f64::MAX, f64::MAX).is_none());
    }

    #[test]
    fn test_width_overflow_rejected() {
        // Finite width that overflows once scaled for inclusive sampling.
        assert!((f64::MAX - 0.0).is_finite());
        assert!(Range::new(0.0, f64::MAX).is_none());
        assert!(Range::new(f64::MAX, -1.0).is_none());

        let wide = Range::new(0.0, f64::MAX / 2.0).unwrap();
        assert_eq!(wide.high(), f64::MAX / 2.0);
    }

    #[test]
    fn test_degenerate_range() {
        let r = Range::new(3.0, 3.0).unwrap();
        assert_eq!(r.lerp(0.999), 3.0);
        assert!(r.contains(3.0));
    }

    #[test]
    fn test_lerp() {
        let r = Range::new(-5.0, 5.0).unwrap();
        assert_relative_eq!(r.lerp(0.0), -5.0);
        assert_relative_eq!(r.lerp(0.5), 0.0);
        assert!(r.lerp(1.0 - f64::EPSILON) <= 5.0);
    }
}
