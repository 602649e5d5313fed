//! The injectable uniform / discrete-uniform source.

use crate::types::Range;

/// A source of uniform and ±1 random draws.
///
/// Only [`next_uniform`](RandomSource::next_uniform) is required; the other
/// draws have defaults expressed in terms of it. Implementations backed by a
/// real PRNG may override them with a dedicated distribution.
///
/// Generators take `&mut R where R: RandomSource + ?Sized`, so trait objects
/// and scripted test sources work alongside [`super::DemoRng`].
pub trait RandomSource {
    /// Draws a value uniformly from [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Draws a value uniformly from `[range.low(), range.high()]`.
    fn next_in_range(&mut self, range: Range) -> f64 {
        range.lerp(self.next_uniform())
    }

    /// Draws `-1` or `+1` with equal probability.
    fn next_sign(&mut self) -> i64 {
        if self.next_uniform() < 0.5 {
            -1
        } else {
            1
        }
    }

    /// Fills `buffer` with independent [0, 1) draws.
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    #[inline]
    fn next_in_range(&mut self, range: Range) -> f64 {
        (**self).next_in_range(range)
    }

    #[inline]
    fn next_sign(&mut self) -> i64 {
        (**self).next_sign()
    }

    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        (**self).fill_uniform(buffer)
    }
}
