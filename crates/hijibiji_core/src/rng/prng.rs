//! Seeded pseudo-random number generator for the generators.
//!
//! This module provides [`DemoRng`], a reproducible wrapper around
//! `rand::rngs::StdRng` implementing [`RandomSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use super::source::RandomSource;
use crate::types::Range;

/// Seeded random source for demonstration content.
///
/// Not suitable for cryptographic use. The seed is retained so that a run
/// can be logged and replayed.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::{DemoRng, RandomSource};
///
/// let mut rng1 = DemoRng::from_seed(7);
/// let mut rng2 = DemoRng::from_seed(7);
/// assert_eq!(rng1.next_uniform(), rng2.next_uniform());
///
/// let mut buffer = vec![0.0; 100];
/// rng1.fill_uniform(&mut buffer);
/// assert!(buffer.iter().all(|v| (0.0..1.0).contains(v)));
/// ```
#[derive(Clone, Debug)]
pub struct DemoRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl DemoRng {
    /// Creates a generator initialised with `seed`.
    ///
    /// The same seed always produces the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the thread-local entropy source.
    ///
    /// The drawn seed is still recorded and available through [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        tracing::debug!(seed, "seeded DemoRng from entropy");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent child generator.
    ///
    /// The child's seed is drawn from this generator, so a sequence of
    /// `spawn` calls is itself reproducible from the parent seed.
    pub fn spawn(&mut self) -> DemoRng {
        DemoRng::from_seed(self.inner.gen::<u64>())
    }
}

impl RandomSource for DemoRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    #[inline]
    fn next_in_range(&mut self, range: Range) -> f64 {
        Uniform::new_inclusive(range.low(), range.high()).sample(&mut self.inner)
    }

    #[inline]
    fn next_sign(&mut self) -> i64 {
        if self.inner.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }

    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen::<f64>();
        }
    }
}
