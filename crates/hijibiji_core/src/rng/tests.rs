//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility and child-stream derivation
//! - Distribution ranges (uniform, in-range, ±1)
//! - Default trait methods on a scripted source
//! - Statistical properties via property-based testing

use super::*;
use crate::types::Range;

/// Scripted source replaying a fixed cycle of unit draws.
struct Cycle {
    values: Vec<f64>,
    index: usize,
}

impl RandomSource for Cycle {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = DemoRng::from_seed(12345);
    let mut rng2 = DemoRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next_uniform(), rng2.next_uniform());
        assert_eq!(rng1.next_sign(), rng2.next_sign());
    }
}

#[test]
fn test_seed_is_recorded() {
    assert_eq!(DemoRng::from_seed(42).seed(), 42);

    let rng = DemoRng::from_entropy();
    let replay = DemoRng::from_seed(rng.seed());
    assert_eq!(rng.seed(), replay.seed());
}

#[test]
fn test_uniform_range() {
    let mut rng = DemoRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.next_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_in_range_degenerate() {
    let mut rng = DemoRng::from_seed(1);
    let range = Range::new(440.0, 440.0).unwrap();
    assert_eq!(rng.next_in_range(range), 440.0);
}

#[test]
fn test_sign_balance() {
    let mut rng = DemoRng::from_seed(99);
    let n = 20_000;
    let sum: i64 = (0..n).map(|_| rng.next_sign()).sum();

    // Mean of ±1 draws has std 1/sqrt(n) ≈ 0.007; allow 5 sigma.
    let mean = sum as f64 / n as f64;
    assert!(mean.abs() < 0.035, "sign mean {} too far from 0", mean);
}

#[test]
fn test_spawn_is_reproducible_and_distinct() {
    let mut parent1 = DemoRng::from_seed(5);
    let mut parent2 = DemoRng::from_seed(5);

    let mut a = parent1.spawn();
    let mut b = parent2.spawn();
    assert_eq!(a.seed(), b.seed());
    assert_eq!(a.next_uniform(), b.next_uniform());

    let c = parent1.spawn();
    assert_ne!(a.seed(), c.seed());
}

#[test]
fn test_default_methods_on_scripted_source() {
    let mut source = Cycle {
        values: vec![0.25, 0.75],
        index: 0,
    };

    assert_eq!(source.next_sign(), -1);
    assert_eq!(source.next_sign(), 1);

    let range = Range::new(0.0, 10.0).unwrap();
    assert_eq!(source.next_in_range(range), 2.5);
    assert_eq!(source.next_in_range(range), 7.5);

    let mut buffer = [0.0; 3];
    source.fill_uniform(&mut buffer);
    assert_eq!(buffer, [0.25, 0.75, 0.25]);
}

#[test]
fn test_mut_reference_forwards() {
    fn draw<R: RandomSource>(mut rng: R) -> f64 {
        rng.next_uniform()
    }

    let mut rng1 = DemoRng::from_seed(3);
    let mut rng2 = DemoRng::from_seed(3);
    assert_eq!(draw(&mut rng1), rng2.next_uniform());
}

#[test]
fn test_empty_buffer() {
    let mut rng = DemoRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_uniform(&mut empty);
}

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// All uniform values must be in [0, 1) for any seed.
    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), size in 1..5000usize) {
        let mut rng = DemoRng::from_seed(seed);
        let mut buffer = vec![0.0; size];
        rng.fill_uniform(&mut buffer);

        for (i, &v) in buffer.iter().enumerate() {
            prop_assert!(
                (0.0..1.0).contains(&v),
                "Uniform value at index {} is out of range: {} (seed={})",
                i, v, seed
            );
        }
    }

    /// In-range draws stay inside the normalised interval.
    #[test]
    fn prop_in_range_bounds(seed in any::<u64>(), a in -1e6..1e6f64, b in -1e6..1e6f64) {
        let mut rng = DemoRng::from_seed(seed);
        let range = Range::new(a, b).unwrap();
        for _ in 0..100 {
            let v = rng.next_in_range(range);
            prop_assert!(range.contains(v), "{} outside [{}, {}]", v, range.low(), range.high());
        }
    }

    /// Uniform sample mean should be close to 0.5.
    #[test]
    fn prop_uniform_mean(seed in any::<u64>()) {
        let mut rng = DemoRng::from_seed(seed);
        let mut buffer = vec![0.0; 50_000];
        rng.fill_uniform(&mut buffer);
        let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
        prop_assert!((mean - 0.5).abs() < 0.01, "mean {:.4} (seed={})", mean, seed);
    }
}
