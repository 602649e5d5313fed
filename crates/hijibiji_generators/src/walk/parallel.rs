//! Rayon-based parallel walk batches.
//!
//! Every walker gets its own [`DemoRng`] spawned from a master generator
//! before the fan-out. No random state is shared between threads, so walkers
//! stay uncorrelated and the batch depends only on the seed, not on the
//! number of worker threads.

use rayon::prelude::*;

use hijibiji_core::rng::DemoRng;
use hijibiji_core::Result;

use super::{validate_counts, walk_one, WalkBatch, WalkDimension};

/// Simulates a walk batch across the rayon thread pool.
///
/// # Arguments
///
/// * `seed` - Seed of the master generator from which walker streams derive
/// * `num_walkers` - Number of walkers
/// * `num_steps` - Steps per walker
/// * `dimensions` - Number of axes
///
/// # Errors
///
/// Returns `InvalidParameter` if a count is negative.
///
/// # Examples
///
/// ```rust
/// use hijibiji_generators::walk::{simulate_parallel, WalkDimension};
///
/// let a = simulate_parallel(7, 16, 100, WalkDimension::Two).unwrap();
/// let b = simulate_parallel(7, 16, 100, WalkDimension::Two).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn simulate_parallel(
    seed: u64,
    num_walkers: i64,
    num_steps: i64,
    dimensions: WalkDimension,
) -> Result<WalkBatch> {
    let (num_walkers, num_steps) = validate_counts(num_walkers, num_steps)?;
    tracing::debug!(
        seed,
        num_walkers,
        num_steps,
        %dimensions,
        threads = rayon::current_num_threads(),
        "simulating random walks in parallel"
    );

    let mut master = DemoRng::from_seed(seed);
    let streams: Vec<DemoRng> = (0..num_walkers).map(|_| master.spawn()).collect();

    let trajectories = streams
        .into_par_iter()
        .map(|mut rng| walk_one(&mut rng, num_steps, dimensions))
        .collect();

    Ok(WalkBatch {
        dimensions,
        num_steps,
        trajectories,
    })
}
