//! Random walk simulation in one, two or three dimensions.
//!
//! A single algorithm covers every dimension: each walker starts at the
//! origin and, for every step, draws one ±1 increment per axis
//! independently and appends the new position.
//!
//! # Memory Layout
//!
//! Trajectories are stored flat in row-major order:
//! `coords[step * axes + axis]`, where `step = 0` is the origin. A walk of
//! `num_steps` steps therefore holds `(num_steps + 1) * axes` coordinates.

mod parallel;

pub use parallel::simulate_parallel;

use hijibiji_core::rng::RandomSource;
use hijibiji_core::{validation, GeneratorError, Result};

/// Number of spatial axes a walker moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkDimension {
    /// Walk along a line.
    One,
    /// Walk on a plane.
    Two,
    /// Walk in space.
    Three,
}

impl WalkDimension {
    /// Number of axes (1, 2 or 3).
    #[inline]
    pub fn axes(self) -> usize {
        match self {
            WalkDimension::One => 1,
            WalkDimension::Two => 2,
            WalkDimension::Three => 3,
        }
    }
}

impl TryFrom<i64> for WalkDimension {
    type Error = GeneratorError;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(WalkDimension::One),
            2 => Ok(WalkDimension::Two),
            3 => Ok(WalkDimension::Three),
            other => Err(GeneratorError::invalid_parameter(
                "dimensions",
                format!("must be 1, 2 or 3, got {}", other),
            )),
        }
    }
}

impl std::fmt::Display for WalkDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

/// Positions visited by one walker, origin first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TrajectoryParts", into = "TrajectoryParts"))]
pub struct WalkTrajectory {
    dimensions: WalkDimension,
    coords: Vec<i64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TrajectoryParts {
    dimensions: WalkDimension,
    coords: Vec<i64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TrajectoryParts> for WalkTrajectory {
    type Error = GeneratorError;

    fn try_from(parts: TrajectoryParts) -> Result<Self> {
        WalkTrajectory::from_coords(parts.dimensions, parts.coords)
    }
}

#[cfg(feature = "serde")]
impl From<WalkTrajectory> for TrajectoryParts {
    fn from(walk: WalkTrajectory) -> Self {
        TrajectoryParts {
            dimensions: walk.dimensions,
            coords: walk.coords,
        }
    }
}

impl WalkTrajectory {
    /// Wraps flat row-major coordinates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `coords` holds at least the origin,
    /// is a whole number of positions, starts at the origin and moves every
    /// axis by exactly ±1 per step.
    pub fn from_coords(dimensions: WalkDimension, coords: Vec<i64>) -> Result<Self> {
        let axes = dimensions.axes();
        let invalid = |reason: String| GeneratorError::invalid_parameter("coords", reason);

        if coords.is_empty() || coords.len() % axes != 0 {
            return Err(invalid(format!(
                "expected a non-empty multiple of {} values, got {}",
                axes,
                coords.len()
            )));
        }
        if coords[..axes].iter().any(|&c| c != 0) {
            return Err(invalid("walk must start at the origin".to_string()));
        }
        if coords[axes..]
            .iter()
            .zip(&coords)
            .any(|(next, prev)| next.abs_diff(*prev) != 1)
        {
            return Err(invalid("every step must move each axis by ±1".to_string()));
        }
        Ok(Self { dimensions, coords })
    }

    #[inline]
    pub fn dimensions(&self) -> WalkDimension {
        self.dimensions
    }

    /// Number of positions (`num_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dimensions.axes()
    }

    /// Always `false`; every trajectory contains at least the origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Position after `step` steps, or `None` past the end.
    pub fn position(&self, step: usize) -> Option<&[i64]> {
        let axes = self.dimensions.axes();
        self.coords.get(step * axes..(step + 1) * axes)
    }

    /// Iterates positions from the origin onwards.
    pub fn positions(&self) -> std::slice::ChunksExact<'_, i64> {
        self.coords.chunks_exact(self.dimensions.axes())
    }

    /// Final position.
    pub fn end(&self) -> &[i64] {
        let axes = self.dimensions.axes();
        &self.coords[self.coords.len() - axes..]
    }

    /// Coordinates along one axis over time, e.g. the x series for plotting.
    ///
    /// Yields nothing if `axis` is out of range.
    pub fn axis(&self, axis: usize) -> impl Iterator<Item = i64> + '_ {
        let axes = self.dimensions.axes();
        let coords: &[i64] = if axis < axes { &self.coords } else { &[] };
        coords.iter().skip(axis).step_by(axes).copied()
    }

    /// Flat row-major coordinates.
    #[inline]
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }
}

/// Independent trajectories of a batch of walkers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BatchParts", into = "BatchParts"))]
pub struct WalkBatch {
    dimensions: WalkDimension,
    num_steps: usize,
    trajectories: Vec<WalkTrajectory>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BatchParts {
    dimensions: WalkDimension,
    num_steps: usize,
    trajectories: Vec<WalkTrajectory>,
}

#[cfg(feature = "serde")]
impl TryFrom<BatchParts> for WalkBatch {
    type Error = GeneratorError;

    fn try_from(parts: BatchParts) -> Result<Self> {
        WalkBatch::from_trajectories(parts.dimensions, parts.num_steps, parts.trajectories)
    }
}

#[cfg(feature = "serde")]
impl From<WalkBatch> for BatchParts {
    fn from(batch: WalkBatch) -> Self {
        BatchParts {
            dimensions: batch.dimensions,
            num_steps: batch.num_steps,
            trajectories: batch.trajectories,
        }
    }
}

impl WalkBatch {
    /// Groups existing trajectories into a batch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a trajectory has other dimensions or a
    /// step count other than `num_steps`.
    pub fn from_trajectories(
        dimensions: WalkDimension,
        num_steps: usize,
        trajectories: Vec<WalkTrajectory>,
    ) -> Result<Self> {
        if let Some(walk) = trajectories
            .iter()
            .find(|w| w.dimensions != dimensions || w.len() - 1 != num_steps)
        {
            return Err(GeneratorError::invalid_parameter(
                "trajectories",
                format!(
                    "expected {} walks of {} steps, found a {} walk of {} steps",
                    dimensions,
                    num_steps,
                    walk.dimensions,
                    walk.len() - 1
                ),
            ));
        }
        Ok(Self {
            dimensions,
            num_steps,
            trajectories,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> WalkDimension {
        self.dimensions
    }

    /// Steps taken by every walker.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Number of walkers.
    #[inline]
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    #[inline]
    pub fn trajectories(&self) -> &[WalkTrajectory] {
        &self.trajectories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WalkTrajectory> {
        self.trajectories.iter()
    }
}

impl IntoIterator for WalkBatch {
    type Item = WalkTrajectory;
    type IntoIter = std::vec::IntoIter<WalkTrajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.trajectories.into_iter()
    }
}

/// Simulates `num_walkers` independent walks of `num_steps` steps.
///
/// # Arguments
///
/// * `rng` - Source of ±1 draws
/// * `num_walkers` - Number of walkers (0 yields an empty batch)
/// * `num_steps` - Steps per walker (0 yields origin-only trajectories)
/// * `dimensions` - Number of axes
///
/// # Errors
///
/// Returns `InvalidParameter` if a count is negative.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::walk::{simulate, WalkDimension};
///
/// let mut rng = DemoRng::from_seed(42);
/// let batch = simulate(&mut rng, 1, 3, WalkDimension::One).unwrap();
/// let walk = &batch.trajectories()[0];
///
/// assert_eq!(walk.len(), 4);
/// assert_eq!(walk.position(0), Some(&[0][..]));
/// ```
pub fn simulate<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_walkers: i64,
    num_steps: i64,
    dimensions: WalkDimension,
) -> Result<WalkBatch> {
    let (num_walkers, num_steps) = validate_counts(num_walkers, num_steps)?;
    tracing::debug!(num_walkers, num_steps, %dimensions, "simulating random walks");

    let trajectories = (0..num_walkers)
        .map(|_| walk_one(&mut *rng, num_steps, dimensions))
        .collect();

    Ok(WalkBatch {
        dimensions,
        num_steps,
        trajectories,
    })
}

/// [`simulate`] along a line.
pub fn simulate_1d<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_walkers: i64,
    num_steps: i64,
) -> Result<WalkBatch> {
    simulate(rng, num_walkers, num_steps, WalkDimension::One)
}

/// [`simulate`] on a plane.
pub fn simulate_2d<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_walkers: i64,
    num_steps: i64,
) -> Result<WalkBatch> {
    simulate(rng, num_walkers, num_steps, WalkDimension::Two)
}

/// [`simulate`] in space.
pub fn simulate_3d<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_walkers: i64,
    num_steps: i64,
) -> Result<WalkBatch> {
    simulate(rng, num_walkers, num_steps, WalkDimension::Three)
}

fn validate_counts(num_walkers: i64, num_steps: i64) -> Result<(usize, usize)> {
    let num_walkers = validation::count("num_walkers", num_walkers)?;
    let num_steps = validation::count("num_steps", num_steps)?;
    Ok((num_walkers, num_steps))
}

/// Walks a single walker from the origin.
fn walk_one<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_steps: usize,
    dimensions: WalkDimension,
) -> WalkTrajectory {
    let axes = dimensions.axes();
    let mut coords = vec![0_i64; (num_steps + 1) * axes];

    for step in 0..num_steps {
        let prev = step * axes;
        let next = prev + axes;
        for axis in 0..axes {
            coords[next + axis] = coords[prev + axis] + rng.next_sign();
        }
    }

    WalkTrajectory { dimensions, coords }
}
