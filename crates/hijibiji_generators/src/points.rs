//! Random point clouds for scatter plots.
//!
//! Two variants share validation: plain points (coordinates only) and dots,
//! which additionally carry a size and a colour scalar per point. Storage is
//! columnar, the shape a scatter renderer consumes.

use hijibiji_core::rng::RandomSource;
use hijibiji_core::{validation, GeneratorError, Range, Result};

/// Default marker size range for [`generate_dots`].
pub const DEFAULT_SIZE_RANGE: [f64; 2] = [50.0, 500.0];

/// One point of a [`PointSet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Marker size (dot clouds only).
    pub size: Option<f64>,
    /// Colour scalar in [0, 1) (dot clouds only).
    pub color: Option<f64>,
}

/// A set of random points.
///
/// Point order carries no meaning; consumers must not rely on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PointParts", into = "PointParts"))]
pub struct PointSet {
    range_x: Range,
    range_y: Range,
    xs: Vec<f64>,
    ys: Vec<f64>,
    sizes: Option<Vec<f64>>,
    colors: Option<Vec<f64>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PointParts {
    range_x: Range,
    range_y: Range,
    xs: Vec<f64>,
    ys: Vec<f64>,
    sizes: Option<Vec<f64>>,
    colors: Option<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<PointParts> for PointSet {
    type Error = GeneratorError;

    fn try_from(parts: PointParts) -> Result<Self> {
        let set = PointSet::from_columns(parts.range_x, parts.range_y, parts.xs, parts.ys)?;
        match (parts.sizes, parts.colors) {
            (None, None) => Ok(set),
            (Some(sizes), Some(colors)) => set.with_dot_attributes(sizes, colors),
            _ => Err(GeneratorError::invalid_parameter(
                "sizes",
                "sizes and colors must be given together",
            )),
        }
    }
}

#[cfg(feature = "serde")]
impl From<PointSet> for PointParts {
    fn from(set: PointSet) -> Self {
        PointParts {
            range_x: set.range_x,
            range_y: set.range_y,
            xs: set.xs,
            ys: set.ys,
            sizes: set.sizes,
            colors: set.colors,
        }
    }
}

impl PointSet {
    /// Builds a plain point set from coordinate columns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the columns differ in length or a
    /// coordinate lies outside its range.
    pub fn from_columns(range_x: Range, range_y: Range, xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GeneratorError::invalid_parameter(
                "ys",
                format!("expected {} values, got {}", xs.len(), ys.len()),
            ));
        }
        check_column("xs", &xs, |x| range_x.contains(x))?;
        check_column("ys", &ys, |y| range_y.contains(y))?;
        Ok(Self {
            range_x,
            range_y,
            xs,
            ys,
            sizes: None,
            colors: None,
        })
    }

    /// Attaches per-point sizes and colour scalars, making a dot cloud.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a column length differs from the point
    /// count, a size is not finite, or a colour lies outside [0, 1).
    pub fn with_dot_attributes(mut self, sizes: Vec<f64>, colors: Vec<f64>) -> Result<Self> {
        for (name, column) in [("sizes", &sizes), ("colors", &colors)] {
            if column.len() != self.len() {
                return Err(GeneratorError::invalid_parameter(
                    name,
                    format!("expected {} values, got {}", self.len(), column.len()),
                ));
            }
        }
        check_column("sizes", &sizes, f64::is_finite)?;
        check_column("colors", &colors, |c| (0.0..1.0).contains(&c))?;
        self.sizes = Some(sizes);
        self.colors = Some(colors);
        Ok(self)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The normalised x sampling range.
    #[inline]
    pub fn range_x(&self) -> Range {
        self.range_x
    }

    /// The normalised y sampling range.
    #[inline]
    pub fn range_y(&self) -> Range {
        self.range_y
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Per-point sizes, present for dot clouds.
    pub fn sizes(&self) -> Option<&[f64]> {
        self.sizes.as_deref()
    }

    /// Per-point colour scalars, present for dot clouds.
    pub fn colors(&self) -> Option<&[f64]> {
        self.colors.as_deref()
    }

    /// Whether the set carries size and colour attributes.
    pub fn is_dot_cloud(&self) -> bool {
        self.sizes.is_some()
    }

    /// Iterates points with their optional attributes.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).map(move |i| Point {
            x: self.xs[i],
            y: self.ys[i],
            size: self.sizes.as_ref().map(|s| s[i]),
            color: self.colors.as_ref().map(|c| c[i]),
        })
    }
}

/// Generates `num_points` points uniformly over `range_x × range_y`.
///
/// # Errors
///
/// - `InvalidRange` if either range descriptor lacks a bound or is not finite
/// - `InvalidParameter` if `num_points` is negative
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::points::generate_points;
///
/// let mut rng = DemoRng::from_seed(3);
/// let set = generate_points(&mut rng, 100, &[-5.0, 5.0], &[0.0, 10.0]).unwrap();
/// assert_eq!(set.len(), 100);
/// assert!(set.points().all(|p| (-5.0..=5.0).contains(&p.x) && (0.0..=10.0).contains(&p.y)));
/// ```
pub fn generate_points<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_points: i64,
    range_x: &[f64],
    range_y: &[f64],
) -> Result<PointSet> {
    let (n, range_x, range_y) = validate(num_points, range_x, range_y)?;
    tracing::debug!(num_points = n, ?range_x, ?range_y, "generating scattered points");

    let xs = sample_column(rng, n, range_x);
    let ys = sample_column(rng, n, range_y);
    Ok(PointSet {
        range_x,
        range_y,
        xs,
        ys,
        sizes: None,
        colors: None,
    })
}

/// Generates a dot cloud: points plus a size drawn from `size_range` and a
/// colour scalar in [0, 1) per point.
///
/// Pass [`DEFAULT_SIZE_RANGE`] for the stock `[50, 500]` sizes.
///
/// # Errors
///
/// As [`generate_points`], plus `InvalidRange` for a malformed `size_range`.
pub fn generate_dots<R: RandomSource + ?Sized>(
    rng: &mut R,
    num_points: i64,
    range_x: &[f64],
    range_y: &[f64],
    size_range: &[f64],
) -> Result<PointSet> {
    let (n, range_x, range_y) = validate(num_points, range_x, range_y)?;
    let size_range = validation::range("size_range", size_range)?;
    tracing::debug!(num_points = n, ?size_range, "generating scattered dots");

    let xs = sample_column(rng, n, range_x);
    let ys = sample_column(rng, n, range_y);
    let sizes = sample_column(rng, n, size_range);
    let mut colors = vec![0.0; n];
    rng.fill_uniform(&mut colors);

    Ok(PointSet {
        range_x,
        range_y,
        xs,
        ys,
        sizes: Some(sizes),
        colors: Some(colors),
    })
}

fn validate(num_points: i64, range_x: &[f64], range_y: &[f64]) -> Result<(usize, Range, Range)> {
    let range_x = validation::range("range_x", range_x)?;
    let range_y = validation::range("range_y", range_y)?;
    let n = validation::count("num_points", num_points)?;
    Ok((n, range_x, range_y))
}

fn check_column(name: &'static str, column: &[f64], valid: impl Fn(f64) -> bool) -> Result<()> {
    match column.iter().find(|&&v| !valid(v)) {
        Some(bad) => Err(GeneratorError::invalid_parameter(
            name,
            format!("value {} out of bounds", bad),
        )),
        None => Ok(()),
    }
}

fn sample_column<R: RandomSource + ?Sized>(rng: &mut R, n: usize, range: Range) -> Vec<f64> {
    (0..n).map(|_| rng.next_in_range(range)).collect()
}
