//! Two-dimensional size descriptor.

use serde::{Deserialize, Serialize};

use super::error::GeneratorError;

/// Largest cell count a [`Dimension2D`] may describe: the number of `f64`
/// values that fit in one allocation.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// A (rows, cols) pair with both components strictly positive and
/// `rows * cols <= MAX_CELLS`.
///
/// Construct through [`Dimension2D::new`] or from a raw descriptor via
/// `TryFrom<&[i64]>`, which applies the same checks as
/// [`crate::validation::dimension`].
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::Dimension2D;
///
/// let dim = Dimension2D::try_from(&[16_i64, 20][..]).unwrap();
/// assert_eq!((dim.rows(), dim.cols()), (16, 20));
/// assert!(Dimension2D::new(0, 4).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Dimension2D {
    rows: usize,
    cols: usize,
}

impl Dimension2D {
    /// Creates a dimension, or `None` if either component is zero or the
    /// cell count exceeds [`MAX_CELLS`].
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => Some(Self { rows, cols }),
            _ => None,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`; a valid dimension has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<&[i64]> for Dimension2D {
    type Error = GeneratorError;

    fn try_from(descriptor: &[i64]) -> Result<Self, Self::Error> {
        crate::validation::dimension(descriptor)
    }
}

impl TryFrom<[i64; 2]> for Dimension2D {
    type Error = GeneratorError;

    fn try_from(descriptor: [i64; 2]) -> Result<Self, Self::Error> {
        crate::validation::dimension(&descriptor)
    }
}

impl From<Dimension2D> for [i64; 2] {
    fn from(dim: Dimension2D) -> Self {
        [dim.rows as i64, dim.cols as i64]
    }
}

impl std::fmt::Display for Dimension2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
