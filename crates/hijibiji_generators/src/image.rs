//! Random image generation.
//!
//! An image is a row-major matrix of independent uniform draws in [0, 1).
//! The buffer carries no colour information; mapping values to colours is
//! the visualisation sink's concern.

use hijibiji_core::rng::RandomSource;
use hijibiji_core::{validation, Dimension2D, GeneratorError, Result};

/// Row-major matrix of pixel intensities in [0, 1).
///
/// Memory layout: `pixels[row * cols + col]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ImageParts", into = "ImageParts"))]
pub struct ImageBuffer {
    dim: Dimension2D,
    pixels: Vec<f64>,
}

/// Serialised form of an [`ImageBuffer`], checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ImageParts {
    dim: Dimension2D,
    pixels: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ImageParts> for ImageBuffer {
    type Error = GeneratorError;

    fn try_from(parts: ImageParts) -> Result<Self> {
        ImageBuffer::from_pixels(parts.dim, parts.pixels)
    }
}

#[cfg(feature = "serde")]
impl From<ImageBuffer> for ImageParts {
    fn from(image: ImageBuffer) -> Self {
        ImageParts {
            dim: image.dim,
            pixels: image.pixels,
        }
    }
}

impl ImageBuffer {
    /// Wraps existing row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless there are exactly `dim.len()` pixels,
    /// all in [0, 1).
    pub fn from_pixels(dim: Dimension2D, pixels: Vec<f64>) -> Result<Self> {
        if pixels.len() != dim.len() {
            return Err(GeneratorError::invalid_parameter(
                "pixels",
                format!("expected {} values for {}, got {}", dim.len(), dim, pixels.len()),
            ));
        }
        if let Some(bad) = pixels.iter().find(|p| !(0.0..1.0).contains(*p)) {
            return Err(GeneratorError::invalid_parameter(
                "pixels",
                format!("intensity {} outside [0, 1)", bad),
            ));
        }
        Ok(Self { dim, pixels })
    }

    /// Shape of the image.
    #[inline]
    pub fn dim(&self) -> Dimension2D {
        self.dim
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dim.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dim.cols()
    }

    /// Pixel at (`row`, `col`), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.pixels[row * self.cols() + col])
        } else {
            None
        }
    }

    /// One row of pixels, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let cols = self.cols();
        self.pixels.get(row * cols..(row + 1) * cols)
    }

    /// Iterates rows top to bottom.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.pixels.chunks_exact(self.cols())
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    /// Consumes the buffer, returning the row-major pixels.
    pub fn into_pixels(self) -> Vec<f64> {
        self.pixels
    }
}

/// Generates a random image of shape `dim`.
///
/// # Arguments
///
/// * `rng` - Uniform random source
/// * `dim` - Two-element descriptor `[rows, cols]`
///
/// # Errors
///
/// Returns `InvalidDimension` if `dim` is not two positive integers or
/// describes more cells than one buffer can hold. No randomness is drawn in
/// that case.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::image::generate_image;
///
/// let mut rng = DemoRng::from_seed(1);
/// let img = generate_image(&mut rng, &[16, 20]).unwrap();
/// assert_eq!(img.pixels().len(), 320);
/// assert!(img.pixels().iter().all(|p| (0.0..1.0).contains(p)));
/// ```
pub fn generate_image<R: RandomSource + ?Sized>(rng: &mut R, dim: &[i64]) -> Result<ImageBuffer> {
    let dim = validation::dimension(dim)?;
    tracing::debug!(%dim, "generating random image");
    Ok(sample_image(rng, dim))
}

/// Draws an image of an already validated shape.
pub(crate) fn sample_image<R: RandomSource + ?Sized>(rng: &mut R, dim: Dimension2D) -> ImageBuffer {
    let mut pixels = vec![0.0; dim.len()];
    rng.fill_uniform(&mut pixels);
    ImageBuffer { dim, pixels }
}
