//! Lazy random frame streams for pixel animations.
//!
//! A [`FrameStream`] yields `num_frames` independently drawn images, one per
//! call to `next()`. No frame depends on a previous frame's values and the
//! stream cannot be rewound; generate a new stream to replay.

use std::iter::FusedIterator;
use std::time::Duration;

use hijibiji_core::rng::RandomSource;
use hijibiji_core::{validation, Dimension2D, Result};

use crate::image::{sample_image, ImageBuffer};

/// Advisory cadence at which a sink should pull frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Finite, non-restartable sequence of random images.
///
/// Borrows the random source mutably for its whole lifetime, so frames are
/// drawn in order from a single stream.
pub struct FrameStream<'a, R: ?Sized> {
    rng: &'a mut R,
    dim: Dimension2D,
    remaining: usize,
}

impl<'a, R: RandomSource + ?Sized> FrameStream<'a, R> {
    /// Shape of every frame in the stream.
    #[inline]
    pub fn dim(&self) -> Dimension2D {
        self.dim
    }
}

impl<'a, R: RandomSource + ?Sized> Iterator for FrameStream<'a, R> {
    type Item = ImageBuffer;

    fn next(&mut self) -> Option<ImageBuffer> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(sample_image(&mut *self.rng, self.dim))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, R: RandomSource + ?Sized> ExactSizeIterator for FrameStream<'a, R> {}

impl<'a, R: RandomSource + ?Sized> FusedIterator for FrameStream<'a, R> {}

/// Creates a stream of `num_frames` random images of shape `dim`.
///
/// Frames are drawn on demand as the stream is advanced.
///
/// # Errors
///
/// - `InvalidDimension` if `dim` is not two positive integers
/// - `InvalidParameter` if `num_frames` is negative
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::frames::generate_frames;
///
/// let mut rng = DemoRng::from_seed(5);
/// let frames: Vec<_> = generate_frames(&mut rng, &[4, 4], 3).unwrap().collect();
/// assert_eq!(frames.len(), 3);
/// ```
pub fn generate_frames<'a, R: RandomSource + ?Sized>(
    rng: &'a mut R,
    dim: &[i64],
    num_frames: i64,
) -> Result<FrameStream<'a, R>> {
    let dim = validation::dimension(dim)?;
    let num_frames = validation::count("num_frames", num_frames)?;
    tracing::debug!(%dim, num_frames, "creating frame stream");

    Ok(FrameStream {
        rng,
        dim,
        remaining: num_frames,
    })
}
