//! Output destinations for generated content.
//!
//! The generators never render or play anything themselves. Finished buffers
//! are handed to a [`VisualizationSink`] (display / animation) or an
//! [`AudioSink`] (playback). Styling values travel alongside the data and are
//! passed through unvalidated; interpreting a colormap name or marker is the
//! sink's business.
//!
//! [`recording`] provides in-memory sinks that record every call.

pub mod recording;

pub use recording::{RecordingAudioSink, RecordingVisualizationSink, VisualEvent};

use std::time::Duration;

use thiserror::Error;

use crate::image::ImageBuffer;
use crate::points::PointSet;
use crate::tone::{ToneSequence, ToneWaveform};
use crate::walk::WalkBatch;

/// Sink failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SinkError {
    /// No device or window is available.
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    /// Audio playback failed part-way.
    #[error("Playback failed: {0}")]
    Playback(String),

    /// Rendering failed.
    #[error("Render failed: {0}")]
    Render(String),
}

/// Styling for a static image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageStyle {
    pub title: String,
    /// Colormap name, e.g. `viridis` or `gray`.
    pub colormap: String,
    /// Pixel interpolation mode, e.g. `nearest`.
    pub interpolation: String,
}

/// Styling for an animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationStyle {
    pub title: String,
    pub colormap: String,
    pub interpolation: String,
    /// Delay between frames.
    pub interval: Duration,
    /// Hide axis ticks.
    pub hide_ticks: bool,
}

/// Styling for a scatter plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterStyle {
    pub title: String,
    /// Marker glyph, e.g. `+`.
    pub marker: Option<String>,
    /// Fixed colour, e.g. `#018c65`.
    pub color: Option<String>,
    /// Colormap applied to per-point colour scalars.
    pub colormap: Option<String>,
    pub alpha: Option<f64>,
    pub edge_color: Option<String>,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
}

/// Styling for walk trajectories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub alpha: f64,
    /// One label per plotted axis, in axis order.
    pub axis_labels: Vec<String>,
}

/// Display destination for images, animations, scatter plots and walks.
pub trait VisualizationSink {
    /// Show a static image.
    fn show_image(&mut self, image: &ImageBuffer, style: &ImageStyle) -> Result<(), SinkError>;

    /// Animate frames pulled from `frames`, one per `style.interval`.
    fn animate(
        &mut self,
        frames: &mut dyn Iterator<Item = ImageBuffer>,
        style: &AnimationStyle,
    ) -> Result<(), SinkError>;

    /// Draw a scatter plot.
    fn scatter(&mut self, points: &PointSet, style: &ScatterStyle) -> Result<(), SinkError>;

    /// Plot every trajectory of a walk batch.
    fn plot_walks(&mut self, batch: &WalkBatch, style: &PlotStyle) -> Result<(), SinkError>;
}

/// Playback destination for tones.
pub trait AudioSink {
    /// Play `tone` at its sample rate and return once playback has finished.
    fn play_blocking(&mut self, tone: &ToneWaveform) -> Result<(), SinkError>;
}

impl<S: VisualizationSink + ?Sized> VisualizationSink for &mut S {
    fn show_image(&mut self, image: &ImageBuffer, style: &ImageStyle) -> Result<(), SinkError> {
        (**self).show_image(image, style)
    }

    fn animate(
        &mut self,
        frames: &mut dyn Iterator<Item = ImageBuffer>,
        style: &AnimationStyle,
    ) -> Result<(), SinkError> {
        (**self).animate(frames, style)
    }

    fn scatter(&mut self, points: &PointSet, style: &ScatterStyle) -> Result<(), SinkError> {
        (**self).scatter(points, style)
    }

    fn plot_walks(&mut self, batch: &WalkBatch, style: &PlotStyle) -> Result<(), SinkError> {
        (**self).plot_walks(batch, style)
    }
}

impl<S: AudioSink + ?Sized> AudioSink for &mut S {
    fn play_blocking(&mut self, tone: &ToneWaveform) -> Result<(), SinkError> {
        (**self).play_blocking(tone)
    }
}

/// Plays a sequence tone by tone.
///
/// Each tone is handed to the sink only after the previous
/// [`AudioSink::play_blocking`] call has returned. The first failure stops
/// the sequence and is returned unchanged.
///
/// # Returns
///
/// The number of tones played.
pub fn play_sequence<S: AudioSink + ?Sized>(
    sink: &mut S,
    sequence: &ToneSequence,
) -> Result<usize, SinkError> {
    for (index, tone) in sequence.iter().enumerate() {
        tracing::debug!(
            index,
            frequency = tone.frequency(),
            samples = tone.len(),
            "playing tone"
        );
        sink.play_blocking(tone)?;
    }
    Ok(sequence.len())
}
