//! Generate-then-forward demonstration routines.
//!
//! Each routine validates its arguments, generates content and hands it to a
//! sink together with the stock styling for that kind of content. The
//! generated data is returned to the caller as well (except for animations,
//! whose frames are consumed by the sink).
//!
//! Free functions take an explicit random source and fixed styling.
//! [`Showcase`] bundles a random source with a [`GeneratorConfig`] and takes
//! colormap, frame interval, tone parameters and dot sizes from it.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use hijibiji_core::config::{ConfigError, GeneratorConfig};
use hijibiji_core::rng::{DemoRng, RandomSource};
use hijibiji_core::GeneratorError;

use crate::frames::{generate_frames, FRAME_INTERVAL};
use crate::image::{generate_image, ImageBuffer};
use crate::points::{generate_dots, generate_points, PointSet};
use crate::sink::{
    play_sequence, AnimationStyle, AudioSink, ImageStyle, PlotStyle, ScatterStyle, SinkError,
    VisualizationSink,
};
use crate::tone::{generate_tones, ToneParams, ToneSequence};
use crate::walk::{simulate, WalkBatch, WalkDimension};

/// Marker colour of plain scatter points.
pub const POINT_COLOR: &str = "#018c65";
/// Marker glyph of plain scatter points.
pub const POINT_MARKER: &str = "+";
/// Colormap of dot clouds.
pub const DOT_COLORMAP: &str = "viridis";
/// Dot transparency.
pub const DOT_ALPHA: f64 = 0.7;
/// Dot outline colour.
pub const DOT_EDGE_COLOR: &str = "black";
/// Trajectory transparency.
pub const WALK_ALPHA: f64 = 0.6;
/// Pixel interpolation for images and animations.
pub const INTERPOLATION: &str = "nearest";

/// Showcase error types
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Parameter validation failed; nothing was forwarded.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// The sink rejected or failed to present the content.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The showcase configuration could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for showcase routines.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Generates a random image and shows it.
///
/// Titled `"Random {rows}x{cols} Image"`, nearest-neighbour interpolation.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::showcase::random_image;
/// use hijibiji_generators::sink::RecordingVisualizationSink;
///
/// let mut rng = DemoRng::from_seed(1);
/// let mut sink = RecordingVisualizationSink::new();
/// random_image(&mut rng, &mut sink, &[16, 20], "gray").unwrap();
/// assert_eq!(sink.events()[0].title(), "Random 16x20 Image");
/// ```
pub fn random_image<R, S>(
    rng: &mut R,
    sink: &mut S,
    dim: &[i64],
    colormap: &str,
) -> Result<ImageBuffer>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    let image = generate_image(rng, dim)?;
    let style = ImageStyle {
        title: format!("Random {} Image", image.dim()),
        colormap: colormap.to_string(),
        interpolation: INTERPOLATION.to_string(),
    };
    info!(title = %style.title, "showing image");
    forward(sink.show_image(&image, &style))?;
    Ok(image)
}

/// Streams `num_frames` random frames into an animation at the stock
/// 100 ms cadence, axis ticks hidden.
pub fn random_video<R, S>(
    rng: &mut R,
    sink: &mut S,
    dim: &[i64],
    num_frames: i64,
    colormap: &str,
) -> Result<()>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    animate_frames(rng, sink, dim, num_frames, colormap, FRAME_INTERVAL)
}

/// Generates a tone sequence and plays it tone by tone.
///
/// On a playback failure the tones already played stay played; the error is
/// returned as is.
pub fn random_audio<R, S>(rng: &mut R, sink: &mut S, params: &ToneParams) -> Result<ToneSequence>
where
    R: RandomSource + ?Sized,
    S: AudioSink + ?Sized,
{
    let sequence = generate_tones(rng, params)?;
    info!(
        num_tones = sequence.len(),
        sample_rate = params.sample_rate,
        "playing tone sequence"
    );
    forward(play_sequence(sink, &sequence))?;
    Ok(sequence)
}

/// Scatters random points with `+` markers in `#018c65`, ticks at the range
/// endpoints.
pub fn random_points<R, S>(
    rng: &mut R,
    sink: &mut S,
    num_points: i64,
    range_x: &[f64],
    range_y: &[f64],
) -> Result<PointSet>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    let points = generate_points(rng, num_points, range_x, range_y)?;
    let style = ScatterStyle {
        title: "Randomly Scattered Points".to_string(),
        marker: Some(POINT_MARKER.to_string()),
        color: Some(POINT_COLOR.to_string()),
        x_ticks: vec![points.range_x().low(), points.range_x().high()],
        y_ticks: vec![points.range_y().low(), points.range_y().high()],
        ..ScatterStyle::default()
    };
    info!(title = %style.title, num_points = points.len(), "scattering points");
    forward(sink.scatter(&points, &style))?;
    Ok(points)
}

/// Scatters a dot cloud coloured through `viridis`, alpha 0.7, black edges.
pub fn random_dots<R, S>(
    rng: &mut R,
    sink: &mut S,
    num_points: i64,
    range_x: &[f64],
    range_y: &[f64],
    size_range: &[f64],
) -> Result<PointSet>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    scatter_dots(rng, sink, num_points, range_x, range_y, size_range, DOT_COLORMAP)
}

/// Simulates a walk batch and plots every trajectory.
///
/// 1D walks are plotted as position over steps; 2D and 3D walks as paths in
/// the plane or in space.
pub fn random_walks<R, S>(
    rng: &mut R,
    sink: &mut S,
    num_walkers: i64,
    num_steps: i64,
    dimensions: WalkDimension,
) -> Result<WalkBatch>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    let batch = simulate(rng, num_walkers, num_steps, dimensions)?;
    let style = walk_style(&batch);
    info!(title = %style.title, "plotting random walks");
    forward(sink.plot_walks(&batch, &style))?;
    Ok(batch)
}

/// Title and axis labels for a walk plot.
pub fn walk_style(batch: &WalkBatch) -> PlotStyle {
    let base = format!(
        "{} Random Walkers with {} Steps",
        batch.len(),
        batch.num_steps()
    );
    let (title, labels) = match batch.dimensions() {
        WalkDimension::One => (format!("{} in 1D", base), vec!["Steps", "Position"]),
        WalkDimension::Two => (base, vec!["X-axis", "Y-axis"]),
        WalkDimension::Three => (
            format!("{} in 3D", base),
            vec!["X-axis", "Y-axis", "Z-axis"],
        ),
    };

    PlotStyle {
        title,
        alpha: WALK_ALPHA,
        axis_labels: labels.into_iter().map(String::from).collect(),
    }
}

fn animate_frames<R, S>(
    rng: &mut R,
    sink: &mut S,
    dim: &[i64],
    num_frames: i64,
    colormap: &str,
    interval: Duration,
) -> Result<()>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    let mut frames = generate_frames(rng, dim, num_frames)?;
    let style = AnimationStyle {
        title: "Random Pixel Animation".to_string(),
        colormap: colormap.to_string(),
        interpolation: INTERPOLATION.to_string(),
        interval,
        hide_ticks: true,
    };
    info!(
        dim = %frames.dim(),
        num_frames = frames.len(),
        interval_ms = interval.as_millis() as u64,
        "streaming animation"
    );
    forward(sink.animate(&mut frames, &style))
}

fn scatter_dots<R, S>(
    rng: &mut R,
    sink: &mut S,
    num_points: i64,
    range_x: &[f64],
    range_y: &[f64],
    size_range: &[f64],
    colormap: &str,
) -> Result<PointSet>
where
    R: RandomSource + ?Sized,
    S: VisualizationSink + ?Sized,
{
    let dots = generate_dots(rng, num_points, range_x, range_y, size_range)?;
    let style = ScatterStyle {
        title: "Randomly Scattered Dots".to_string(),
        colormap: Some(colormap.to_string()),
        alpha: Some(DOT_ALPHA),
        edge_color: Some(DOT_EDGE_COLOR.to_string()),
        ..ScatterStyle::default()
    };
    info!(title = %style.title, num_points = dots.len(), "scattering dots");
    forward(sink.scatter(&dots, &style))?;
    Ok(dots)
}

fn forward<T>(result: std::result::Result<T, SinkError>) -> Result<T> {
    result.map_err(|e| {
        warn!(error = %e, "sink failed");
        ShowcaseError::Sink(e)
    })
}

/// A random source paired with showcase defaults.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::config::GeneratorConfig;
/// use hijibiji_generators::showcase::Showcase;
/// use hijibiji_generators::sink::RecordingAudioSink;
///
/// let config = GeneratorConfig {
///     seed: Some(7),
///     ..GeneratorConfig::default()
/// };
/// let mut showcase = Showcase::from_config(config).unwrap();
/// let mut speaker = RecordingAudioSink::new();
///
/// let tones = showcase.audio(&mut speaker).unwrap();
/// assert_eq!(speaker.played(), tones.tones());
/// ```
#[derive(Debug)]
pub struct Showcase<R> {
    rng: R,
    config: GeneratorConfig,
}

impl Showcase<DemoRng> {
    /// Validates `config` and seeds a [`DemoRng`] from it.
    ///
    /// # Errors
    ///
    /// Returns `ShowcaseError::Config` if the configuration is invalid.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.rng();
        info!(seed = rng.seed(), colormap = %config.colormap, "showcase ready");
        Ok(Self { rng, config })
    }
}

impl<R: RandomSource> Showcase<R> {
    /// Pairs an existing random source with `config`.
    ///
    /// The configuration's seed is ignored.
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// [`random_image`] with the configured colormap.
    pub fn image<S>(&mut self, sink: &mut S, dim: &[i64]) -> Result<ImageBuffer>
    where
        S: VisualizationSink + ?Sized,
    {
        random_image(&mut self.rng, sink, dim, &self.config.colormap)
    }

    /// [`random_video`] with the configured colormap and frame interval.
    pub fn video<S>(&mut self, sink: &mut S, dim: &[i64], num_frames: i64) -> Result<()>
    where
        S: VisualizationSink + ?Sized,
    {
        let interval = Duration::from_millis(self.config.frame_interval_ms);
        animate_frames(
            &mut self.rng,
            sink,
            dim,
            num_frames,
            &self.config.colormap,
            interval,
        )
    }

    /// [`random_audio`] with the configured tone settings.
    pub fn audio<S>(&mut self, sink: &mut S) -> Result<ToneSequence>
    where
        S: AudioSink + ?Sized,
    {
        let params = ToneParams::from_settings(&self.config.tone);
        random_audio(&mut self.rng, sink, &params)
    }

    pub fn points<S>(
        &mut self,
        sink: &mut S,
        num_points: i64,
        range_x: &[f64],
        range_y: &[f64],
    ) -> Result<PointSet>
    where
        S: VisualizationSink + ?Sized,
    {
        random_points(&mut self.rng, sink, num_points, range_x, range_y)
    }

    /// [`random_dots`] with the configured size range and colormap.
    pub fn dots<S>(
        &mut self,
        sink: &mut S,
        num_points: i64,
        range_x: &[f64],
        range_y: &[f64],
    ) -> Result<PointSet>
    where
        S: VisualizationSink + ?Sized,
    {
        scatter_dots(
            &mut self.rng,
            sink,
            num_points,
            range_x,
            range_y,
            &self.config.dot_size_range,
            &self.config.colormap,
        )
    }

    pub fn walks<S>(
        &mut self,
        sink: &mut S,
        num_walkers: i64,
        num_steps: i64,
        dimensions: WalkDimension,
    ) -> Result<WalkBatch>
    where
        S: VisualizationSink + ?Sized,
    {
        random_walks(&mut self.rng, sink, num_walkers, num_steps, dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingAudioSink, RecordingVisualizationSink, VisualEvent};

    #[test]
    fn test_image_title_and_style() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::new();
        let image = random_image(&mut rng, &mut sink, &[16, 20], "gray").unwrap();

        match sink.last() {
            Some(VisualEvent::Image { image: shown, style }) => {
                assert_eq!(shown, &image);
                assert_eq!(style.title, "Random 16x20 Image");
                assert_eq!(style.colormap, "gray");
                assert_eq!(style.interpolation, "nearest");
            }
            other => panic!("expected image event, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_dimension_forwards_nothing() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::new();
        let result = random_image(&mut rng, &mut sink, &[0, 5], "gray");

        assert!(matches!(
            result,
            Err(ShowcaseError::Generator(GeneratorError::InvalidDimension { .. }))
        ));
        assert_eq!(sink.event_count(), 0);
    }

    #[test]
    fn test_video_style() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::new();
        random_video(&mut rng, &mut sink, &[4, 4], 3, "viridis").unwrap();

        match sink.last() {
            Some(VisualEvent::Animation { frames, style }) => {
                assert_eq!(frames.len(), 3);
                assert_eq!(style.title, "Random Pixel Animation");
                assert_eq!(style.interval, Duration::from_millis(100));
                assert!(style.hide_ticks);
            }
            other => panic!("expected animation event, got {:?}", other),
        }
    }

    #[test]
    fn test_points_style_uses_range_endpoints() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::new();
        random_points(&mut rng, &mut sink, 10, &[-5.0, 5.0], &[10.0, 0.0]).unwrap();

        match sink.last() {
            Some(VisualEvent::Scatter { style, .. }) => {
                assert_eq!(style.title, "Randomly Scattered Points");
                assert_eq!(style.marker.as_deref(), Some("+"));
                assert_eq!(style.color.as_deref(), Some("#018c65"));
                assert_eq!(style.x_ticks, vec![-5.0, 5.0]);
                assert_eq!(style.y_ticks, vec![0.0, 10.0]);
            }
            other => panic!("expected scatter event, got {:?}", other),
        }
    }

    #[test]
    fn test_dots_style() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::new();
        let dots =
            random_dots(&mut rng, &mut sink, 20, &[0.0, 1.0], &[0.0, 1.0], &[50.0, 500.0])
                .unwrap();

        assert!(dots.is_dot_cloud());
        match sink.last() {
            Some(VisualEvent::Scatter { style, .. }) => {
                assert_eq!(style.title, "Randomly Scattered Dots");
                assert_eq!(style.colormap.as_deref(), Some("viridis"));
                assert_eq!(style.alpha, Some(0.7));
                assert_eq!(style.edge_color.as_deref(), Some("black"));
                assert!(style.marker.is_none());
            }
            other => panic!("expected scatter event, got {:?}", other),
        }
    }

    #[test]
    fn test_walk_titles_and_labels() {
        let mut rng = DemoRng::from_seed(3);
        let cases = [
            (WalkDimension::One, "5 Random Walkers with 10 Steps in 1D", 2),
            (WalkDimension::Two, "5 Random Walkers with 10 Steps", 2),
            (WalkDimension::Three, "5 Random Walkers with 10 Steps in 3D", 3),
        ];

        for (dims, title, labels) in cases {
            let batch = simulate(&mut rng, 5, 10, dims).unwrap();
            let style = walk_style(&batch);
            assert_eq!(style.title, title);
            assert_eq!(style.axis_labels.len(), labels);
            assert_eq!(style.alpha, 0.6);
        }

        let batch = simulate(&mut rng, 1, 1, WalkDimension::One).unwrap();
        assert_eq!(walk_style(&batch).axis_labels, vec!["Steps", "Position"]);
    }

    #[test]
    fn test_sink_failure_surfaces() {
        let mut rng = DemoRng::from_seed(3);
        let mut sink = RecordingVisualizationSink::unavailable();
        let result = random_walks(&mut rng, &mut sink, 2, 5, WalkDimension::Two);
        assert!(matches!(
            result,
            Err(ShowcaseError::Sink(SinkError::Unavailable(_)))
        ));
    }

    #[test]
    fn test_audio_plays_every_tone() {
        let mut rng = DemoRng::from_seed(3);
        let mut speaker = RecordingAudioSink::new();
        let params = ToneParams {
            duration: 0.01,
            ..ToneParams::default()
        };
        let tones = random_audio(&mut rng, &mut speaker, &params).unwrap();
        assert_eq!(speaker.played(), tones.tones());
    }

    #[test]
    fn test_audio_invalid_sample_rate() {
        let mut rng = DemoRng::from_seed(3);
        let mut speaker = RecordingAudioSink::new();
        let params = ToneParams {
            sample_rate: 30_000,
            ..ToneParams::default()
        };
        assert!(matches!(
            random_audio(&mut rng, &mut speaker, &params),
            Err(ShowcaseError::Generator(GeneratorError::InvalidSampleRate { .. }))
        ));
        assert!(speaker.played().is_empty());
    }

    #[test]
    fn test_showcase_uses_config() {
        let config = GeneratorConfig {
            seed: Some(11),
            colormap: "magma".to_string(),
            frame_interval_ms: 250,
            dot_size_range: [1.0, 2.0],
            ..GeneratorConfig::default()
        };
        let mut showcase = Showcase::from_config(config).unwrap();
        let mut sink = RecordingVisualizationSink::new();

        showcase.video(&mut sink, &[2, 2], 1).unwrap();
        let dots = showcase.dots(&mut sink, 30, &[0.0, 1.0], &[0.0, 1.0]).unwrap();

        match &sink.events()[0] {
            VisualEvent::Animation { style, .. } => {
                assert_eq!(style.colormap, "magma");
                assert_eq!(style.interval, Duration::from_millis(250));
            }
            other => panic!("expected animation event, got {:?}", other),
        }
        assert!(dots
            .sizes()
            .unwrap()
            .iter()
            .all(|s| (1.0..=2.0).contains(s)));
    }

    #[test]
    fn test_showcase_is_reproducible() {
        let config = GeneratorConfig {
            seed: Some(5),
            ..GeneratorConfig::default()
        };
        let mut a = Showcase::from_config(config.clone()).unwrap();
        let mut b = Showcase::from_config(config).unwrap();
        let mut sink = RecordingVisualizationSink::new();

        let wa = a.walks(&mut sink, 3, 20, WalkDimension::Three).unwrap();
        let wb = b.walks(&mut sink, 3, 20, WalkDimension::Three).unwrap();
        assert_eq!(wa, wb);
    }

    #[test]
    fn test_error_display() {
        let config = ShowcaseError::from(ConfigError::Parse("bad toml".to_string()));
        assert_eq!(
            config.to_string(),
            "Configuration error: Configuration parse error: bad toml"
        );

        let sink = ShowcaseError::from(SinkError::Render("no canvas".to_string()));
        assert_eq!(sink.to_string(), "Render failed: no canvas");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GeneratorConfig::default();
        config.tone.sample_rate_hz = 8_000;
        assert!(matches!(
            Showcase::from_config(config),
            Err(ShowcaseError::Config(_))
        ));
    }
}
