//! In-memory sinks that record what they receive.
//!
//! Useful as stand-ins for a real display or audio device: nothing is shown
//! or played, every call is kept for later inspection.

use tracing::info;

use super::{
    AnimationStyle, AudioSink, ImageStyle, PlotStyle, ScatterStyle, SinkError, VisualizationSink,
};
use crate::image::ImageBuffer;
use crate::points::PointSet;
use crate::tone::ToneWaveform;
use crate::walk::WalkBatch;

/// One call received by a [`RecordingVisualizationSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum VisualEvent {
    Image {
        image: ImageBuffer,
        style: ImageStyle,
    },
    /// Every frame the animation pulled, in order.
    Animation {
        frames: Vec<ImageBuffer>,
        style: AnimationStyle,
    },
    Scatter {
        points: PointSet,
        style: ScatterStyle,
    },
    Walks {
        batch: WalkBatch,
        style: PlotStyle,
    },
}

impl VisualEvent {
    /// Title the event was drawn with.
    pub fn title(&self) -> &str {
        match self {
            VisualEvent::Image { style, .. } => &style.title,
            VisualEvent::Animation { style, .. } => &style.title,
            VisualEvent::Scatter { style, .. } => &style.title,
            VisualEvent::Walks { style, .. } => &style.title,
        }
    }
}

/// Visualization sink that keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingVisualizationSink {
    events: Vec<VisualEvent>,
    unavailable: bool,
}

impl RecordingVisualizationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every call with [`SinkError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            events: Vec::new(),
            unavailable: true,
        }
    }

    /// Recorded calls, oldest first.
    pub fn events(&self) -> &[VisualEvent] {
        &self.events
    }

    /// The most recent call, if any.
    pub fn last(&self) -> Option<&VisualEvent> {
        self.events.last()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    fn check(&self) -> Result<(), SinkError> {
        if self.unavailable {
            return Err(SinkError::Unavailable("no display attached".to_string()));
        }
        Ok(())
    }
}

impl VisualizationSink for RecordingVisualizationSink {
    fn show_image(&mut self, image: &ImageBuffer, style: &ImageStyle) -> Result<(), SinkError> {
        self.check()?;
        info!(title = %style.title, dim = %image.dim(), "image recorded");
        self.events.push(VisualEvent::Image {
            image: image.clone(),
            style: style.clone(),
        });
        Ok(())
    }

    fn animate(
        &mut self,
        frames: &mut dyn Iterator<Item = ImageBuffer>,
        style: &AnimationStyle,
    ) -> Result<(), SinkError> {
        self.check()?;
        let frames: Vec<ImageBuffer> = frames.collect();
        info!(
            title = %style.title,
            frames = frames.len(),
            interval_ms = style.interval.as_millis() as u64,
            "animation recorded"
        );
        self.events.push(VisualEvent::Animation {
            frames,
            style: style.clone(),
        });
        Ok(())
    }

    fn scatter(&mut self, points: &PointSet, style: &ScatterStyle) -> Result<(), SinkError> {
        self.check()?;
        info!(title = %style.title, points = points.len(), "scatter recorded");
        self.events.push(VisualEvent::Scatter {
            points: points.clone(),
            style: style.clone(),
        });
        Ok(())
    }

    fn plot_walks(&mut self, batch: &WalkBatch, style: &PlotStyle) -> Result<(), SinkError> {
        self.check()?;
        info!(
            title = %style.title,
            walkers = batch.len(),
            steps = batch.num_steps(),
            "walk plot recorded"
        );
        self.events.push(VisualEvent::Walks {
            batch: batch.clone(),
            style: style.clone(),
        });
        Ok(())
    }
}

/// Audio sink that keeps every played tone in memory.
///
/// Can be told to fail after a number of successful tones to exercise
/// partial playback.
#[derive(Debug, Default)]
pub struct RecordingAudioSink {
    played: Vec<ToneWaveform>,
    fail_after: Option<usize>,
}

impl RecordingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that plays `n` tones and then fails with
    /// [`SinkError::Playback`].
    pub fn failing_after(n: usize) -> Self {
        Self {
            played: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Tones played so far, in playback order.
    pub fn played(&self) -> &[ToneWaveform] {
        &self.played
    }

    /// Total samples played across all tones.
    pub fn total_samples(&self) -> usize {
        self.played.iter().map(ToneWaveform::len).sum()
    }
}

impl AudioSink for RecordingAudioSink {
    fn play_blocking(&mut self, tone: &ToneWaveform) -> Result<(), SinkError> {
        if self.fail_after.is_some_and(|n| self.played.len() >= n) {
            return Err(SinkError::Playback(format!(
                "device stopped after {} tones",
                self.played.len()
            )));
        }
        self.played.push(tone.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::generate_frames;
    use crate::image::generate_image;
    use crate::tone::synthesize_tone;
    use hijibiji_core::rng::DemoRng;

    #[test]
    fn test_records_image_and_title() {
        let mut rng = DemoRng::from_seed(1);
        let image = generate_image(&mut rng, &[2, 3]).unwrap();
        let mut sink = RecordingVisualizationSink::new();
        let style = ImageStyle {
            title: "noise".to_string(),
            ..ImageStyle::default()
        };

        sink.show_image(&image, &style).unwrap();
        assert_eq!(sink.event_count(), 1);
        assert_eq!(sink.last().map(VisualEvent::title), Some("noise"));
    }

    #[test]
    fn test_animation_drains_frames() {
        let mut rng = DemoRng::from_seed(1);
        let mut stream = generate_frames(&mut rng, &[2, 2], 4).unwrap();
        let mut sink = RecordingVisualizationSink::new();

        sink.animate(&mut stream, &AnimationStyle::default()).unwrap();
        assert_eq!(stream.len(), 0);
        match sink.last() {
            Some(VisualEvent::Animation { frames, .. }) => assert_eq!(frames.len(), 4),
            other => panic!("expected animation, got {:?}", other),
        }
    }

    #[test]
    fn test_unavailable_sink_records_nothing() {
        let mut rng = DemoRng::from_seed(1);
        let image = generate_image(&mut rng, &[1, 1]).unwrap();
        let mut sink = RecordingVisualizationSink::unavailable();

        assert!(matches!(
            sink.show_image(&image, &ImageStyle::default()),
            Err(SinkError::Unavailable(_))
        ));
        assert_eq!(sink.event_count(), 0);
    }

    #[test]
    fn test_audio_failing_after() {
        let tone = synthesize_tone(440.0, 0.001, 44_100);
        let mut sink = RecordingAudioSink::failing_after(1);

        assert!(sink.play_blocking(&tone).is_ok());
        assert!(matches!(
            sink.play_blocking(&tone),
            Err(SinkError::Playback(_))
        ));
        assert_eq!(sink.played().len(), 1);
        assert_eq!(sink.total_samples(), 44);
    }
}
