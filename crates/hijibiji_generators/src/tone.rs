//! Random tone sequence synthesis.
//!
//! Each tone is a fixed-amplitude sine burst whose carrier frequency is drawn
//! uniformly from `[min_freq, max_freq]`. Tones are independent of one
//! another; only the frequency is redrawn.
//!
//! # Sampling
//!
//! A tone of `duration` seconds at `sample_rate` Hz has
//! `n = floor(sample_rate * duration)` samples on the half-open time axis
//! `t[i] = i * duration / n`, `i = 0..n`, and
//! `sample[i] = AMPLITUDE * sin(2π · freq · t[i])`.

use std::f64::consts::TAU;

use hijibiji_core::config::ToneSettings;
use hijibiji_core::rng::RandomSource;
use hijibiji_core::{validation, GeneratorError, Range, Result};

/// Peak amplitude of every generated tone.
pub const AMPLITUDE: f64 = 0.5;

/// Parameters for a random tone sequence.
///
/// # Examples
///
/// ```rust
/// use hijibiji_generators::tone::ToneParams;
///
/// let params = ToneParams {
///     num_tones: 3,
///     ..ToneParams::default()
/// };
/// assert_eq!(params.sample_rate, 42_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneParams {
    /// Length of each tone in seconds.
    pub duration: f64,
    /// Number of tones to generate.
    pub num_tones: i64,
    /// Lowest carrier frequency in Hz.
    pub min_freq: f64,
    /// Highest carrier frequency in Hz.
    pub max_freq: f64,
    /// Samples per second.
    pub sample_rate: u32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::from_settings(&ToneSettings::default())
    }
}

impl ToneParams {
    /// Builds parameters from configured tone settings.
    pub fn from_settings(settings: &ToneSettings) -> Self {
        Self {
            duration: settings.duration_secs,
            num_tones: settings.num_tones,
            min_freq: settings.min_freq_hz,
            max_freq: settings.max_freq_hz,
            sample_rate: settings.sample_rate_hz,
        }
    }

    /// Number of samples in each tone: `floor(sample_rate * duration)`.
    #[inline]
    pub fn samples_per_tone(&self) -> usize {
        (self.sample_rate as f64 * self.duration).floor() as usize
    }

    /// Validates the parameters, returning the tone count and frequency band.
    ///
    /// # Errors
    ///
    /// - `InvalidSampleRate` if `sample_rate < 40000`
    /// - `InvalidParameter` if `duration` or a frequency is not positive,
    ///   `num_tones` is negative, or `min_freq > max_freq`
    pub fn validate(&self) -> Result<(usize, Range)> {
        validation::sample_rate(self.sample_rate)?;
        validation::positive("duration", self.duration)?;
        let num_tones = validation::count("num_tones", self.num_tones)?;
        let min_freq = validation::positive("min_freq", self.min_freq)?;
        let max_freq = validation::positive("max_freq", self.max_freq)?;
        if min_freq > max_freq {
            return Err(GeneratorError::invalid_parameter(
                "min_freq",
                format!("must not exceed max_freq ({} > {})", min_freq, max_freq),
            ));
        }
        let band = Range::new(min_freq, max_freq).ok_or_else(|| {
            GeneratorError::invalid_parameter("max_freq", "frequency band too wide to sample")
        })?;
        Ok((num_tones, band))
    }
}

/// A single sine burst.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneWaveform {
    frequency: f64,
    sample_rate: u32,
    duration: f64,
    samples: Vec<f64>,
}

impl ToneWaveform {
    /// Carrier frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Samples per second.
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Nominal duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Ordered tones, intended to be played one after another.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneSequence {
    tones: Vec<ToneWaveform>,
}

impl ToneSequence {
    #[inline]
    pub fn tones(&self) -> &[ToneWaveform] {
        &self.tones
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToneWaveform> {
        self.tones.iter()
    }
}

impl IntoIterator for ToneSequence {
    type Item = ToneWaveform;
    type IntoIter = std::vec::IntoIter<ToneWaveform>;

    fn into_iter(self) -> Self::IntoIter {
        self.tones.into_iter()
    }
}

impl<'a> IntoIterator for &'a ToneSequence {
    type Item = &'a ToneWaveform;
    type IntoIter = std::slice::Iter<'a, ToneWaveform>;

    fn into_iter(self) -> Self::IntoIter {
        self.tones.iter()
    }
}

/// Synthesises one sine burst at a fixed frequency.
///
/// Deterministic; callers are expected to have validated the arguments.
pub fn synthesize_tone(frequency: f64, duration: f64, sample_rate: u32) -> ToneWaveform {
    let n = (sample_rate as f64 * duration).floor() as usize;
    let dt = if n == 0 { 0.0 } else { duration / n as f64 };
    let samples = (0..n)
        .map(|i| AMPLITUDE * (TAU * frequency * (i as f64 * dt)).sin())
        .collect();

    ToneWaveform {
        frequency,
        sample_rate,
        duration,
        samples,
    }
}

/// Generates `params.num_tones` tones with independently drawn frequencies.
///
/// # Errors
///
/// See [`ToneParams::validate`]; nothing is drawn when validation fails.
///
/// # Examples
///
/// ```rust
/// use hijibiji_core::rng::DemoRng;
/// use hijibiji_generators::tone::{generate_tones, ToneParams};
///
/// let mut rng = DemoRng::from_seed(9);
/// let seq = generate_tones(&mut rng, &ToneParams::default()).unwrap();
/// assert_eq!(seq.len(), 5);
/// assert!(seq.iter().all(|t| t.len() == 12_600));
/// ```
pub fn generate_tones<R: RandomSource + ?Sized>(
    rng: &mut R,
    params: &ToneParams,
) -> Result<ToneSequence> {
    let (num_tones, band) = params.validate()?;
    tracing::debug!(
        num_tones,
        min_freq = band.low(),
        max_freq = band.high(),
        sample_rate = params.sample_rate,
        "generating tone sequence"
    );

    let tones = (0..num_tones)
        .map(|_| {
            let frequency = rng.next_in_range(band);
            synthesize_tone(frequency, params.duration, params.sample_rate)
        })
        .collect();

    Ok(ToneSequence { tones })
}
