//! # Hijibiji Generators (Layer 2)
//!
//! Stochastic content generators for visual and audio demonstrations. Each
//! generator validates its parameters through `hijibiji_core::validation`,
//! draws from an injected [`RandomSource`](hijibiji_core::rng::RandomSource)
//! and returns a freshly allocated buffer owned by the caller.
//!
//! ## Architecture
//!
//! ```text
//! hijibiji_generators
//! ├── image      ImageBuffer of uniform [0, 1) pixels
//! ├── frames     lazy FrameStream of independent images
//! ├── tone       ToneSequence of fixed-amplitude sine bursts
//! ├── points     PointSet for scatter plots and dot clouds
//! ├── walk       ±1 random walks in 1, 2 or 3 dimensions (+ rayon batches)
//! ├── sink       VisualizationSink / AudioSink interfaces, recording sinks
//! └── showcase   generate-then-forward routines with stock styling
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use hijibiji_core::rng::DemoRng;
//! use hijibiji_generators::{image, walk};
//!
//! let mut rng = DemoRng::from_seed(42);
//!
//! let img = image::generate_image(&mut rng, &[16, 20]).unwrap();
//! assert_eq!((img.rows(), img.cols()), (16, 20));
//!
//! let batch = walk::simulate(&mut rng, 1, 3, walk::WalkDimension::One).unwrap();
//! assert_eq!(batch.trajectories()[0].len(), 4);
//! ```

pub mod frames;
pub mod image;
pub mod points;
pub mod showcase;
pub mod sink;
pub mod tone;
pub mod walk;

pub use frames::{generate_frames, FrameStream};
pub use image::{generate_image, ImageBuffer};
pub use points::{generate_dots, generate_points, Point, PointSet};
pub use showcase::{Showcase, ShowcaseError};
pub use sink::{AudioSink, SinkError, VisualizationSink};
pub use tone::{generate_tones, ToneParams, ToneSequence, ToneWaveform};
pub use walk::{simulate, WalkBatch, WalkDimension, WalkTrajectory};
