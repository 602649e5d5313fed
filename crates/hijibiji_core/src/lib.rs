//! # Hijibiji Core (Layer 1: Foundation)
//!
//! ## Layer 1 Role
//!
//! hijibiji_core is the foundation of the two-layer workspace:
//! - Error taxonomy shared by every generator ([`types::GeneratorError`])
//! - Validated value types ([`types::Dimension2D`], [`types::Range`])
//! - Fail-fast parameter checks ([`validation`])
//! - Injectable random sources ([`rng::RandomSource`], [`rng::DemoRng`])
//! - Showcase defaults loaded from TOML ([`config::GeneratorConfig`])
//!
//! The generators themselves live in `hijibiji_generators` (Layer 2), which
//! depends on this crate and nothing else in the workspace.
//!
//! ## Usage Example
//!
//! ```rust
//! use hijibiji_core::rng::{DemoRng, RandomSource};
//! use hijibiji_core::validation;
//!
//! let dim = validation::dimension(&[16, 20]).unwrap();
//! assert_eq!(dim.len(), 320);
//!
//! let mut rng = DemoRng::from_seed(42);
//! let value = rng.next_uniform();
//! assert!((0.0..1.0).contains(&value));
//! ```

pub mod config;
pub mod rng;
pub mod types;
pub mod validation;

pub use types::{Dimension2D, GeneratorError, Range, Result};
