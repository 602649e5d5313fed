//! # Random Number Generation Infrastructure
//!
//! Every generator draws its randomness through the [`RandomSource`] trait
//! rather than a process-global generator. Production callers use
//! [`DemoRng`], a seeded wrapper around `rand::rngs::StdRng`; tests can plug
//! in any type implementing the trait (for example a scripted sequence).
//!
//! ## Module Structure
//!
//! - [`source`]: the `RandomSource` trait (uniform, uniform-in-range and ±1 draws)
//! - [`prng`]: the seeded `DemoRng` implementation
//!
//! ## Usage Example
//!
//! ```rust
//! use hijibiji_core::rng::{DemoRng, RandomSource};
//! use hijibiji_core::Range;
//!
//! let mut rng = DemoRng::from_seed(12345);
//!
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let freq = rng.next_in_range(Range::new(200.0, 2000.0).unwrap());
//! assert!((200.0..=2000.0).contains(&freq));
//!
//! let step = rng.next_sign();
//! assert!(step == -1 || step == 1);
//! ```

mod prng;
mod source;

pub use prng::DemoRng;
pub use source::RandomSource;

#[cfg(test)]
mod tests;
