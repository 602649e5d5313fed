//! Value types and the shared error taxonomy.
//!
//! This module provides:
//! - [`GeneratorError`]: validation failures raised by every generator
//! - [`Dimension2D`]: a positive (rows, cols) pair
//! - [`Range`]: a normalised closed interval of finite reals

pub mod dimension;
pub mod error;
pub mod range;

pub use dimension::{Dimension2D, MAX_CELLS};
pub use error::{GeneratorError, Result};
pub use range::Range;
