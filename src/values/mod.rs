//! Value containers: the raw data a composite property wraps.
//!
//! - [`Cartesian3Value`] - constant `[X, Y, Z]` or time-tagged `[T, X, Y, Z, ...]`
//! - [`StringLeaf`] / [`NumberLeaf`] - single primitives

mod cartesian;
mod scalar;

pub use cartesian::{validate_shape, Cartesian3Value, Element, Sample, CONSTANT_LEN, SAMPLE_LEN};
pub use scalar::{NumberLeaf, StringLeaf};
