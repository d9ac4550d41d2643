//! Capability records that can be mixed into composite properties.
//!
//! | Capability | Keys |
//! |---|---|
//! | [`Deletable`] | `delete` |
//! | [`Interpolatable`] | `epoch`, `interpolationAlgorithm` |
//! | [`Alignment`] | `horizontalOrigin`, `verticalOrigin` |
//!
//! Each record comes with a pair of extension traits: one giving composites
//! read accessors for its fields, one giving builders keyword-style setters.

mod alignment;
mod deletable;
mod interpolatable;

pub use alignment::{AlignedBuilder, AlignedProperty, Alignment};
pub use deletable::{Deletable, DeletableBuilder, DeletableProperty};
pub use interpolatable::{Interpolatable, InterpolatableBuilder, InterpolatableProperty};
