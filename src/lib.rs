//! # CZML
//!
//! Rust object model for writing CZML, the JSON scene-description format
//! whose object properties may vary over time.
//!
//! A property is a value (a Cartesian vector, a string, a number) plus any
//! number of optional capabilities such as a deletion marker, interpolation
//! settings or alignment. Capabilities compose onto a value through
//! [`composite_property!`]; the result renders to JSON with a fixed key order
//! and without absent fields.
//!
//! ## Modules
//!
//! - [`util`] - Errors, output settings, tracing setup
//! - [`core`] - Serialization contract, capability plumbing, composite rendering
//! - [`enums`] - Schema enumerations (interpolation algorithm, origins)
//! - [`values`] - Value containers
//! - [`capability`] - Deletable, Interpolatable, Alignment
//! - [`properties`] - Concrete composite properties
//!
//! ## Example
//!
//! ```ignore
//! use czml::prelude::*;
//!
//! let position = Position::builder()
//!     .cartesian(Cartesian3Value::new([0, 1, 2, 3, 60, 4, 5, 6])?)
//!     .epoch("2012-08-04T16:00:00Z")
//!     .interpolation_algorithm(InterpolationAlgorithm::Lagrange)
//!     .build()?;
//!
//! println!("{}", position.dumps()?);
//! ```

pub mod util;
pub mod core;
pub mod enums;
pub mod values;
pub mod capability;
pub mod properties;

// Re-export commonly used types
pub use util::{DeletePolicy, Error, Result, Settings};
pub use crate::core::{TimeValue, ToJson};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{DeletePolicy, Error, Result, Settings};
    pub use crate::core::{TimeValue, ToJson};
    pub use crate::enums::{HorizontalOrigin, InterpolationAlgorithm, VerticalOrigin};
    pub use crate::values::{Cartesian3Value, Element, NumberLeaf, StringLeaf};
    pub use crate::capability::*;
    pub use crate::properties::*;
}
