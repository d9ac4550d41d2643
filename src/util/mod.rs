//! Utility types and functions for CZML.
//!
//! This module contains the ambient pieces used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - [`Settings`] / [`DeletePolicy`] - Output configuration
//! - [`init_tracing`] - Subscriber setup for binaries

mod error;
mod logging;
mod settings;

pub use error::*;
pub use logging::*;
pub use settings::*;
