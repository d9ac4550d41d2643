//! Core layer - the composition mechanism and the serialization contract.
//!
//! This module provides:
//! - [`ToJson`] - Rendering of any node to a JSON-compatible value
//! - [`TimeValue`] - Pass-through time tags and epochs
//! - [`Capability`] / [`CapabilityFields`] / [`Fields`] - Capability plumbing
//! - [`HasCapability`] / [`BuildsCapability`] - Typed access to capability records
//! - [`render_composite`] / [`check_composition`] / [`keys_disjoint`] - Composite rendering and key checks

mod capability;
mod composite;
mod json;
mod time_value;

pub use capability::{
    BuildsCapability, Capability, CapabilityFields, Fields, HasCapability, DELETE_KEY,
};
pub use composite::{check_composition, keys_disjoint, render_composite};
pub use json::{encode, JsonMap, JsonValue, ToJson};
pub use time_value::TimeValue;
