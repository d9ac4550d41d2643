//! Capability plumbing: how optional field groups attach to composites.
//!
//! A capability is a small record that owns a fixed set of JSON keys
//! (its `KNOWN_PROPERTIES`). A composite holds one record per capability it
//! supports and asks each of them, in declaration order, to write its
//! present fields into a [`Fields`] list.

use smallvec::SmallVec;
use std::fmt;

use super::{JsonMap, JsonValue, ToJson};
use crate::util::{Result, Settings};

/// JSON key of the deletion marker. It gets special placement when true.
pub const DELETE_KEY: &str = "delete";

/// Ordered field contributions collected while rendering a composite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: SmallVec<[(&'static str, JsonValue); 4]>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn push(&mut self, key: &'static str, value: JsonValue) {
        self.entries.push((key, value));
    }

    /// Append a field only when `value` is present.
    pub fn push_opt<T: ToJson + ?Sized>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
        settings: &Settings,
    ) {
        if let Some(value) = value {
            self.push(key, value.to_json_with(settings));
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over key-value pairs in contribution order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Convert into a JSON object, keeping contribution order.
    pub fn into_map(self) -> JsonMap<String, JsonValue> {
        self.into_iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect()
    }
}

impl IntoIterator for Fields {
    type Item = (&'static str, JsonValue);
    type IntoIter = smallvec::IntoIter<[(&'static str, JsonValue); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Object-safe half of a capability: writing its fields.
pub trait CapabilityFields: fmt::Debug {
    /// Append every present field this capability owns.
    /// Absent fields are skipped, never written as `null`.
    fn write_fields(&self, fields: &mut Fields, settings: &Settings);

    /// True when this capability marks the whole property deleted.
    fn deletes(&self) -> bool {
        false
    }

    /// Reject field values that cannot be written. Called by `build()`.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A composable field group with a fixed key set.
pub trait Capability: CapabilityFields + Clone + Default {
    /// Name used in composition errors.
    const NAME: &'static str;

    /// JSON keys owned by this capability.
    const KNOWN_PROPERTIES: &'static [&'static str];
}

/// Read access to a capability record held by a composite.
pub trait HasCapability<C: Capability> {
    fn capability(&self) -> &C;
}

/// Write access to a capability record while a composite is being built.
pub trait BuildsCapability<C: Capability> {
    fn capability_mut(&mut self) -> &mut C;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_order_and_lookup() {
        let mut fields = Fields::new();
        fields.push("b", json!(1));
        fields.push("a", json!(2));
        fields.push_opt::<str>("missing", None, &Settings::default());
        fields.push_opt("c", Some("x"), &Settings::default());

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("a"), Some(&json!(2)));
        assert_eq!(fields.get("missing"), None);

        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);

        let map = fields.into_map();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }
}
