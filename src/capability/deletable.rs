//! The `delete` marker.

use crate::core::{BuildsCapability, Capability, CapabilityFields, Fields, HasCapability, JsonValue, DELETE_KEY};
use crate::util::Settings;

/// A property whose value may be deleted.
///
/// When `delete` is true the client discards existing samples or interval
/// data for the property within the containing interval, or all data if
/// there is no containing interval. All other fields of the property are
/// then ignored by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deletable {
    delete: Option<bool>,
}

impl Deletable {
    pub const fn new(delete: Option<bool>) -> Self {
        Self { delete }
    }

    /// Record with `delete: true`.
    pub const fn deleted() -> Self {
        Self { delete: Some(true) }
    }

    pub fn delete(&self) -> Option<bool> {
        self.delete
    }

    pub fn is_deleted(&self) -> bool {
        self.delete == Some(true)
    }
}

impl CapabilityFields for Deletable {
    fn write_fields(&self, fields: &mut Fields, _settings: &Settings) {
        if let Some(delete) = self.delete {
            fields.push(DELETE_KEY, JsonValue::Bool(delete));
        }
    }

    fn deletes(&self) -> bool {
        self.is_deleted()
    }
}

impl Capability for Deletable {
    const NAME: &'static str = "Deletable";
    const KNOWN_PROPERTIES: &'static [&'static str] = &[DELETE_KEY];
}

/// `delete` accessors for every composite holding a [`Deletable`].
pub trait DeletableProperty {
    fn delete(&self) -> Option<bool>;

    fn is_deleted(&self) -> bool {
        self.delete() == Some(true)
    }
}

impl<T: HasCapability<Deletable>> DeletableProperty for T {
    fn delete(&self) -> Option<bool> {
        HasCapability::<Deletable>::capability(self).delete()
    }
}

/// `delete` input for every builder of a composite holding a [`Deletable`].
pub trait DeletableBuilder: Sized {
    fn delete(self, delete: bool) -> Self;
}

impl<T: BuildsCapability<Deletable>> DeletableBuilder for T {
    fn delete(mut self, delete: bool) -> Self {
        self.capability_mut().delete = Some(delete);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_writes_nothing() {
        let mut fields = Fields::new();
        Deletable::default().write_fields(&mut fields, &Settings::default());
        assert!(fields.is_empty());
        assert!(!Deletable::default().deletes());
    }

    #[test]
    fn test_false_is_written_but_not_deleting() {
        let d = Deletable::new(Some(false));
        let mut fields = Fields::new();
        d.write_fields(&mut fields, &Settings::default());
        assert_eq!(fields.get("delete"), Some(&JsonValue::Bool(false)));
        assert!(!d.deletes());
    }

    #[test]
    fn test_deleted() {
        let d = Deletable::deleted();
        assert_eq!(d.delete(), Some(true));
        assert!(d.is_deleted());
        assert!(d.deletes());
    }
}
