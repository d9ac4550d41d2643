//! Horizontal and vertical origin of a visual object.

use crate::core::{BuildsCapability, Capability, CapabilityFields, Fields, HasCapability};
use crate::enums::{HorizontalOrigin, VerticalOrigin};
use crate::util::Settings;

/// An object that can be horizontally or vertically aligned with its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alignment {
    horizontal_origin: Option<HorizontalOrigin>,
    vertical_origin: Option<VerticalOrigin>,
}

impl Alignment {
    pub const fn new(
        horizontal_origin: Option<HorizontalOrigin>,
        vertical_origin: Option<VerticalOrigin>,
    ) -> Self {
        Self {
            horizontal_origin,
            vertical_origin,
        }
    }

    /// Whether the object is left-, center-, or right-aligned with the position.
    pub fn horizontal_origin(&self) -> Option<HorizontalOrigin> {
        self.horizontal_origin
    }

    /// Whether the object is bottom-, center-, or top-aligned with the position.
    pub fn vertical_origin(&self) -> Option<VerticalOrigin> {
        self.vertical_origin
    }
}

impl CapabilityFields for Alignment {
    fn write_fields(&self, fields: &mut Fields, settings: &Settings) {
        fields.push_opt("horizontalOrigin", self.horizontal_origin.as_ref(), settings);
        fields.push_opt("verticalOrigin", self.vertical_origin.as_ref(), settings);
    }
}

impl Capability for Alignment {
    const NAME: &'static str = "Alignment";
    const KNOWN_PROPERTIES: &'static [&'static str] = &["horizontalOrigin", "verticalOrigin"];
}

pub trait AlignedProperty {
    fn horizontal_origin(&self) -> Option<HorizontalOrigin>;
    fn vertical_origin(&self) -> Option<VerticalOrigin>;
}

impl<T: HasCapability<Alignment>> AlignedProperty for T {
    fn horizontal_origin(&self) -> Option<HorizontalOrigin> {
        HasCapability::<Alignment>::capability(self).horizontal_origin()
    }

    fn vertical_origin(&self) -> Option<VerticalOrigin> {
        HasCapability::<Alignment>::capability(self).vertical_origin()
    }
}

pub trait AlignedBuilder: Sized {
    fn horizontal_origin(self, origin: HorizontalOrigin) -> Self;
    fn vertical_origin(self, origin: VerticalOrigin) -> Self;
}

impl<T: BuildsCapability<Alignment>> AlignedBuilder for T {
    fn horizontal_origin(mut self, origin: HorizontalOrigin) -> Self {
        self.capability_mut().horizontal_origin = Some(origin);
        self
    }

    fn vertical_origin(mut self, origin: VerticalOrigin) -> Self {
        self.capability_mut().vertical_origin = Some(origin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_alignment() {
        let a = Alignment::new(None, Some(VerticalOrigin::Bottom));
        let mut fields = Fields::new();
        a.write_fields(&mut fields, &Settings::default());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("verticalOrigin"), Some(&json!("BOTTOM")));
        assert_eq!(fields.get("horizontalOrigin"), None);
    }
}
