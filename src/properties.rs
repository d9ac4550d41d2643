//! Concrete composite properties.
//!
//! Each type here is one declaration: a value slot plus the capabilities
//! the format allows on it. Everything else comes from
//! [`composite_property!`](crate::composite_property).

use crate::capability::{Alignment, Deletable, Interpolatable};
use crate::composite_property;
use crate::values::{Cartesian3Value, NumberLeaf, StringLeaf};

composite_property! {
    /// Position of an object as a Cartesian value, optionally time-tagged.
    pub struct Position builder PositionBuilder {
        value { cartesian("cartesian"): Cartesian3Value }
        capabilities { deletable: Deletable, interpolatable: Interpolatable }
    }
}

composite_property! {
    /// A string value. The string can optionally vary with time.
    pub struct StringValue builder StringValueBuilder {
        value { string("string"): StringLeaf }
        capabilities { deletable: Deletable }
    }
}

composite_property! {
    /// A numeric value.
    pub struct NumberValue builder NumberValueBuilder {
        value { number("number"): NumberLeaf }
        capabilities { deletable: Deletable }
    }
}

composite_property! {
    /// A text label anchored relative to its position.
    pub struct Label builder LabelBuilder {
        value { text("text"): StringValue }
        capabilities { alignment: Alignment }
    }
}

composite_property! {
    /// Interpolation settings with no value of their own.
    pub struct Interpolation builder InterpolationBuilder {
        capabilities { interpolatable: Interpolatable }
    }
}

impl From<Cartesian3Value> for Position {
    fn from(cartesian: Cartesian3Value) -> Self {
        Self {
            cartesian: Some(cartesian),
            ..Self::default()
        }
    }
}

impl StringValue {
    /// A plain string with no capability fields.
    pub fn new(value: impl Into<StringLeaf>) -> Self {
        Self {
            string: Some(value.into()),
            ..Self::default()
        }
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<NumberLeaf> for NumberValue {
    fn from(number: NumberLeaf) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }
}
