//! Scalar leaves: a single string or number.
//!
//! A leaf renders as the bare primitive. Composites holding a leaf decide
//! whether it is wrapped in an object.

use serde_json::Number;

use crate::core::{JsonValue, ToJson};
use crate::util::{Error, Result, Settings};

/// A string value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringLeaf(String);

impl StringLeaf {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringLeaf {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for StringLeaf {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl ToJson for StringLeaf {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::String(self.0.clone())
    }
}

/// A finite number, kept in its given integer or float form.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberLeaf(Number);

impl NumberLeaf {
    /// Wrap a float, rejecting NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(Self)
            .ok_or(Error::NonFiniteNumber { field: "number" })
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl TryFrom<f64> for NumberLeaf {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

macro_rules! impl_number_leaf_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberLeaf {
                fn from(value: $t) -> Self {
                    Self(Number::from(value))
                }
            }
        )*
    };
}

impl_number_leaf_from!(i32, i64, u32, u64);

impl ToJson for NumberLeaf {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::Number(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_leaf() {
        let s = StringLeaf::from("x");
        assert_eq!(s.as_str(), "x");
        assert_eq!(s.to_json(), json!("x"));
    }

    #[test]
    fn test_number_leaf() {
        assert_eq!(NumberLeaf::from(3).to_json(), json!(3));
        assert_eq!(NumberLeaf::try_from(2.5).unwrap().to_json(), json!(2.5));
        assert_eq!(NumberLeaf::from(7u64).as_f64(), 7.0);
        assert!(matches!(
            NumberLeaf::try_from(f64::INFINITY),
            Err(Error::NonFiniteNumber { field: "number" })
        ));
    }
}
