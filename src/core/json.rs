//! The serialization contract shared by every leaf and composite.

use serde::Serialize;

use crate::util::{Result, Settings, MAX_INDENT};

pub use serde_json::{Map as JsonMap, Value as JsonValue};

/// Anything that renders itself to a JSON-compatible value.
///
/// Rendering is total: a constructed object always produces a value.
/// Only the text encoding in [`ToJson::dumps_with`] can fail.
pub trait ToJson {
    /// Render using explicit settings. Composites pass `settings` on to
    /// every nested value.
    fn to_json_with(&self, settings: &Settings) -> JsonValue;

    /// Render with default settings.
    fn to_json(&self) -> JsonValue {
        self.to_json_with(&Settings::default())
    }

    /// Encode as JSON text with default settings (4-space indent).
    fn dumps(&self) -> Result<String> {
        self.dumps_with(&Settings::default())
    }

    /// Encode as JSON text. `settings.indent == 0` writes a single line.
    fn dumps_with(&self, settings: &Settings) -> Result<String> {
        encode(&self.to_json_with(settings), settings.indent)
    }
}

/// Encode a JSON value as text with the given indentation width.
///
/// Widths above [`MAX_INDENT`] are clamped.
pub fn encode(value: &JsonValue, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = vec![b' '; indent.min(MAX_INDENT)];
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

// ============================================================================
// Primitive impls
// ============================================================================

impl ToJson for bool {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

macro_rules! impl_to_json_number {
    ($($t:ty),*) => {
        $(
            impl ToJson for $t {
                fn to_json_with(&self, _settings: &Settings) -> JsonValue {
                    JsonValue::from(*self)
                }
            }
        )*
    };
}

impl_to_json_number!(i32, i64, u32, u64);

/// Non-finite values render as `null`; containers reject them at construction.
impl ToJson for f64 {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::from(*self)
    }
}

impl ToJson for str {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::String(self.to_owned())
    }
}

impl ToJson for String {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl ToJson for JsonValue {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        self.clone()
    }
}

// ============================================================================
// Containers
// ============================================================================

impl<T: ToJson> ToJson for [T] {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        JsonValue::Array(self.iter().map(|item| item.to_json_with(settings)).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        self.as_slice().to_json_with(settings)
    }
}

/// `None` renders as `null`. Composites never reach this path for absent
/// fields; they omit them instead.
impl<T: ToJson> ToJson for Option<T> {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        match self {
            Some(value) => value.to_json_with(settings),
            None => JsonValue::Null,
        }
    }
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        (**self).to_json_with(settings)
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        (**self).to_json_with(settings)
    }
}
