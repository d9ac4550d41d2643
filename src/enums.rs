//! String-valued enumerations of the CZML schema.
//!
//! These are consumed as opaque tokens: each variant renders as its
//! upper-case schema name and parses back from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{JsonValue, ToJson};
use crate::util::{Error, Result, Settings};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Schema token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(Error::invalid_token($kind, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToJson for $name {
            fn to_json_with(&self, _settings: &Settings) -> JsonValue {
                JsonValue::String(self.as_str().to_owned())
            }
        }
    };
}

token_enum! {
    /// How consumers interpolate between time-tagged samples.
    InterpolationAlgorithm("interpolation algorithm") {
        /// Linear interpolation.
        Linear => "LINEAR",
        /// Lagrange polynomial approximation.
        Lagrange => "LAGRANGE",
        /// Hermite polynomial approximation.
        Hermite => "HERMITE",
    }
}

impl Default for InterpolationAlgorithm {
    fn default() -> Self {
        Self::Linear
    }
}

token_enum! {
    /// Horizontal anchor of an object relative to its position.
    HorizontalOrigin("horizontal origin") {
        /// The origin is at the left side of the object.
        Left => "LEFT",
        /// The origin is at the horizontal center of the object.
        Center => "CENTER",
        /// The origin is at the right side of the object.
        Right => "RIGHT",
    }
}

token_enum! {
    /// Vertical anchor of an object relative to its position.
    VerticalOrigin("vertical origin") {
        /// The origin is at the baseline of the text.
        Baseline => "BASELINE",
        /// The origin is at the bottom of the object.
        Bottom => "BOTTOM",
        /// The origin is at the vertical center of the object.
        Center => "CENTER",
        /// The origin is at the top of the object.
        Top => "TOP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tokens_roundtrip() {
        for alg in InterpolationAlgorithm::ALL {
            assert_eq!(alg.as_str().parse::<InterpolationAlgorithm>().unwrap(), *alg);
        }
        for origin in VerticalOrigin::ALL {
            assert_eq!(origin.to_string().parse::<VerticalOrigin>().unwrap(), *origin);
        }
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(InterpolationAlgorithm::default(), InterpolationAlgorithm::Linear);
    }

    #[test]
    fn test_invalid_token() {
        let err = "center".parse::<HorizontalOrigin>().unwrap_err();
        assert!(matches!(err, Error::InvalidToken { kind: "horizontal origin", .. }));
    }

    #[test]
    fn test_json_forms() {
        assert_eq!(HorizontalOrigin::Right.to_json(), json!("RIGHT"));
        assert_eq!(serde_json::to_value(InterpolationAlgorithm::Hermite).unwrap(), json!("HERMITE"));
        let parsed: VerticalOrigin = serde_json::from_value(json!("BASELINE")).unwrap();
        assert_eq!(parsed, VerticalOrigin::Baseline);
    }
}
