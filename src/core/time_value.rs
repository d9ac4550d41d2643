//! Time values used for sample tags and epochs.
//!
//! Times are carried verbatim: an ISO-8601 string or a number of seconds
//! since an epoch. Nothing here parses or normalizes them.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::{JsonValue, ToJson};
use crate::util::{Result, Settings};

/// A time tag or epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// ISO-8601 date and time string.
    Iso8601(String),

    /// Seconds since the governing epoch.
    Seconds(f64),
}

impl TimeValue {
    /// Wrap a pre-formatted ISO-8601 string.
    pub fn iso8601(value: impl Into<String>) -> Self {
        Self::Iso8601(value.into())
    }

    /// Seconds since epoch.
    pub fn seconds(value: f64) -> Self {
        Self::Seconds(value)
    }

    /// Format a date/time as an RFC 3339 (ISO-8601) string.
    pub fn from_datetime(datetime: OffsetDateTime) -> Result<Self> {
        Ok(Self::Iso8601(datetime.format(&Rfc3339)?))
    }

    /// False for NaN or infinite seconds, which JSON cannot carry.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Iso8601(_) => true,
            Self::Seconds(s) => s.is_finite(),
        }
    }

    pub fn as_iso8601(&self) -> Option<&str> {
        match self {
            Self::Iso8601(s) => Some(s),
            Self::Seconds(_) => None,
        }
    }

    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            Self::Iso8601(_) => None,
            Self::Seconds(s) => Some(*s),
        }
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self::Iso8601(value.to_owned())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        Self::Iso8601(value)
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        Self::Seconds(value)
    }
}

impl ToJson for TimeValue {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        match self {
            Self::Iso8601(s) => JsonValue::String(s.clone()),
            Self::Seconds(s) => JsonValue::from(*s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_passthrough() {
        let t = TimeValue::from("2012-08-04T16:00:00Z");
        assert_eq!(t.as_iso8601(), Some("2012-08-04T16:00:00Z"));
        assert_eq!(t.to_json(), json!("2012-08-04T16:00:00Z"));

        let t = TimeValue::from(3600.0);
        assert_eq!(t.as_seconds(), Some(3600.0));
        assert_eq!(t.to_json(), json!(3600.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(TimeValue::iso8601("not checked").is_finite());
        assert!(TimeValue::seconds(-1.5).is_finite());
        assert!(!TimeValue::seconds(f64::NAN).is_finite());
        assert!(!TimeValue::from(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_from_datetime() {
        let t = TimeValue::from_datetime(datetime!(2019-06-11 12:26:58 UTC)).unwrap();
        assert_eq!(t, TimeValue::iso8601("2019-06-11T12:26:58Z"));
    }

    #[test]
    fn test_serde_untagged() {
        let t: TimeValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(t, TimeValue::Seconds(12.5));
        assert_eq!(serde_json::to_string(&TimeValue::iso8601("x")).unwrap(), "\"x\"");
    }
}
