//! Three-dimensional Cartesian values, constant or time-tagged.

use glam::DVec3;
use smallvec::SmallVec;

use crate::core::{JsonValue, TimeValue, ToJson};
use crate::util::{Error, Result, Settings};

/// Length of a constant value: `[X, Y, Z]`.
pub const CONSTANT_LEN: usize = 3;

/// Length of one time-tagged sample: `[Time, X, Y, Z]`.
pub const SAMPLE_LEN: usize = 4;

/// One raw element of a value container.
///
/// Elements are emitted exactly as given: integers stay integers,
/// floats stay floats and time strings are not reformatted.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Int(i64),
    Float(f64),
    /// ISO-8601 time tag.
    Time(String),
}

impl Element {
    /// Numeric value, if this element is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Time(_) => None,
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            _ => true,
        }
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Element {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f32> for Element {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Self::Time(v.to_owned())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Self::Time(v)
    }
}

impl From<TimeValue> for Element {
    fn from(v: TimeValue) -> Self {
        match v {
            TimeValue::Iso8601(s) => Self::Time(s),
            TimeValue::Seconds(s) => Self::Float(s),
        }
    }
}

impl ToJson for Element {
    fn to_json_with(&self, _settings: &Settings) -> JsonValue {
        match self {
            Self::Int(v) => JsonValue::from(*v),
            Self::Float(v) => JsonValue::from(*v),
            Self::Time(s) => JsonValue::String(s.clone()),
        }
    }
}

/// Check a raw sequence length against the two accepted shapes.
pub fn validate_shape(len: usize) -> Result<()> {
    if len == CONSTANT_LEN || (len > 0 && len % SAMPLE_LEN == 0) {
        Ok(())
    } else {
        tracing::debug!(len, "rejecting value container shape");
        Err(Error::Shape { len })
    }
}

/// One sample of a [`Cartesian3Value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<'a> {
    /// Time tag; `None` for a constant value.
    pub time: Option<&'a Element>,
    /// `[X, Y, Z]`.
    pub coords: &'a [Element],
}

/// A three-dimensional Cartesian value specified as `[X, Y, Z]`.
///
/// Three elements make a constant value. Any positive multiple of four
/// makes time-tagged samples `[Time, X, Y, Z, Time, X, Y, Z, ...]`, where
/// Time is an ISO-8601 string or seconds since epoch.
#[derive(Clone, Debug, PartialEq)]
pub struct Cartesian3Value {
    values: SmallVec<[Element; 4]>,
}

impl Cartesian3Value {
    /// Validate and wrap a raw sequence.
    pub fn new<I, E>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let values: SmallVec<[Element; 4]> = values.into_iter().map(Into::into).collect();
        validate_shape(values.len())?;

        if let Some(index) = values.iter().position(|e| !e.is_finite()) {
            tracing::debug!(index, "rejecting non-finite element");
            return Err(Error::NonFiniteElement { index });
        }

        Ok(Self { values })
    }

    /// Constant value from a vector.
    pub fn constant(v: DVec3) -> Result<Self> {
        Self::new(v.to_array())
    }

    /// Time-tagged samples from `(time, vector)` pairs.
    pub fn time_tagged<I, T>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, DVec3)>,
        T: Into<TimeValue>,
    {
        let mut values = Vec::new();
        for (time, v) in samples {
            let time: TimeValue = time.into();
            values.push(Element::from(time));
            values.extend(v.to_array().map(Element::Float));
        }
        Self::new(values)
    }

    /// The validated raw sequence.
    pub fn values(&self) -> &[Element] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True for a single `[X, Y, Z]` value.
    pub fn is_constant(&self) -> bool {
        self.values.len() == CONSTANT_LEN
    }

    /// Number of samples (1 for a constant value).
    pub fn num_samples(&self) -> usize {
        if self.is_constant() {
            1
        } else {
            self.values.len() / SAMPLE_LEN
        }
    }

    /// Iterate over samples in order.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> + '_ {
        let tagged = !self.is_constant();
        let stride = if tagged { SAMPLE_LEN } else { CONSTANT_LEN };

        self.values.chunks_exact(stride).map(move |chunk| {
            if tagged {
                Sample {
                    time: Some(&chunk[0]),
                    coords: &chunk[1..],
                }
            } else {
                Sample {
                    time: None,
                    coords: chunk,
                }
            }
        })
    }

    /// The constant value as a vector; `None` for time-tagged values.
    pub fn as_vec3(&self) -> Option<DVec3> {
        if !self.is_constant() {
            return None;
        }
        Some(DVec3::new(
            self.values[0].as_f64()?,
            self.values[1].as_f64()?,
            self.values[2].as_f64()?,
        ))
    }
}

impl ToJson for Cartesian3Value {
    fn to_json_with(&self, settings: &Settings) -> JsonValue {
        self.values.as_slice().to_json_with(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constant() {
        let v = Cartesian3Value::new([1, 2, 3]).unwrap();
        assert!(v.is_constant());
        assert_eq!(v.num_samples(), 1);
        assert_eq!(v.to_json(), json!([1, 2, 3]));
        assert_eq!(v.as_vec3(), Some(DVec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_time_tagged() {
        let v = Cartesian3Value::new([0, 1, 2, 3, 1, 4, 5, 6]).unwrap();
        assert!(!v.is_constant());
        assert_eq!(v.num_samples(), 2);
        assert_eq!(v.as_vec3(), None);

        let samples: Vec<Sample<'_>> = v.samples().collect();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].time, Some(&Element::Int(1)));
        assert_eq!(samples[1].coords, &[Element::Int(4), Element::Int(5), Element::Int(6)]);
    }

    #[test]
    fn test_shape_errors() {
        for len in [0usize, 1, 2, 5, 6, 7, 9, 10, 11] {
            let err = Cartesian3Value::new(vec![0.5f64; len]).unwrap_err();
            assert!(matches!(err, Error::Shape { len: l } if l == len), "len {len}");
        }
        for len in [3usize, 4, 8, 12, 400] {
            assert!(Cartesian3Value::new(vec![0.5f64; len]).is_ok(), "len {len}");
        }
    }

    #[test]
    fn test_mixed_elements_pass_through() {
        let v = Cartesian3Value::new(vec![
            Element::from("2012-08-04T16:00:00Z"),
            Element::from(1.5),
            Element::from(2),
            Element::from(-3.25f32),
        ])
        .unwrap();
        assert_eq!(v.to_json(), json!(["2012-08-04T16:00:00Z", 1.5, 2, -3.25]));
        assert_eq!(v.samples().next().unwrap().time, Some(&Element::Time("2012-08-04T16:00:00Z".into())));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Cartesian3Value::new([1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteElement { index: 1 }));
    }

    #[test]
    fn test_typed_constructors() {
        let v = Cartesian3Value::constant(DVec3::new(1.0, 0.5, -2.0)).unwrap();
        assert_eq!(v.to_json(), json!([1.0, 0.5, -2.0]));

        let v = Cartesian3Value::time_tagged([
            (TimeValue::from(0.0), DVec3::ZERO),
            (TimeValue::from(60.0), DVec3::X),
        ])
        .unwrap();
        assert_eq!(v.len(), 8);
        assert_eq!(v.to_json(), json!([0.0, 0.0, 0.0, 0.0, 60.0, 1.0, 0.0, 0.0]));

        let empty: [(f64, DVec3); 0] = [];
        assert!(matches!(Cartesian3Value::time_tagged(empty), Err(Error::Shape { len: 0 })));
    }
}
