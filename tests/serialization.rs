//! Integration tests for composite properties and their JSON output.

use czml::prelude::*;
use czml::values::validate_shape;
use serde_json::json;

fn compact(value: &impl ToJson) -> String {
    value.dumps_with(&Settings::compact()).expect("encode")
}

#[test]
fn test_constant_value_serializes_as_array() {
    let v = Cartesian3Value::new([1, 2, 3]).expect("valid shape");
    assert_eq!(v.to_json(), json!([1, 2, 3]));
}

#[test]
fn test_time_tagged_value_serializes_flat() {
    let v = Cartesian3Value::new([0, 1, 2, 3, 1, 4, 5, 6]).expect("valid shape");
    assert_eq!(v.num_samples(), 2);
    assert_eq!(v.to_json(), json!([0, 1, 2, 3, 1, 4, 5, 6]));
}

#[test]
fn test_short_value_is_shape_error() {
    let err = Cartesian3Value::new([1, 2]).unwrap_err();
    assert!(matches!(err, Error::Shape { len: 2 }));
    assert!(err.to_string().contains("length 2"));
}

#[test]
fn test_shape_grid() {
    for len in 1..=64usize {
        let expected = len == 3 || len % 4 == 0;
        assert_eq!(validate_shape(len).is_ok(), expected, "len {}", len);

        let values: Vec<i64> = (0..len as i64).collect();
        assert_eq!(Cartesian3Value::new(values).is_ok(), expected, "len {}", len);
    }
    assert!(validate_shape(0).is_err());
}

#[test]
fn test_constant_roundtrip_preserves_order() {
    let inputs: [[f64; 3]; 3] = [[0.0, -1.5, 2.25], [6378137.0, 0.0, 0.0], [3.0, 2.0, 1.0]];
    for input in inputs {
        let v = Cartesian3Value::new(input).expect("valid shape");
        assert_eq!(v.to_json(), json!(input));
    }
}

#[test]
fn test_deleted_string_value_emits_all_fields() {
    let s = StringValue::builder()
        .delete(true)
        .string("x")
        .build()
        .expect("build");

    assert_eq!(compact(&s), r#"{"delete":true,"string":"x"}"#);
    assert_eq!(s.delete(), Some(true));
    assert_eq!(s.string().map(StringLeaf::as_str), Some("x"));
}

#[test]
fn test_deleted_string_value_delete_only_policy() {
    let s = StringValue::builder()
        .string("x")
        .delete(true)
        .build()
        .expect("build");

    let settings = Settings {
        indent: 0,
        delete_policy: DeletePolicy::DeleteOnly,
    };
    assert_eq!(s.dumps_with(&settings).expect("encode"), r#"{"delete":true}"#);
}

#[test]
fn test_plain_string_value_is_bare() {
    let s = StringValue::new("hello");
    assert_eq!(s.to_json(), json!("hello"));
}

#[test]
fn test_trait_only_defaults_yield_empty_object() {
    let i = Interpolation::builder().build().expect("build");
    assert_eq!(i.interpolation_algorithm(), InterpolationAlgorithm::Linear);
    assert_eq!(i.epoch(), None);
    assert_eq!(i.to_json(), json!({}));
}

#[test]
fn test_absent_capabilities_emit_nothing() {
    let p = Position::builder()
        .cartesian(Cartesian3Value::new([1, 2, 3]).expect("valid shape"))
        .build()
        .expect("build");
    assert_eq!(p.to_json(), json!([1, 2, 3]));

    let text = compact(&p);
    assert!(!text.contains("null"));
    assert!(!text.contains("delete"));
}

#[test]
fn test_non_finite_epoch_fails_build() {
    let err = Position::builder()
        .cartesian(Cartesian3Value::new([1, 2, 3]).expect("valid shape"))
        .epoch(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::NonFiniteNumber { field: "epoch" }));

    let err = Interpolation::builder().epoch(f64::INFINITY).build().unwrap_err();
    assert!(matches!(err, Error::NonFiniteNumber { field: "epoch" }));

    let err = Position::builder()
        .interpolatable(Interpolatable::new().with_epoch(f64::NEG_INFINITY))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("epoch"));

    let ok = Interpolation::builder().epoch(-30.0).build().expect("finite epoch");
    assert_eq!(compact(&ok), r#"{"epoch":-30.0}"#);
}

#[test]
fn test_position_key_order() {
    let p = Position::builder()
        .cartesian(Cartesian3Value::new([0, 1, 2, 3, 60, 4, 5, 6]).expect("valid shape"))
        .epoch("2012-08-04T16:00:00Z")
        .interpolation_algorithm(InterpolationAlgorithm::Lagrange)
        .build()
        .expect("build");

    assert_eq!(
        compact(&p),
        r#"{"cartesian":[0,1,2,3,60,4,5,6],"epoch":"2012-08-04T16:00:00Z","interpolationAlgorithm":"LAGRANGE"}"#
    );

    let deleted = Position::builder()
        .cartesian(Cartesian3Value::new([1, 2, 3]).expect("valid shape"))
        .epoch(0.0)
        .delete(true)
        .build()
        .expect("build");
    assert_eq!(compact(&deleted), r#"{"delete":true,"cartesian":[1,2,3],"epoch":0.0}"#);
}

#[test]
fn test_serialization_is_idempotent() {
    let p = Position::builder()
        .cartesian(Cartesian3Value::new([1.25, 2.5, 3.75]).expect("valid shape"))
        .delete(false)
        .epoch("2012-08-04T16:00:00Z")
        .build()
        .expect("build");

    let first = p.dumps().expect("encode");
    let second = p.dumps().expect("encode");
    assert_eq!(first, second);
    assert_eq!(p.to_json(), p.to_json());
}

#[test]
fn test_nested_composites_recurse() {
    let labels = vec![
        Label::builder()
            .text("A")
            .horizontal_origin(HorizontalOrigin::Left)
            .build()
            .expect("build"),
        Label::builder()
            .text(StringValue::builder().string("B").delete(true).build().expect("build"))
            .vertical_origin(VerticalOrigin::Baseline)
            .build()
            .expect("build"),
    ];

    assert_eq!(
        compact(&labels),
        r#"[{"text":"A","horizontalOrigin":"LEFT"},{"text":{"delete":true,"string":"B"},"verticalOrigin":"BASELINE"}]"#
    );

    let only = Settings {
        indent: 0,
        delete_policy: DeletePolicy::DeleteOnly,
    };
    assert_eq!(
        labels.dumps_with(&only).expect("encode"),
        r#"[{"text":"A","horizontalOrigin":"LEFT"},{"text":{"delete":true},"verticalOrigin":"BASELINE"}]"#
    );
}

#[test]
fn test_serde_and_display_agree_with_to_json() {
    let p = Position::from(Cartesian3Value::new([1, 2, 3]).expect("valid shape"));
    assert_eq!(serde_json::to_value(&p).expect("serde"), p.to_json());
    assert_eq!(p.to_string(), p.dumps().expect("encode"));
    println!("{}", p);
}

#[test]
fn test_composite_shared_across_threads() {
    let p = std::sync::Arc::new(
        Position::builder()
            .cartesian(Cartesian3Value::new([0, 1, 2, 3, 1, 4, 5, 6]).expect("valid shape"))
            .interpolation_algorithm(InterpolationAlgorithm::Hermite)
            .build()
            .expect("build"),
    );
    let expected = p.to_json();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || p.to_json())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}
