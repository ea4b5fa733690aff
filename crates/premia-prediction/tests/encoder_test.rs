use premia_core::errors::ValidationError;
use premia_core::FEATURE_FIELDS;
use premia_prediction::encode;
use serde_json::{json, Map, Value};

fn sample() -> Map<String, Value> {
    match json!({
        "age": 30,
        "bmi": 25.0,
        "children": 2,
        "sex_male": 1,
        "sex_female": 0,
        "smoker_yes": 0,
        "smoker_no": 1,
        "region_northwest": 1,
        "region_southeast": 0,
        "region_southwest": 0,
        "region_northeast": 0
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn sample_payload_encodes_in_schema_order() {
    let vector = encode(&sample()).unwrap();
    let values = vector.values();

    assert_eq!(vector.len(), 11);
    assert_eq!(values[0], 30.0);
    assert_eq!(values[1], 25.0);
    assert!((values[2] - 3f64.ln()).abs() < 1e-12);
    assert!((values[2] - 1.0986).abs() < 1e-4);
    assert_eq!(&values[3..], &[1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn extra_keys_are_ignored() {
    let mut raw = sample();
    raw.insert("income".into(), json!("high"));
    raw.insert("id".into(), json!(42));
    assert_eq!(encode(&raw).unwrap(), encode(&sample()).unwrap());
}

#[test]
fn each_missing_field_is_named() {
    for field in FEATURE_FIELDS {
        let mut raw = sample();
        raw.remove(field);
        let err = encode(&raw).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field });
        assert_eq!(err.to_string(), format!("Invalid or missing value for '{field}'"));
    }
}

#[test]
fn null_counts_as_missing() {
    for field in FEATURE_FIELDS {
        let mut raw = sample();
        raw.insert(field.to_string(), Value::Null);
        assert_eq!(encode(&raw).unwrap_err(), ValidationError::Missing { field });
    }
}

#[test]
fn non_numeric_values_are_rejected_for_every_field() {
    let cases = [
        (json!("30"), "string"),
        (json!(true), "boolean"),
        (json!(false), "boolean"),
        (json!([1]), "array"),
        (json!({"value": 1}), "object"),
    ];
    for field in FEATURE_FIELDS {
        for (value, found) in &cases {
            let mut raw = sample();
            raw.insert(field.to_string(), value.clone());
            assert_eq!(
                encode(&raw).unwrap_err(),
                ValidationError::InvalidType {
                    field,
                    found: *found
                },
                "field {field} with {value}"
            );
        }
    }
}

#[test]
fn first_failing_field_in_schema_order_wins() {
    let mut raw = sample();
    raw.remove("region_northeast");
    raw.insert("bmi".into(), json!("heavy"));
    assert_eq!(encode(&raw).unwrap_err().field(), "bmi");
}

#[test]
fn children_at_or_below_minus_one_is_out_of_domain() {
    for bad in [-1.0, -2.5] {
        let mut raw = sample();
        raw.insert("children".into(), json!(bad));
        let err = encode(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfDomain {
                field: "children",
                value: bad
            }
        );
        assert_eq!(err.to_string(), "Invalid or missing value for 'children'");
    }
}

#[test]
fn only_children_is_transformed() {
    let mut raw = sample();
    raw.insert("age".into(), json!(0));
    raw.insert("children".into(), json!(0));
    let vector = encode(&raw).unwrap();
    assert_eq!(vector.get("age"), Some(0.0));
    assert_eq!(vector.get("children"), Some(0.0));
    assert_eq!(vector.get("bmi"), Some(25.0));
}
