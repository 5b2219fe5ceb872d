//! Tests for routing raw values into fields.

use fieldset::{
    Collection, CollectionError, FieldSet, InputField, UnknownParameters, UNKNOWN_PARAMETER,
};
use serde_json::{json, Value};

fn collection() -> Collection {
    Collection::with_fields(vec![
        FieldSet::field(InputField::new("email").alias("e")),
        FieldSet::field(InputField::new("tags").multiple()),
    ])
    .unwrap()
}

#[test]
fn test_unknown_parameter_records_error_per_value() {
    let mut collection = collection();
    collection.add_values([("ghost", json!([1, 2, 3]))]);

    let errors = collection.validation_errors();
    assert_eq!(errors.len(), 3);
    for (i, error) in errors.iter().enumerate() {
        assert_eq!(error.message(), UNKNOWN_PARAMETER);
        assert_eq!(error.message(), "unknown parameter");
        assert_eq!(error.field_name(), "ghost");
        assert_eq!(error.index(), i);
        assert_eq!(error.value(), &json!(i + 1));
    }
}

#[test]
fn test_unknown_scalar_records_single_error() {
    let mut collection = collection();
    collection.add_values([("ghost", json!("boo"))]);

    let errors = collection.validation_errors_for("ghost");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index(), 0);
    assert_eq!(errors[0].value(), &json!("boo"));
}

#[test]
fn test_unknown_empty_array_records_nothing() {
    let mut collection = collection();
    collection.add_values([("ghost", json!([]))]);

    assert!(!collection.has_validation_errors());
}

#[test]
fn test_values_routed_through_alias() {
    let mut collection = collection();
    collection.add_values([("e", json!("a@b.com"))]);

    assert!(!collection.has_validation_errors());
    assert_eq!(
        collection.export_field_value("email").unwrap(),
        json!("a@b.com")
    );
}

#[test]
fn test_sequence_values_forwarded_in_order() {
    let mut collection = collection();
    collection.add_values([("tags", json!(["a", "b"])), ("tags", json!("c"))]);

    assert_eq!(
        collection.export_field_value("tags").unwrap(),
        json!(["a", "b", "c"])
    );
}

#[test]
fn test_null_is_a_single_value() {
    let mut collection = collection();
    collection.add_values([("tags", Value::Null)]);

    assert_eq!(
        collection.export_field_value("tags").unwrap(),
        json!([null])
    );
}

#[test]
fn test_mixed_known_and_unknown_input() {
    let mut collection = collection();
    collection.add_values(vec![
        ("email".to_string(), json!("a@b.com")),
        ("x".to_string(), json!(1)),
        ("y".to_string(), json!(["p", "q"])),
    ]);

    let names: Vec<&str> = collection
        .validation_errors()
        .iter()
        .map(|e| e.field_name())
        .collect();
    assert_eq!(names, vec!["x", "y", "y"]);
}

#[test]
fn test_ignore_policy_drops_unknown_parameters() {
    let mut collection = collection().with_unknown_parameters(UnknownParameters::Ignore);
    collection.add_values([("ghost", json!([1, 2, 3])), ("email", json!("a@b.com"))]);

    assert!(!collection.has_validation_errors());
    assert!(collection.validate());
}

#[test]
fn test_add_json_preserves_key_order() {
    let mut collection = collection();
    collection
        .add_json(json!({"zeta": 1, "alpha": 2, "email": "a@b.com"}))
        .unwrap();

    let names: Vec<&str> = collection
        .validation_errors()
        .iter()
        .map(|e| e.field_name())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn test_add_json_rejects_non_object() {
    let mut collection = collection();
    let result = collection.add_json(json!([1, 2]));

    assert_eq!(
        result,
        Err(CollectionError::InvalidArgument(
            "expected object, got array".to_string()
        ))
    );
}
