//! Tests for error aggregation on a collection.

use fieldset::{Collection, FieldSet, InputField, ValidationError, ValidationErrors};
use serde_json::{json, Value};
use stillwater::prelude::*;

fn error(message: &str, field: &str) -> ValidationError {
    ValidationError::new(message, Value::Null, field, 0)
}

fn messages(collection: &Collection) -> Vec<&str> {
    collection
        .validation_errors()
        .iter()
        .map(|e| e.message())
        .collect()
}

#[test]
fn test_add_validation_error_returns_total() {
    let mut collection = Collection::new();

    assert_eq!(collection.add_validation_error(error("one", "a")), 1);
    assert_eq!(collection.add_validation_error(error("two", "b")), 2);
    assert_eq!(collection.add_validation_error_front(error("zero", "a")), 3);
    assert_eq!(collection.validation_error_count(), 3);
}

#[test]
fn test_front_inserted_errors_come_first() {
    let mut collection = Collection::new();
    collection.add_validation_error(error("one", "a"));
    collection.add_validation_error(error("two", "b"));
    collection.add_validation_error_front(error("urgent", "c"));

    assert_eq!(messages(&collection), vec!["urgent", "one", "two"]);
}

#[test]
fn test_errors_for_field_preserve_relative_order() {
    let mut collection = Collection::new();
    collection.add_validation_error(error("a1", "a"));
    collection.add_validation_error(error("b1", "b"));
    collection.add_validation_error(error("a2", "a"));
    collection.add_validation_error_front(error("a0", "a"));

    let for_a: Vec<&str> = collection
        .validation_errors_for("a")
        .iter()
        .map(|e| e.message())
        .collect();
    assert_eq!(for_a, vec!["a0", "a1", "a2"]);
}

#[test]
fn test_errors_for_unmatched_name_is_empty() {
    let mut collection = Collection::new();
    collection.add_validation_error(error("a1", "a"));

    assert!(collection.validation_errors_for("zzz").is_empty());
}

#[test]
fn test_has_validation_errors() {
    let mut collection = Collection::new();
    assert!(!collection.has_validation_errors());

    collection.add_validation_error(error("x", "a"));
    assert!(collection.has_validation_errors());
}

#[test]
fn test_intake_and_field_errors_interleave_in_order() {
    let mut collection =
        Collection::with_fields(vec![FieldSet::field(InputField::new("name").required())])
            .unwrap();
    collection.add_values([("ghost", json!("x"))]);
    collection.validate();

    assert_eq!(messages(&collection), vec!["unknown parameter", "value is required"]);
}

#[test]
fn test_errors_combine_into_validation_errors() {
    let left = ValidationErrors::single(error("first", "a"));
    let right = ValidationErrors::from_vec(vec![error("second", "b"), error("third", "a")])
        .expect("non-empty");

    let combined = left.combine(right);
    assert_eq!(combined.len(), 3);
    assert_eq!(combined.for_field("a").len(), 2);

    let as_json = combined.to_json();
    assert_eq!(as_json[1]["field"], json!("b"));
}
