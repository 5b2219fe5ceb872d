//! Tests for field registration and alias resolution.

use fieldset::{Collection, CollectionError, Field, FieldSet, InputField};

fn contact_fields() -> FieldSet {
    FieldSet::group(vec![
        FieldSet::field(InputField::new("email").alias("e")),
        FieldSet::field(InputField::new("phone").alias("tel").alias("p")),
    ])
}

#[test]
fn test_duplicate_field_name_fails() {
    let mut collection = Collection::new();
    collection.add_field(InputField::new("email")).unwrap();

    let result = collection.add_field(InputField::new("email"));
    assert_eq!(
        result,
        Err(CollectionError::DuplicateFieldName("email".to_string()))
    );
}

#[test]
fn test_name_colliding_with_alias_fails() {
    let mut collection = Collection::new();
    collection
        .add_field(InputField::new("email").alias("e"))
        .unwrap();

    let result = collection.add_field(InputField::new("e"));
    assert_eq!(
        result,
        Err(CollectionError::DuplicateFieldName("e".to_string()))
    );
}

#[test]
fn test_alias_colliding_with_name_fails() {
    let mut collection = Collection::new();
    collection.add_field(InputField::new("email")).unwrap();

    let result = collection.add_field(InputField::new("mail").alias("email"));
    assert_eq!(
        result,
        Err(CollectionError::DuplicateAlias {
            alias: "email".to_string(),
            field: "mail".to_string(),
        })
    );
}

#[test]
fn test_alias_colliding_with_alias_fails() {
    let mut collection = Collection::new();
    collection
        .add_field(InputField::new("email").alias("e"))
        .unwrap();

    let result = collection.add_field(InputField::new("extra").alias("e"));
    assert!(matches!(
        result,
        Err(CollectionError::DuplicateAlias { ref alias, .. }) if alias == "e"
    ));
}

#[test]
fn test_with_fields_reports_duplicates() {
    let result = Collection::with_fields(vec![
        FieldSet::field(InputField::new("a")),
        FieldSet::field(InputField::new("a")),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_add_fields_flattens_groups_in_order() {
    let collection = Collection::with_fields(vec![
        FieldSet::field(InputField::new("name")),
        contact_fields(),
        FieldSet::group(vec![FieldSet::group(vec![FieldSet::field(
            InputField::new("zip"),
        )])]),
    ])
    .unwrap();

    let names: Vec<&str> = collection.field_names().collect();
    assert_eq!(names, vec!["name", "email", "phone", "zip"]);
    assert_eq!(collection.alias_count(), 7);
}

#[test]
fn test_add_fields_stops_at_first_error() {
    let mut collection = Collection::new();
    let result = collection.add_fields(vec![
        FieldSet::field(InputField::new("a")),
        FieldSet::field(InputField::new("a")),
        FieldSet::field(InputField::new("b")),
    ]);

    assert!(result.is_err());
    assert_eq!(collection.len(), 1);
    assert!(collection.get_field("b").is_none());
}

#[test]
fn test_get_field_resolves_aliases() {
    let collection = Collection::with_fields(vec![contact_fields()]).unwrap();

    assert_eq!(collection.get_field("tel").unwrap().name(), "phone");
    assert_eq!(collection.get_field("p").unwrap().name(), "phone");
    assert_eq!(collection.get_field("e").unwrap().name(), "email");
    assert_eq!(collection.get_field("email").unwrap().name(), "email");
}

#[test]
fn test_get_field_unknown_name_is_none() {
    let collection = Collection::with_fields(vec![contact_fields()]).unwrap();
    assert!(collection.get_field("fax").is_none());
    assert!(collection.get_field("").is_none());
}

#[test]
fn test_aliases_iterator_lists_every_identifier() {
    let collection = Collection::with_fields(vec![contact_fields()]).unwrap();

    let pairs: Vec<(&str, &str)> = collection.aliases().collect();
    assert_eq!(
        pairs,
        vec![
            ("email", "email"),
            ("e", "email"),
            ("phone", "phone"),
            ("tel", "phone"),
            ("p", "phone"),
        ]
    );
}

#[test]
fn test_boxed_field_registration() {
    let boxed: Box<dyn Field> = Box::new(InputField::new("boxed").alias("b"));
    let mut collection = Collection::new();
    collection.add_boxed_field(boxed).unwrap();

    assert_eq!(collection.resolve("b"), Some("boxed"));
}
