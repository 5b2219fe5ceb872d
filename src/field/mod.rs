//! Field capability and composition types.
//!
//! A [`Field`] is a named input owned by a [`Collection`](crate::Collection). It
//! accepts raw values, validates itself against the collection and exports a
//! value. [`InputField`] is the general-purpose implementation; any type that
//! implements the trait can be registered.
//!
//! # Example
//!
//! ```rust
//! use fieldset::{Collection, FieldSet, InputField, Rules};
//!
//! fn address_fields() -> FieldSet {
//!     FieldSet::group(vec![
//!         FieldSet::field(InputField::new("street").required()),
//!         FieldSet::field(InputField::new("zip").rule(Rules::integer())),
//!     ])
//! }
//!
//! let collection = Collection::with_fields(vec![
//!     FieldSet::field(InputField::new("name").required()),
//!     address_fields(),
//! ])
//! .unwrap();
//!
//! assert_eq!(collection.len(), 3);
//! ```

mod input;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::validation::ValidationContext;

pub use input::InputField;

/// A named input with validation and export behavior.
///
/// The `Send + Sync` bounds let a finished collection move between threads.
pub trait Field: Send + Sync {
    /// The canonical name the field is registered and exported under.
    fn name(&self) -> &str;

    /// Alternate identifiers that resolve to this field.
    fn aliases(&self) -> &[String];

    /// Accepts one raw value. Called once per element, in submission order.
    fn add_value(&mut self, value: Value);

    /// Validates the accepted values, recording failures on `ctx`.
    ///
    /// Returns the number of errors this call added.
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> usize;

    /// Returns the value to export for this field.
    fn export_value(&self) -> Value;

    /// Returns the policy controlling whether the field appears in exports.
    fn export_handler(&self) -> &ExportHandler;
}

/// A function that turns a field's accepted values into its exported value.
pub type ExportFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Per-field export policy.
#[derive(Clone, Default)]
pub enum ExportHandler {
    /// Export the field's value as-is.
    #[default]
    Value,
    /// Leave the field out of [`Collection::export_values`](crate::Collection::export_values).
    Skip,
    /// Export the result of a custom function over the accepted values.
    Custom(ExportFn),
}

impl ExportHandler {
    /// Wraps a closure as a custom export handler.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        ExportHandler::Custom(Arc::new(f))
    }

    /// Returns true for the [`ExportHandler::Skip`] sentinel.
    pub fn is_skip(&self) -> bool {
        matches!(self, ExportHandler::Skip)
    }
}

impl fmt::Debug for ExportHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportHandler::Value => write!(f, "Value"),
            ExportHandler::Skip => write!(f, "Skip"),
            ExportHandler::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A field, or a nested group of fields, to register.
///
/// Groups let helper functions return reusable field sets that compose without
/// the caller flattening them by hand.
pub enum FieldSet {
    /// A single field.
    Single(Box<dyn Field>),
    /// An ordered group of nested sets.
    Group(Vec<FieldSet>),
}

impl FieldSet {
    /// Wraps a single field.
    pub fn field<F: Field + 'static>(field: F) -> Self {
        FieldSet::Single(Box::new(field))
    }

    /// Wraps an ordered group of sets.
    pub fn group(sets: Vec<FieldSet>) -> Self {
        FieldSet::Group(sets)
    }

    /// Flattens the set depth-first, preserving order.
    pub fn flatten(self) -> Vec<Box<dyn Field>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Box<dyn Field>>) {
        match self {
            FieldSet::Single(field) => out.push(field),
            FieldSet::Group(sets) => {
                for set in sets {
                    set.flatten_into(out);
                }
            }
        }
    }
}

impl From<Box<dyn Field>> for FieldSet {
    fn from(field: Box<dyn Field>) -> Self {
        FieldSet::Single(field)
    }
}

impl From<Vec<FieldSet>> for FieldSet {
    fn from(sets: Vec<FieldSet>) -> Self {
        FieldSet::Group(sets)
    }
}

impl From<InputField> for FieldSet {
    fn from(field: InputField) -> Self {
        FieldSet::field(field)
    }
}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSet::Single(field) => f.debug_tuple("Single").field(&field.name()).finish(),
            FieldSet::Group(sets) => f.debug_tuple("Group").field(sets).finish(),
        }
    }
}
