//! Field validation error types.
//!
//! This module provides [`ValidationError`] for a single failed expectation about
//! one input value and [`ValidationErrors`] for a non-empty set of them.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

/// A single validation failure recorded against one value of one field.
///
/// `ValidationError` is plain data and is immutable once constructed:
/// - **message**: Human-readable description of the failure
/// - **value**: The raw value that failed validation
/// - **field_name**: The name the value was submitted under
/// - **index**: Position of the value for multi-valued input
///
/// # Example
///
/// ```rust
/// use fieldset::ValidationError;
/// use serde_json::json;
///
/// let error = ValidationError::new("must be numeric", json!("abc"), "age", 0);
///
/// assert_eq!(error.field_name(), "age");
/// assert_eq!(error.to_string(), "age: must be numeric (got: \"abc\")");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    message: String,
    value: Value,
    field_name: String,
    index: usize,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        message: impl Into<String>,
        value: Value,
        field_name: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            message: message.into(),
            value,
            field_name: field_name.into(),
            index,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the value that failed validation.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the name of the field the value was submitted under.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Same as [`field_name`](Self::field_name).
    pub fn name(&self) -> &str {
        &self.field_name
    }

    /// Returns the position of the offending value.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Converts the error into a JSON object for presentation.
    pub fn to_json(&self) -> Value {
        json!({
            "field": self.field_name,
            "index": self.index,
            "message": self.message,
            "value": self.value,
        })
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            write!(f, "(collection): {}", self.message)?;
        } else if self.index > 0 {
            write!(f, "{}[{}]: {}", self.field_name, self.index, self.message)?;
        } else {
            write!(f, "{}: {}", self.field_name, self.message)?;
        }

        if !self.value.is_null() {
            write!(f, " (got: {})", self.value)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty set of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` so it can be used as
/// the failure side of `Validation<T, ValidationErrors>`.
///
/// # Example
///
/// ```rust
/// use fieldset::{ValidationError, ValidationErrors};
/// use serde_json::json;
/// use stillwater::prelude::*;
///
/// let errors = ValidationErrors::single(ValidationError::new("required", json!(null), "name", 0))
///     .combine(ValidationErrors::single(ValidationError::new("invalid", json!("x"), "email", 0)));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.for_field("email").len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the set holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors recorded against `field_name`, in order.
    pub fn for_field(&self, field_name: &str) -> Vec<&ValidationError> {
        self.0
            .iter()
            .filter(|e| e.field_name == field_name)
            .collect()
    }

    /// Returns the first error.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts the set into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Converts the set into a JSON array of error objects.
    pub fn to_json(&self) -> Value {
        Value::Array(self.0.iter().map(ValidationError::to_json).collect())
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}
