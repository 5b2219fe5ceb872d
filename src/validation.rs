//! Validation context handed to fields during a validation pass.
//!
//! This module provides the [`ValidationContext`] type. A field receives it from
//! [`Collection::validate`](crate::Collection::validate) and uses it to record
//! errors and to look at sibling fields for cross-field rules.

use indexmap::IndexMap;

use crate::data::DataStore;
use crate::error::ValidationError;
use crate::field::Field;

/// Validation context carries the collection state a field may touch.
///
/// ValidationContext is passed to every [`Field::validate`] call and gives:
/// - Read access to every registered field, by name or alias
/// - Read access to the collection's ancillary [`DataStore`]
/// - Append/prepend access to the collection's error list
///
/// Fields are borrowed immutably while errors are borrowed mutably, so a field
/// can inspect its siblings and report against the same collection in one pass.
pub struct ValidationContext<'a> {
    fields: &'a IndexMap<String, Box<dyn Field>>,
    aliases: &'a IndexMap<String, String>,
    errors: &'a mut Vec<ValidationError>,
    data: &'a DataStore,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(
        fields: &'a IndexMap<String, Box<dyn Field>>,
        aliases: &'a IndexMap<String, String>,
        errors: &'a mut Vec<ValidationError>,
        data: &'a DataStore,
    ) -> Self {
        Self {
            fields,
            aliases,
            errors,
            data,
        }
    }

    /// Looks up a field by canonical name or alias.
    pub fn field(&self, name: &str) -> Option<&'a dyn Field> {
        let fields = self.fields;
        let canonical = self.aliases.get(name)?;
        fields.get(canonical).map(|f| f.as_ref())
    }

    /// Appends an error and returns the new total error count.
    pub fn add_error(&mut self, error: ValidationError) -> usize {
        self.errors.push(error);
        self.errors.len()
    }

    /// Prepends an error and returns the new total error count.
    pub fn add_error_front(&mut self, error: ValidationError) -> usize {
        self.errors.insert(0, error);
        self.errors.len()
    }

    /// Returns the number of errors recorded so far, including earlier phases.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns the errors recorded so far.
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    /// Returns the collection's ancillary data.
    pub fn data(&self) -> &'a DataStore {
        self.data
    }
}
