//! The field collection.
//!
//! This module provides [`Collection`], which owns a set of fields and
//! orchestrates value intake, validation with before/after hooks, error
//! aggregation and export.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;
use tracing::{debug, trace};

use crate::data::DataStore;
use crate::error::{CollectionError, ValidationError, ValidationErrors};
use crate::field::{Field, FieldSet};
use crate::hooks::{Dispatcher, HookEvent, HookOutcome, AFTER_VALIDATE, BEFORE_VALIDATE};
use crate::validation::ValidationContext;
use crate::value::{into_sequence, value_type_name};
use crate::ValidationResult;

/// Message recorded for input names that resolve to no field.
pub const UNKNOWN_PARAMETER: &str = "unknown parameter";

/// How input names that resolve to no field are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownParameters {
    /// Record an "unknown parameter" error per submitted value.
    #[default]
    Reject,
    /// Drop the values silently.
    Ignore,
}

/// A set of named fields validated and exported together.
///
/// Fields are kept in registration order, which is also iteration and export
/// order. Every field name and alias is registered exactly once; conflicts are
/// configuration errors reported by [`add_field`](Self::add_field).
///
/// Validation errors accumulate for the life of the collection. There is no
/// reset; build a new collection for each validation pass.
///
/// # Example
///
/// ```rust
/// use fieldset::{Collection, FieldSet, InputField, Rules};
/// use serde_json::json;
///
/// let mut collection = Collection::with_fields(vec![
///     FieldSet::field(InputField::new("email").alias("e").required()),
///     FieldSet::field(InputField::new("age").rule(Rules::integer())),
/// ])
/// .unwrap();
///
/// collection.add_values([("e", json!("a@b.com")), ("age", json!(["abc"]))]);
///
/// assert!(!collection.validate());
/// assert_eq!(collection.validation_errors_for("age").len(), 1);
/// assert_eq!(collection.export_values()["email"], json!("a@b.com"));
/// ```
pub struct Collection {
    fields: IndexMap<String, Box<dyn Field>>,
    aliases: IndexMap<String, String>,
    errors: Vec<ValidationError>,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    data: DataStore,
    unknown_parameters: UnknownParameters,
}

impl Collection {
    /// Creates an empty collection with no dispatcher.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            aliases: IndexMap::new(),
            errors: Vec::new(),
            dispatcher: None,
            data: DataStore::new(),
            unknown_parameters: UnknownParameters::default(),
        }
    }

    /// Creates a collection and registers `sets` in order.
    ///
    /// # Errors
    ///
    /// Returns the first registration error; see [`add_field`](Self::add_field).
    pub fn with_fields<I>(sets: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = FieldSet>,
    {
        let mut collection = Self::new();
        collection.add_fields(sets)?;
        Ok(collection)
    }

    /// Sets the dispatcher notified before and after validation.
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Sets how unregistered input names are treated.
    ///
    /// The default, [`UnknownParameters::Reject`], records an error for each
    /// submitted value.
    pub fn with_unknown_parameters(mut self, policy: UnknownParameters) -> Self {
        self.unknown_parameters = policy;
        self
    }

    /// Replaces the ancillary data store.
    pub fn with_data(mut self, data: DataStore) -> Self {
        self.data = data;
        self
    }

    /// Registers a field under its name and aliases.
    ///
    /// All identifiers are checked before anything is registered, so a failed
    /// call leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::DuplicateFieldName`] if the field's name is already
    ///   registered as a name or alias.
    /// - [`CollectionError::DuplicateAlias`] if one of its aliases is already
    ///   registered, repeats the field's own name, or is listed twice.
    pub fn add_field<F: Field + 'static>(&mut self, field: F) -> Result<(), CollectionError> {
        self.add_boxed_field(Box::new(field))
    }

    /// Registers an already boxed field. See [`add_field`](Self::add_field).
    pub fn add_boxed_field(&mut self, field: Box<dyn Field>) -> Result<(), CollectionError> {
        let name = field.name().to_string();
        if self.aliases.contains_key(&name) {
            return Err(CollectionError::DuplicateFieldName(name));
        }

        for (position, alias) in field.aliases().iter().enumerate() {
            let repeated = *alias == name || field.aliases()[..position].contains(alias);
            if repeated || self.aliases.contains_key(alias) {
                return Err(CollectionError::DuplicateAlias {
                    alias: alias.clone(),
                    field: name,
                });
            }
        }

        self.aliases.insert(name.clone(), name.clone());
        for alias in field.aliases() {
            self.aliases.insert(alias.clone(), name.clone());
        }

        debug!(field = %name, aliases = field.aliases().len(), "registered field");
        self.fields.insert(name, field);
        Ok(())
    }

    /// Registers every field in `sets`, flattening nested groups in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first registration error. Fields registered
    /// before it stay registered.
    pub fn add_fields<I>(&mut self, sets: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = FieldSet>,
    {
        for set in sets {
            for field in set.flatten() {
                self.add_boxed_field(field)?;
            }
        }
        Ok(())
    }

    /// Resolves a name or alias to the canonical field name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Looks up a field by name or alias.
    ///
    /// Unknown names are expected (untrusted input) and yield `None`.
    pub fn get_field(&self, name: &str) -> Option<&dyn Field> {
        let canonical = self.aliases.get(name)?;
        self.fields.get(canonical).map(|f| f.as_ref())
    }

    /// Looks up a field by name or alias for mutation.
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut (dyn Field + 'static)> {
        let canonical = self.aliases.get(name)?;
        self.fields.get_mut(canonical).map(|f| f.as_mut())
    }

    /// Returns every registered identifier and the canonical name it resolves to.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of registered identifiers (names plus aliases).
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Returns the canonical field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the ancillary data store.
    pub fn data(&self) -> &DataStore {
        &self.data
    }

    /// Returns the ancillary data store for modification.
    pub fn data_mut(&mut self) -> &mut DataStore {
        &mut self.data
    }

    /// Routes raw input values to their fields.
    ///
    /// Each value is coerced into a sequence (arrays pass through, anything
    /// else becomes a single element) and every element is forwarded, in order,
    /// to the field the name resolves to. Elements submitted under a name no
    /// field claims are recorded as "unknown parameter" errors carrying their
    /// position, unless the collection was configured with
    /// [`UnknownParameters::Ignore`].
    ///
    /// Never fails, so it is safe to call with untrusted input.
    pub fn add_values<I, K>(&mut self, raw: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (name, values) in raw {
            let name = name.as_ref();
            let values = into_sequence(values);

            match self.get_field_mut(name) {
                Some(field) => {
                    trace!(field = name, count = values.len(), "routing values");
                    for value in values {
                        field.add_value(value);
                    }
                }
                None => self.reject_unknown(name, values),
            }
        }
    }

    /// Routes the members of a JSON object through [`add_values`](Self::add_values).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `input` is not an object.
    pub fn add_json(&mut self, input: Value) -> Result<(), CollectionError> {
        match input {
            Value::Object(map) => {
                self.add_values(map);
                Ok(())
            }
            other => Err(CollectionError::InvalidArgument(format!(
                "expected object, got {}",
                value_type_name(&other)
            ))),
        }
    }

    fn reject_unknown(&mut self, name: &str, values: Vec<Value>) {
        if self.unknown_parameters == UnknownParameters::Ignore {
            trace!(parameter = name, "ignoring unknown parameter");
            return;
        }

        debug!(parameter = name, count = values.len(), "unknown parameter");
        for (index, value) in values.into_iter().enumerate() {
            self.errors
                .push(ValidationError::new(UNKNOWN_PARAMETER, value, name, index));
        }
    }

    /// Validates every field.
    ///
    /// The pass runs in a fixed order:
    /// 1. The number of errors already recorded (e.g. unknown parameters) is
    ///    taken as a baseline.
    /// 2. [`BEFORE_VALIDATE`] fires; an abort fails validation before any field
    ///    is touched.
    /// 3. Each field validates itself once, in registration order.
    /// 4. [`AFTER_VALIDATE`] fires; an abort fails validation.
    ///
    /// Returns true only if the baseline was zero, no field reported errors,
    /// neither hook aborted, and no errors are recorded at the end. Errors
    /// recorded along the way stay queryable either way.
    pub fn validate(&mut self) -> bool {
        let baseline = self.errors.len();

        if self.fire(BEFORE_VALIDATE).is_abort() {
            debug!(baseline, "validation aborted before fields were validated");
            return false;
        }

        let field_errors = self.validate_fields();

        let after = self.fire(AFTER_VALIDATE);
        if after.is_abort() {
            debug!("validation aborted after fields were validated");
        }

        let passed =
            baseline == 0 && field_errors == 0 && !after.is_abort() && self.errors.is_empty();
        debug!(
            passed,
            baseline,
            field_errors,
            total = self.errors.len(),
            "validation finished"
        );
        passed
    }

    fn validate_fields(&mut self) -> usize {
        let Self {
            fields,
            aliases,
            errors,
            data,
            ..
        } = self;
        let fields: &IndexMap<String, Box<dyn Field>> = fields;
        let mut ctx = ValidationContext::new(fields, aliases, errors, data);

        fields
            .values()
            .map(|field| {
                let added = field.validate(&mut ctx);
                if added > 0 {
                    trace!(field = field.name(), errors = added, "field failed validation");
                }
                added
            })
            .sum()
    }

    fn fire(&mut self, event: &str) -> HookOutcome {
        let Some(dispatcher) = self.dispatcher.clone() else {
            return HookOutcome::Continue;
        };
        dispatcher.fire(&mut HookEvent::new(event, self))
    }

    /// Validates and, on success, exports the field values.
    ///
    /// On failure returns every recorded error. A hook abort that recorded no
    /// error yields a single "validation aborted" error, which is not added to
    /// the collection.
    pub fn validated(&mut self) -> ValidationResult<IndexMap<String, Value>> {
        if self.validate() {
            return Validation::Success(self.export_values());
        }

        let errors = ValidationErrors::from_vec(self.errors.clone()).unwrap_or_else(|| {
            ValidationErrors::single(ValidationError::new(
                "validation aborted",
                Value::Null,
                "",
                0,
            ))
        });
        Validation::Failure(errors)
    }

    /// Appends an error and returns the new total error count.
    pub fn add_validation_error(&mut self, error: ValidationError) -> usize {
        self.errors.push(error);
        self.errors.len()
    }

    /// Prepends an error and returns the new total error count.
    pub fn add_validation_error_front(&mut self, error: ValidationError) -> usize {
        self.errors.insert(0, error);
        self.errors.len()
    }

    /// Returns true if any error has been recorded.
    pub fn has_validation_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    pub fn validation_error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns every recorded error in order.
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the errors recorded against `field_name`, in order.
    pub fn validation_errors_for(&self, field_name: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.field_name() == field_name)
            .collect()
    }

    /// Exports one field's value by name or alias.
    ///
    /// The field's export handler is not consulted, so skipped fields can
    /// still be read individually.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnknownField`] if no field resolves.
    pub fn export_field_value(&self, name: &str) -> Result<Value, CollectionError> {
        self.get_field(name)
            .map(|field| field.export_value())
            .ok_or_else(|| CollectionError::UnknownField(name.to_string()))
    }

    /// Exports one field's value using a dynamically typed key.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `key` is not a string,
    /// or [`CollectionError::UnknownField`] if no field resolves.
    pub fn export_field_value_by_key(&self, key: &Value) -> Result<Value, CollectionError> {
        let name = key.as_str().ok_or_else(|| {
            CollectionError::InvalidArgument(format!(
                "field name must be a string, got {}",
                value_type_name(key)
            ))
        })?;
        self.export_field_value(name)
    }

    /// Exports every field not marked [`ExportHandler::Skip`](crate::ExportHandler::Skip),
    /// keyed by canonical name in registration order.
    pub fn export_values(&self) -> IndexMap<String, Value> {
        self.fields
            .iter()
            .filter(|(_, field)| !field.export_handler().is_skip())
            .map(|(name, field)| (name.clone(), field.export_value()))
            .collect()
    }

    /// Same as [`export_values`](Self::export_values), as a JSON object.
    pub fn export_json(&self) -> Value {
        Value::Object(self.export_values().into_iter().collect::<Map<String, Value>>())
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .field("errors", &self.errors)
            .field("has_dispatcher", &self.dispatcher.is_some())
            .field("data", &self.data)
            .field("unknown_parameters", &self.unknown_parameters)
            .finish()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    assert_send::<Collection>();
};
