//! General-purpose field implementation.

use std::fmt;

use serde_json::Value;

use crate::error::ValidationError;
use crate::rule::Rule;
use crate::validation::ValidationContext;
use crate::value::is_blank;

use super::{ExportHandler, Field};

type Check = dyn Fn(&[Value], &ValidationContext<'_>) -> Result<(), String> + Send + Sync;

/// A configurable input field.
///
/// `InputField` stores every value routed to it and validates them against a
/// list of [`Rule`]s. All failures are recorded rather than stopping at the
/// first one. Blank values (`null` or whitespace-only strings) are only checked
/// for presence; rules run on non-blank values.
///
/// # Example
///
/// ```rust
/// use fieldset::{Collection, FieldSet, InputField, Rules};
/// use serde_json::json;
///
/// let mut collection = Collection::with_fields(vec![
///     FieldSet::field(InputField::new("age").alias("a").required().rule(Rules::integer())),
/// ])
/// .unwrap();
///
/// collection.add_values([("a", json!("abc"))]);
///
/// assert!(!collection.validate());
/// assert_eq!(collection.validation_errors_for("age").len(), 1);
/// ```
pub struct InputField {
    name: String,
    aliases: Vec<String>,
    values: Vec<Value>,
    rules: Vec<Box<dyn Rule>>,
    checks: Vec<Box<Check>>,
    required: bool,
    multiple: bool,
    trim: bool,
    default: Option<Value>,
    export: ExportHandler,
}

impl InputField {
    /// Creates a single-valued, optional field with no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            values: Vec::new(),
            rules: Vec::new(),
            checks: Vec::new(),
            required: false,
            multiple: false,
            trim: false,
            default: None,
            export: ExportHandler::Value,
        }
    }

    /// Adds an alternate name the field also accepts input under.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Requires at least one non-blank value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accepts any number of values and exports them as an array.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Trims surrounding whitespace from string values as they arrive.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Sets the value exported when no value was submitted.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Adds a rule applied to every non-blank value.
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a check over all of the field's values with access to the rest of
    /// the collection.
    ///
    /// A failing check records one error carrying the field's export value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldset::{Collection, FieldSet, InputField};
    /// use serde_json::json;
    ///
    /// let confirm = InputField::new("confirm").check(|values, ctx| {
    ///     let password = ctx.field("password").map(|f| f.export_value());
    ///     if values.first() == password.as_ref() {
    ///         Ok(())
    ///     } else {
    ///         Err("passwords do not match".to_string())
    ///     }
    /// });
    ///
    /// let mut collection = Collection::with_fields(vec![
    ///     FieldSet::field(InputField::new("password")),
    ///     FieldSet::field(confirm),
    /// ])
    /// .unwrap();
    ///
    /// collection.add_values([("password", json!("s3cret")), ("confirm", json!("secret"))]);
    /// assert!(!collection.validate());
    /// ```
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&[Value], &ValidationContext<'_>) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Sets the export policy.
    pub fn export(mut self, handler: ExportHandler) -> Self {
        self.export = handler;
        self
    }

    /// Leaves the field out of bulk exports.
    pub fn skip_export(self) -> Self {
        self.export(ExportHandler::Skip)
    }

    /// Returns the values accepted so far.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn error(&self, message: impl Into<String>, value: Value, index: usize) -> ValidationError {
        ValidationError::new(message, value, self.name.as_str(), index)
    }

    fn natural_value(&self) -> Value {
        if self.multiple {
            if self.values.is_empty() {
                if let Some(default) = &self.default {
                    return default.clone();
                }
            }
            return Value::Array(self.values.clone());
        }

        self.values
            .first()
            .or(self.default.as_ref())
            .cloned()
            .unwrap_or(Value::Null)
    }
}

impl Field for InputField {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn add_value(&mut self, value: Value) {
        let value = match value {
            Value::String(s) if self.trim => Value::String(s.trim().to_string()),
            other => other,
        };
        self.values.push(value);
    }

    fn validate(&self, ctx: &mut ValidationContext<'_>) -> usize {
        let mut added = 0;

        if self.required && self.values.iter().all(is_blank) {
            let value = self.values.first().cloned().unwrap_or(Value::Null);
            ctx.add_error(self.error("value is required", value, 0));
            added += 1;
        }

        if !self.multiple {
            for (index, value) in self.values.iter().enumerate().skip(1) {
                ctx.add_error(self.error("unexpected additional value", value.clone(), index));
                added += 1;
            }
        }

        for (index, value) in self.values.iter().enumerate() {
            if is_blank(value) {
                continue;
            }
            for rule in &self.rules {
                if let Err(message) = rule.check(value) {
                    ctx.add_error(self.error(message, value.clone(), index));
                    added += 1;
                }
            }
        }

        for check in &self.checks {
            if let Err(message) = check(&self.values, ctx) {
                ctx.add_error(self.error(message, self.export_value(), 0));
                added += 1;
            }
        }

        added
    }

    fn export_value(&self) -> Value {
        match &self.export {
            ExportHandler::Custom(f) => f(&self.values),
            ExportHandler::Value | ExportHandler::Skip => self.natural_value(),
        }
    }

    fn export_handler(&self) -> &ExportHandler {
        &self.export
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("values", &self.values)
            .field("rules", &self.rules.len())
            .field("required", &self.required)
            .field("multiple", &self.multiple)
            .field("export", &self.export)
            .finish()
    }
}
