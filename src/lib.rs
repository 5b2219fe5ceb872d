//! # Fieldset
//!
//! A collection of named input fields that routes raw values into them,
//! validates every field, accumulates ALL validation errors, and exports
//! sanitized values.
//!
//! ## Overview
//!
//! Input usually arrives as an untrusted name→value map. A [`Collection`]
//! resolves each name (or alias) to a registered [`Field`], forwards the values,
//! and records an "unknown parameter" error for names nobody claims. Validation
//! never stops at the first failure: every field reports everything it finds,
//! and errors from intake count toward the result.
//!
//! ## Core Types
//!
//! - [`Collection`]: Owns the fields and the alias index, runs validation, exports values
//! - [`Field`]: Capability trait for a named input; [`InputField`] is the stock implementation
//! - [`Rule`]: A check on one value; [`Rules`] builds the built-in ones
//! - [`ValidationError`]: A single recorded failure (message, value, field name, index)
//! - [`CollectionError`]: Configuration and usage mistakes, returned through `Result`
//! - [`hooks`]: Before/after validation notifications that can veto a pass
//!
//! ## Example
//!
//! ```rust
//! use fieldset::{Collection, FieldSet, InputField, Rules};
//! use serde_json::json;
//!
//! let mut collection = Collection::with_fields(vec![
//!     FieldSet::field(InputField::new("email").alias("e").required()),
//!     FieldSet::field(InputField::new("age").rule(Rules::integer())),
//! ])
//! .unwrap();
//!
//! collection.add_values([
//!     ("e", json!("a@b.com")),
//!     ("age", json!("abc")),
//!     ("ghost", json!([1, 2])),
//! ]);
//!
//! assert!(!collection.validate());
//! assert_eq!(collection.validation_errors().len(), 3);
//! assert_eq!(collection.validation_errors_for("ghost").len(), 2);
//! ```

pub mod collection;
pub mod data;
pub mod error;
pub mod field;
pub mod hooks;
pub mod rule;
pub mod validation;
pub mod value;

pub use collection::{Collection, UnknownParameters, UNKNOWN_PARAMETER};
pub use data::DataStore;
pub use error::{CollectionError, ValidationError, ValidationErrors};
pub use field::{ExportFn, ExportHandler, Field, FieldSet, InputField};
pub use hooks::{Dispatcher, HookEvent, HookOutcome, HookRegistry};
pub use rule::{Rule, Rules};
pub use validation::ValidationContext;

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
