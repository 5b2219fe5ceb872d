//! Value rules applied by [`InputField`](crate::InputField).
//!
//! A [`Rule`] checks one raw value and returns an error message on failure.
//! Rules never see the collection; cross-field checks belong on the field (see
//! [`InputField::check`](crate::InputField::check)).
//!
//! # Example
//!
//! ```rust
//! use fieldset::{Rule, Rules};
//! use serde_json::json;
//!
//! let rule = Rules::min_len(3).error("username too short");
//!
//! assert!(rule.check(&json!("alice")).is_ok());
//! assert_eq!(rule.check(&json!("al")), Err("username too short".to_string()));
//! ```

mod choice;
mod numeric;
mod path;
mod string;

use serde_json::Value;

pub use choice::OneOf;
pub use numeric::{Integer, Numeric, Range};
pub use path::{PathExists, PathKind};
pub use string::{MaxLength, MinLength, Pattern};

/// A check applied to a single raw value.
///
/// Closures of the form `Fn(&Value) -> Result<(), String>` are rules too.
pub trait Rule: Send + Sync {
    /// Returns `Err(message)` if the value violates the rule.
    fn check(&self, value: &Value) -> Result<(), String>;
}

impl<F> Rule for F
where
    F: Fn(&Value) -> Result<(), String> + Send + Sync,
{
    fn check(&self, value: &Value) -> Result<(), String> {
        self(value)
    }
}

/// Entry point for creating built-in rules.
pub struct Rules;

impl Rules {
    /// String must have at least `min` characters.
    pub fn min_len(min: usize) -> MinLength {
        MinLength::new(min)
    }

    /// String must have at most `max` characters.
    pub fn max_len(max: usize) -> MaxLength {
        MaxLength::new(max)
    }

    /// String must match the regex `pattern`.
    ///
    /// Returns an error if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
        Pattern::new(pattern)
    }

    /// Value must be a whole number, or a string that parses as one.
    pub fn integer() -> Integer {
        Integer::new()
    }

    /// Value must be a finite number, or a string that parses as one.
    pub fn numeric() -> Numeric {
        Numeric::new()
    }

    /// Value must be numeric and within `min..=max`.
    pub fn range(min: f64, max: f64) -> Range {
        Range::new(Some(min), Some(max))
    }

    /// Value must be numeric and at least `min`.
    pub fn min(min: f64) -> Range {
        Range::new(Some(min), None)
    }

    /// Value must be numeric and at most `max`.
    pub fn max(max: f64) -> Range {
        Range::new(None, Some(max))
    }

    /// Value must equal one of `allowed`.
    pub fn one_of<I, V>(allowed: I) -> OneOf
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        OneOf::new(allowed.into_iter().map(Into::into).collect())
    }

    /// Value must be a path that exists on the local filesystem.
    pub fn path_exists() -> PathExists {
        PathExists::new()
    }
}

/// Returns `message` if set, otherwise the rule's default message.
fn message_or(message: &Option<String>, default: impl FnOnce() -> String) -> String {
    message.clone().unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_closure_is_rule() {
        let even = |value: &Value| match value.as_i64() {
            Some(n) if n % 2 == 0 => Ok(()),
            _ => Err("must be even".to_string()),
        };

        assert!(even.check(&json!(4)).is_ok());
        assert_eq!(even.check(&json!(3)), Err("must be even".to_string()));
    }

    #[test]
    fn test_boxed_rules() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(Rules::min_len(1)),
            Box::new(Rules::integer()),
            Box::new(Rules::one_of(["a", "b"])),
        ];

        assert_eq!(rules.len(), 3);
        assert!(rules[0].check(&json!("x")).is_ok());
    }
}
