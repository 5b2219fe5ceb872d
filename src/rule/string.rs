//! String rules: length bounds and regex patterns.

use regex::Regex;
use serde_json::Value;

use crate::value::value_type_name;

use super::{message_or, Rule};

fn expect_str(value: &Value) -> Result<&str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("expected string, got {}", value_type_name(value)))
}

/// String must have at least `min` characters (Unicode scalar values).
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: Option<String>,
}

impl MinLength {
    /// Creates a rule requiring at least `min` characters.
    pub fn new(min: usize) -> Self {
        Self { min, message: None }
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MinLength {
    fn check(&self, value: &Value) -> Result<(), String> {
        let len = expect_str(value)?.chars().count();
        if len < self.min {
            Err(message_or(&self.message, || {
                format!("length must be at least {}, got {}", self.min, len)
            }))
        } else {
            Ok(())
        }
    }
}

/// String must have at most `max` characters (Unicode scalar values).
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: Option<String>,
}

impl MaxLength {
    /// Creates a rule allowing at most `max` characters.
    pub fn new(max: usize) -> Self {
        Self { max, message: None }
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for MaxLength {
    fn check(&self, value: &Value) -> Result<(), String> {
        let len = expect_str(value)?.chars().count();
        if len > self.max {
            Err(message_or(&self.message, || {
                format!("length must be at most {}, got {}", self.max, len)
            }))
        } else {
            Ok(())
        }
    }
}

/// String must match a regex pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: Option<String>,
}

impl Pattern {
    /// Compiles `pattern`, returning an error if it is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            message: None,
        })
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Pattern {
    fn check(&self, value: &Value) -> Result<(), String> {
        let s = expect_str(value)?;
        if self.regex.is_match(s) {
            Ok(())
        } else {
            Err(message_or(&self.message, || {
                format!("must match pattern '{}'", self.regex.as_str())
            }))
        }
    }
}
