//! Numeric rules.
//!
//! Submitted input usually arrives as text, so every numeric rule accepts both
//! JSON numbers and strings that parse as numbers.

use serde_json::Value;

use crate::value::value_type_name;

use super::{message_or, Rule};

/// Reads a finite number from a JSON number or a numeric string.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Whole numbers count as integers whatever their spelling, so `3`, `3.0`,
/// `"3"` and `"3.0"` all pass.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(is_whole),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().is_ok()
                || s.parse::<u64>().is_ok()
                || s.parse::<f64>().is_ok_and(is_whole)
        }
        _ => false,
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Value must be an integer.
#[derive(Debug, Clone, Default)]
pub struct Integer {
    message: Option<String>,
}

impl Integer {
    /// Creates an integer rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Integer {
    fn check(&self, value: &Value) -> Result<(), String> {
        if is_integer(value) {
            Ok(())
        } else {
            Err(message_or(&self.message, || {
                format!("expected integer, got {}", value_type_name(value))
            }))
        }
    }
}

/// Value must be a finite number.
#[derive(Debug, Clone, Default)]
pub struct Numeric {
    message: Option<String>,
}

impl Numeric {
    /// Creates a numeric rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Numeric {
    fn check(&self, value: &Value) -> Result<(), String> {
        match as_number(value) {
            Some(_) => Ok(()),
            None => Err(message_or(&self.message, || {
                format!("expected number, got {}", value_type_name(value))
            })),
        }
    }
}

/// Value must be numeric and within optional inclusive bounds.
#[derive(Debug, Clone)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
    message: Option<String>,
}

impl Range {
    /// Creates a range rule; `None` leaves that side open.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            message: None,
        }
    }

    /// Sets a custom error message for out-of-range values.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for Range {
    fn check(&self, value: &Value) -> Result<(), String> {
        let n = as_number(value)
            .ok_or_else(|| format!("expected number, got {}", value_type_name(value)))?;

        if let Some(min) = self.min.filter(|min| n < *min) {
            return Err(message_or(&self.message, || {
                format!("must be at least {}, got {}", min, n)
            }));
        }
        if let Some(max) = self.max.filter(|max| n > *max) {
            return Err(message_or(&self.message, || {
                format!("must be at most {}, got {}", max, n)
            }));
        }
        Ok(())
    }
}
