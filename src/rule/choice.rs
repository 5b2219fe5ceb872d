use serde_json::Value;

use super::{message_or, Rule};

/// Value must equal one of a fixed set of allowed values.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<Value>,
    message: Option<String>,
}

impl OneOf {
    /// Creates a rule accepting only the `allowed` values.
    pub fn new(allowed: Vec<Value>) -> Self {
        Self {
            allowed,
            message: None,
        }
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for OneOf {
    fn check(&self, value: &Value) -> Result<(), String> {
        if self.allowed.contains(value) {
            return Ok(());
        }
        Err(message_or(&self.message, || {
            let allowed: Vec<String> = self.allowed.iter().map(Value::to_string).collect();
            format!("must be one of {}", allowed.join(", "))
        }))
    }
}
