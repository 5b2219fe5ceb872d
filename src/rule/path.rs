//! Filesystem path rule.
//!
//! The check touches the filesystem synchronously; the collection imposes no
//! timeout around it.

use std::path::Path;

use serde_json::Value;

use crate::value::value_type_name;

use super::Rule;

/// What kind of filesystem entry a [`PathExists`] rule requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathKind {
    /// Any existing entry.
    #[default]
    Any,
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

/// Value must be a path to an existing filesystem entry.
#[derive(Debug, Clone, Default)]
pub struct PathExists {
    kind: PathKind,
    message: Option<String>,
}

impl PathExists {
    /// Creates a rule accepting any existing path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the path to be a regular file.
    pub fn file(mut self) -> Self {
        self.kind = PathKind::File;
        self
    }

    /// Requires the path to be a directory.
    pub fn dir(mut self) -> Self {
        self.kind = PathKind::Dir;
        self
    }

    /// Sets a custom error message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Rule for PathExists {
    fn check(&self, value: &Value) -> Result<(), String> {
        let raw = value
            .as_str()
            .ok_or_else(|| format!("expected string, got {}", value_type_name(value)))?;
        let path = Path::new(raw);

        let failure = if !path.exists() {
            Some(format!("path '{}' does not exist", raw))
        } else {
            match self.kind {
                PathKind::Any => None,
                PathKind::File if !path.is_file() => Some(format!("path '{}' is not a file", raw)),
                PathKind::Dir if !path.is_dir() => {
                    Some(format!("path '{}' is not a directory", raw))
                }
                _ => None,
            }
        };

        match failure {
            None => Ok(()),
            Some(default) => Err(self.message.clone().unwrap_or(default)),
        }
    }
}
