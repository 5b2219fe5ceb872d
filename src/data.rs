//! Ancillary key/value storage attached to a collection.
//!
//! Hooks and callers use the [`DataStore`] to stash request-scoped context
//! (session tokens, the submitting user, and so on) next to the fields without
//! the collection interpreting it.

use indexmap::IndexMap;
use serde_json::Value;

/// An insertion-ordered map of opaque values.
///
/// # Example
///
/// ```rust
/// use fieldset::DataStore;
/// use serde_json::json;
///
/// let mut data = DataStore::new();
/// data.set("csrf_token", json!("abc123"));
///
/// assert!(data.has("csrf_token"));
/// assert_eq!(data.get("csrf_token"), Some(&json!("abc123")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    entries: IndexMap<String, Value>,
}

impl DataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DataStore {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_replaces_previous_value() {
        let mut data = DataStore::new();
        assert_eq!(data.set("user", json!("alice")), None);
        assert_eq!(data.set("user", json!("bob")), Some(json!("alice")));
        assert_eq!(data.get("user"), Some(&json!("bob")));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut data: DataStore = vec![("a", json!(1)), ("b", json!(2)), ("c", json!(3))]
            .into_iter()
            .collect();

        assert_eq!(data.remove("b"), Some(json!(2)));
        let keys: Vec<_> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert!(!data.has("b"));
    }

    #[test]
    fn test_empty_store() {
        let data = DataStore::new();
        assert!(data.is_empty());
        assert_eq!(data.get("missing"), None);
    }
}
