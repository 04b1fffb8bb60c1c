//! The substitution map supplied by the caller.

use std::collections::HashMap;

use serde_json::Value;

use crate::{Error, Result};

/// Mapping from placeholder name to replacement text.
///
/// Names are case-sensitive and insertion order is irrelevant. Setting a
/// name that already exists overwrites the previous value, which is how
/// the CLI layers `--var` entries over a vars file.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: HashMap<String, String>,
}

impl Substitutions {
    /// Creates a new empty substitution map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement value, overwriting any existing entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Gets a replacement value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Checks whether a name has a replacement value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds a substitution map from a top-level JSON object.
    ///
    /// String values are used verbatim; numbers and booleans are coerced
    /// to their display form. Nulls, arrays, and nested objects have no
    /// sensible single-string rendering and are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `value` is not an object or one
    /// of its values cannot be coerced to a string.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidInput(
                "vars file must contain a top-level JSON object".to_string(),
            ));
        };

        let mut subs = Self::new();
        for (name, entry) in map {
            let rendered = match entry {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(Error::InvalidInput(format!(
                        "value for '{name}' must be a string, number, or boolean"
                    )));
                },
            };
            subs.set(name, rendered);
        }
        Ok(subs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Self::new();
        for (name, value) in iter {
            subs.set(name, value);
        }
        subs
    }
}
