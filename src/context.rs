// SPDX-License-Identifier: MIT

//! Named values that document conditions and references read from

use serde_json::{Map, Value};

use crate::error::DocumentError;

/// JSON object of named fields with dotted-path lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    fields: Map<String, Value>,
}

impl Context {
    /// Create an empty Context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a Context from a JSON object
    pub fn from_json(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::empty()),
            other => Err(DocumentError::invalid(format!(
                "context must be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Set a top-level field, replacing any previous value
    pub fn insert(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Overwrite fields with those of `other`
    pub fn merge(&mut self, other: Context) {
        self.fields.extend(other.fields);
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a nested value using dot notation (e.g. "result.intent" or "tags.0")
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            current = match current {
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }

    /// Convert context to JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Get all field names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
