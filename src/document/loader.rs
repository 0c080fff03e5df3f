//! Document loader - YAML/JSON file loading and parsing

use super::Document;
use crate::context::Context;
use crate::error::DocumentError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads selection documents and contexts from files
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a document; `.json` files are read as JSON, anything else as YAML
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Document, DocumentError> {
        let path = path.as_ref();
        log::debug!("Loading document from {}", path.display());
        let content = fs::read_to_string(path)?;
        if is_json(path) {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Load a context object from a JSON or YAML file
    pub fn load_context<P: AsRef<Path>>(&self, path: P) -> Result<Context, DocumentError> {
        let path = path.as_ref();
        log::debug!("Loading context from {}", path.display());
        let content = fs::read_to_string(path)?;
        let value: Value = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            yaml_to_json(serde_yaml::from_str(&content)?)?
        };
        Context::from_json(value)
    }

    /// Parse a document from a YAML string
    ///
    /// Scalar mapping keys (`{0: true, 1: 2}`) become strings, as they would
    /// in the equivalent JSON.
    pub fn parse_yaml(content: &str) -> Result<Document, DocumentError> {
        let value = yaml_to_json(serde_yaml::from_str(content)?)?;
        let doc: Document = serde_json::from_value(value)?;
        Ok(doc)
    }

    /// Parse a document from a JSON string
    pub fn parse_json(content: &str) -> Result<Document, DocumentError> {
        let doc: Document = serde_json::from_str(content)?;
        Ok(doc)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, DocumentError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| DocumentError::invalid(format!("unrepresentable number {}", n)))?
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, value) in mapping {
                object.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, DocumentError> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(DocumentError::invalid(
            "mapping keys must be scalars",
        )),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
