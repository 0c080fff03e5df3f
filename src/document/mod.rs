// SPDX-License-Identifier: MIT

//! Selection lists written as data
//!
//! A document is a JSON/YAML sequence in which every entry is either a pair
//! `[condition, value]` or, in the last position only, a bare default:
//!
//! ```yaml
//! - ["intent == 'search'", "brave_search"]
//! - [false, "unused"]
//! - "fallback"
//! ```
//!
//! Shapes are checked structurally: a pair is an array of exactly two
//! elements. A last entry that happens to be a two-element array is read as a
//! pair, not as a default.

pub mod loader;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::condition;
use crate::context::Context;
use crate::error::DocumentError;
use crate::selector::{try_select, Entry, Resolvable};

/// Key of a value that is read from the context when selected
pub const REF_KEY: &str = "$ref";

/// A selection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentSource")]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub entries: Vec<Value>,
}

/// Accepted top-level shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentSource {
    Bare(Vec<Value>),
    Named {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        description: Option<String>,
        entries: Vec<Value>,
    },
}

impl From<DocumentSource> for Document {
    fn from(source: DocumentSource) -> Self {
        match source {
            DocumentSource::Bare(entries) => Document::new(entries),
            DocumentSource::Named {
                name,
                description,
                entries,
            } => Document {
                name,
                description,
                entries,
            },
        }
    }
}

impl Document {
    pub fn new(entries: Vec<Value>) -> Self {
        Self {
            name: None,
            description: None,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select the value of the first entry whose condition holds in `context`.
    ///
    /// String conditions are parsed only when evaluation reaches them, and
    /// `$ref` values are read only when their entry is selected.
    pub fn select(&self, context: &Context) -> Result<Option<Value>, DocumentError> {
        log::debug!(
            "Selecting from {} ({} entries)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.entries.len()
        );

        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, raw)| to_entry(index, raw, context));
        let selected = try_select(entries)?;

        match &selected {
            Some(value) => log::debug!("Selected {}", value),
            None => log::debug!("No entry matched"),
        }
        Ok(selected)
    }

    /// Like [`Document::select`], wrapped for JSON output
    pub fn report(&self, context: &Context) -> Result<SelectionReport, DocumentError> {
        self.select(context).map(SelectionReport::from)
    }
}

/// Outcome of a document selection, serializable without losing absence.
///
/// Serializes as `{"matched": false}` when nothing matched, and as
/// `{"matched": true, "value": ...}` otherwise, even when the value is `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl From<Option<Value>> for SelectionReport {
    fn from(selected: Option<Value>) -> Self {
        Self {
            matched: selected.is_some(),
            value: selected,
        }
    }
}

fn to_entry<'a>(
    index: usize,
    raw: &'a Value,
    context: &'a Context,
) -> Entry<'a, Value, DocumentError> {
    match as_pair(raw) {
        Some((condition, value)) => Entry::Pair {
            condition: condition_of(index, condition, context),
            value: value_of(value, context),
        },
        None => Entry::Default(value_of(raw, context)),
    }
}

fn as_pair(raw: &Value) -> Option<(&Value, &Value)> {
    match raw.as_array()?.as_slice() {
        [condition, value] => Some((condition, value)),
        _ => None,
    }
}

fn condition_of<'a>(
    index: usize,
    raw: &'a Value,
    context: &'a Context,
) -> Resolvable<'a, bool, DocumentError> {
    match raw {
        Value::Bool(b) => Resolvable::ready(*b),
        Value::String(expr) => Resolvable::try_lazy(move || {
            let parsed =
                condition::parse(expr).map_err(|source| DocumentError::condition(index, source))?;
            let holds = condition::evaluate(&parsed, context);
            log::trace!("Entry {}: `{}` -> {}", index, expr, holds);
            Ok(holds)
        }),
        other => Resolvable::truthy(other),
    }
}

fn value_of<'a>(raw: &'a Value, context: &'a Context) -> Resolvable<'a, Value, DocumentError> {
    match reference_path(raw) {
        Some(path) => {
            Resolvable::lazy(move || context.get_path(path).cloned().unwrap_or(Value::Null))
        }
        None => Resolvable::lazy(move || raw.clone()),
    }
}

fn reference_path(raw: &Value) -> Option<&str> {
    let fields = raw.as_object()?;
    if fields.len() != 1 {
        return None;
    }
    fields.get(REF_KEY)?.as_str()
}
