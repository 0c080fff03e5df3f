// SPDX-License-Identifier: MIT

//! Typed error handling for declarative-factory
//!
//! Selection itself has a single failure of its own, [`MalformedEntryError`].
//! The document layer wraps it together with condition parsing and I/O
//! failures in [`DocumentError`].

use thiserror::Error;

/// A bare default was found before the last position of a selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Malformed entry at index {index}: expected a (condition, value) pair")]
pub struct MalformedEntryError {
    /// Position of the offending entry
    pub index: usize,
}

impl MalformedEntryError {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Condition expression errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The expression did not match any known form
    #[error("Could not parse condition: {0}")]
    Parse(String),

    /// The right-hand side of a comparison is not a literal
    #[error("Could not parse literal: {0}")]
    Literal(String),
}

/// Errors raised while loading or evaluating a selection document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A non-pair entry before the last position
    #[error(transparent)]
    MalformedEntry(#[from] MalformedEntryError),

    /// A string condition that failed to parse
    #[error("Invalid condition at index {index}: {source}")]
    Condition {
        index: usize,
        #[source]
        source: ConditionError,
    },

    /// Document or context with an unsupported shape
    #[error("Invalid document: {0}")]
    Invalid(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl DocumentError {
    /// Create a condition error for the entry at `index`
    pub fn condition(index: usize, source: ConditionError) -> Self {
        Self::Condition { index, source }
    }

    /// Create an invalid-shape error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
