// SPDX-License-Identifier: MIT

//! Declarative first-match selection.
//!
//! [`selector`] holds the typed, lazy core. [`document`] evaluates the same
//! kind of list written as JSON/YAML data against a [`context::Context`],
//! with string conditions parsed by [`condition`].

pub mod condition;
pub mod context;
pub mod document;
pub mod error;
pub mod selector;

pub use context::Context;
pub use document::{loader::DocumentLoader, Document, SelectionReport};
pub use error::{ConditionError, DocumentError, MalformedEntryError};
pub use selector::{select, try_select, Entry, Resolvable, Selector, Truthy};
