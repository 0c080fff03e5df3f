// SPDX-License-Identifier: MIT

//! Condition expressions for selection documents
//!
//! String conditions in a document are small expressions like:
//! - `intent == 'search'`
//! - `confidence > 0.8`
//! - `intent == 'bug' and priority > 3`
//! - `not user.banned`
//!
//! `and` binds tighter than `or`; parentheses group. Nesting is capped at
//! [`parser::MAX_DEPTH`] levels.

mod ast;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Expression, Literal};
pub use evaluator::evaluate;
pub use parser::{parse, MAX_DEPTH};
