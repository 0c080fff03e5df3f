// SPDX-License-Identifier: MIT

//! Entries of a selection list

use std::convert::Infallible;

use super::resolvable::Resolvable;

/// One element of a selection list
#[derive(Debug)]
pub enum Entry<'a, T, E = Infallible> {
    /// Returns `value` when `condition` resolves to true
    Pair {
        condition: Resolvable<'a, bool, E>,
        value: Resolvable<'a, T, E>,
    },
    /// Unconditional fallback; only valid as the last entry
    Default(Resolvable<'a, T, E>),
}

impl<'a, T, E> Entry<'a, T, E> {
    pub fn pair(
        condition: impl Into<Resolvable<'a, bool, E>>,
        value: impl Into<Resolvable<'a, T, E>>,
    ) -> Self {
        Self::Pair {
            condition: condition.into(),
            value: value.into(),
        }
    }

    pub fn default_value(value: impl Into<Resolvable<'a, T, E>>) -> Self {
        Self::Default(value.into())
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }

    /// Transform the error type of both producers
    pub fn map_err<E2, F>(self, f: F) -> Entry<'a, T, E2>
    where
        T: 'a,
        E: 'a,
        F: Fn(E) -> E2 + Clone + 'a,
    {
        match self {
            Self::Pair { condition, value } => Entry::Pair {
                condition: condition.map_err(f.clone()),
                value: value.map_err(f),
            },
            Self::Default(value) => Entry::Default(value.map_err(f)),
        }
    }
}
