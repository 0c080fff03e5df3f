// SPDX-License-Identifier: MIT

//! First-match evaluation over selection lists

use std::convert::Infallible;

use super::entry::Entry;
use super::resolvable::Resolvable;
use crate::error::MalformedEntryError;

/// Return the value of the first entry whose condition holds.
///
/// A trailing [`Entry::Default`] is returned when no condition before it
/// holds. `Ok(None)` means nothing matched and no default was given. A
/// default before the last position is reported once evaluation reaches it.
pub fn select<'a, T>(
    entries: impl IntoIterator<Item = Entry<'a, T>>,
) -> Result<Option<T>, MalformedEntryError>
where
    T: 'a,
{
    try_select(
        entries
            .into_iter()
            .map(|entry| entry.map_err(never::<MalformedEntryError>)),
    )
}

/// Like [`select`], for producers that can fail.
///
/// Producer errors are returned exactly as the producer raised them.
pub fn try_select<'a, T, E>(
    entries: impl IntoIterator<Item = Entry<'a, T, E>>,
) -> Result<Option<T>, E>
where
    E: From<MalformedEntryError>,
{
    let mut entries = entries.into_iter().enumerate().peekable();

    while let Some((index, entry)) = entries.next() {
        let is_last = entries.peek().is_none();
        match entry {
            Entry::Default(value) if is_last => return value.resolve().map(Some),
            Entry::Default(_) => return Err(MalformedEntryError::new(index).into()),
            Entry::Pair { condition, value } => {
                if condition.resolve()? {
                    return value.resolve().map(Some);
                }
            }
        }
    }

    Ok(None)
}

fn never<E>(e: Infallible) -> E {
    match e {}
}

/// Builder for a selection whose default can only come last.
///
/// Arms are checked in the order they were added; the default given to
/// [`Selector::otherwise`] is consulted only after every arm failed.
pub struct Selector<'a, T, E = Infallible> {
    arms: Vec<(Resolvable<'a, bool, E>, Resolvable<'a, T, E>)>,
    fallback: Option<Resolvable<'a, T, E>>,
}

impl<'a, T> Selector<'a, T> {
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            fallback: None,
        }
    }

    pub fn select(self) -> Option<T> {
        match self.try_select() {
            Ok(value) => value,
            Err(e) => match e {},
        }
    }
}

impl<'a, T, E> Selector<'a, T, E> {
    /// Start a selection whose producers may fail with `E`
    pub fn fallible() -> Self {
        Self {
            arms: Vec::new(),
            fallback: None,
        }
    }

    pub fn when(
        mut self,
        condition: impl Into<Resolvable<'a, bool, E>>,
        value: impl Into<Resolvable<'a, T, E>>,
    ) -> Self {
        self.arms.push((condition.into(), value.into()));
        self
    }

    /// Set the default; a later call replaces an earlier one
    pub fn otherwise(mut self, value: impl Into<Resolvable<'a, T, E>>) -> Self {
        self.fallback = Some(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.arms.len() + usize::from(self.fallback.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn try_select(self) -> Result<Option<T>, E> {
        for (condition, value) in self.arms {
            if condition.resolve()? {
                return value.resolve().map(Some);
            }
        }

        self.fallback.map(Resolvable::resolve).transpose()
    }

    /// Flatten into a list accepted by [`try_select`]
    pub fn into_entries(self) -> Vec<Entry<'a, T, E>> {
        let mut entries: Vec<_> = self
            .arms
            .into_iter()
            .map(|(condition, value)| Entry::Pair { condition, value })
            .collect();
        entries.extend(self.fallback.map(Entry::Default));
        entries
    }
}

impl<T> Default for Selector<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
