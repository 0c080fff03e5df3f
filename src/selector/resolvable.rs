// SPDX-License-Identifier: MIT

//! Values that are either ready or produced on demand

use std::convert::Infallible;
use std::fmt;

use super::truthy::Truthy;

/// Producer stored by a deferred [`Resolvable`]
pub type Producer<'a, T, E> = Box<dyn FnOnce() -> Result<T, E> + 'a>;

/// A value, or a zero-argument producer of it.
///
/// Both forms answer [`Resolvable::resolve`] the same way, so callers never
/// have to ask whether they are holding a closure. A deferred producer runs
/// at most once: `resolve` consumes `self`.
pub enum Resolvable<'a, T, E = Infallible> {
    /// Already available
    Ready(T),
    /// Computed when resolved
    Deferred(Producer<'a, T, E>),
}

impl<'a, T, E> Resolvable<'a, T, E> {
    pub fn ready(value: T) -> Self {
        Self::Ready(value)
    }

    /// Wrap an infallible producer
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::Deferred(Box::new(move || Ok(producer())))
    }

    /// Wrap a producer whose error is handed back unchanged by `resolve`
    pub fn try_lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
    {
        Self::Deferred(Box::new(producer))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Invoke the producer if there is one, otherwise return the value as-is
    pub fn resolve(self) -> Result<T, E> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Deferred(producer) => producer(),
        }
    }

    /// Transform the resolved value without forcing a deferred producer
    pub fn map<U, F>(self, f: F) -> Resolvable<'a, U, E>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        match self {
            Self::Ready(value) => Resolvable::Ready(f(value)),
            Self::Deferred(producer) => Resolvable::Deferred(Box::new(move || producer().map(f))),
        }
    }

    /// Transform the producer's error type
    pub fn map_err<E2, F>(self, f: F) -> Resolvable<'a, T, E2>
    where
        T: 'a,
        E: 'a,
        F: FnOnce(E) -> E2 + 'a,
    {
        match self {
            Self::Ready(value) => Resolvable::Ready(value),
            Self::Deferred(producer) => {
                Resolvable::Deferred(Box::new(move || producer().map_err(f)))
            }
        }
    }
}

impl<'a, E> Resolvable<'a, bool, E> {
    /// A condition from any boolean-like value
    pub fn truthy<C: Truthy>(value: C) -> Self {
        Self::Ready(value.is_truthy())
    }

    /// A condition from a producer of any boolean-like value
    pub fn lazy_truthy<C, F>(producer: F) -> Self
    where
        C: Truthy,
        F: FnOnce() -> C + 'a,
    {
        Self::lazy(move || producer().is_truthy())
    }
}

impl<T, E> From<T> for Resolvable<'_, T, E> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Resolvable<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_ready_resolves_to_itself() {
        let value: Resolvable<'_, i32> = Resolvable::ready(7);
        assert!(!value.is_deferred());
        assert_eq!(value.resolve(), Ok(7));
    }

    #[test]
    fn test_lazy_runs_only_on_resolve() {
        let calls = Cell::new(0);
        let value: Resolvable<'_, &str> = Resolvable::lazy(|| {
            calls.set(calls.get() + 1);
            "built"
        });
        assert!(value.is_deferred());
        assert_eq!(calls.get(), 0);

        assert_eq!(value.resolve(), Ok("built"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_try_lazy_propagates_error() {
        let value: Resolvable<'_, i32, String> = Resolvable::try_lazy(|| Err("boom".to_string()));
        assert_eq!(value.resolve(), Err("boom".to_string()));
    }

    #[test]
    fn test_map_stays_lazy() {
        let calls = Cell::new(0);
        let value: Resolvable<'_, i32> = Resolvable::lazy(|| {
            calls.set(calls.get() + 1);
            20
        });
        let doubled = value.map(|n| n * 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(doubled.resolve(), Ok(40));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_err() {
        let value: Resolvable<'_, i32, &str> = Resolvable::try_lazy(|| Err("bad"));
        let mapped = value.map_err(|e| e.len());
        assert_eq!(mapped.resolve(), Err(3));
    }

    #[test]
    fn test_truthy_conditions() {
        let ready: Resolvable<'_, bool> = Resolvable::truthy("0");
        assert_eq!(ready.resolve(), Ok(false));

        let lazy: Resolvable<'_, bool> = Resolvable::lazy_truthy(|| vec![1]);
        assert_eq!(lazy.resolve(), Ok(true));
    }

    #[test]
    fn test_from_plain_value() {
        let value: Resolvable<'_, Option<i32>> = None.into();
        assert_eq!(value.resolve(), Ok(None));
    }

    #[test]
    fn test_debug() {
        let ready: Resolvable<'_, i32> = Resolvable::ready(1);
        let deferred: Resolvable<'_, i32> = Resolvable::lazy(|| 1);
        assert_eq!(format!("{:?}", ready), "Ready(1)");
        assert_eq!(format!("{:?}", deferred), "Deferred(..)");
    }
}
