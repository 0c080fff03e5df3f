// SPDX-License-Identifier: MIT

//! Lazy first-match selection
//!
//! A selection list pairs conditions with values and may end with a default:
//!
//! ```
//! use declarative_factory::selector::{Resolvable, Selector};
//!
//! let picked = Selector::<i32>::new()
//!     .when(false, Resolvable::lazy(|| 1))
//!     .when(Resolvable::lazy(|| true), 2)
//!     .otherwise(3)
//!     .select();
//! assert_eq!(picked, Some(2));
//! ```
//!
//! Conditions and values may be plain or produced on demand through
//! [`Resolvable`]. Producers of entries that are never reached do not run.

mod entry;
mod eval;
mod resolvable;
mod truthy;

pub use entry::Entry;
pub use eval::{select, try_select, Selector};
pub use resolvable::{Producer, Resolvable};
pub use truthy::Truthy;
