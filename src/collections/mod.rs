//! Lists of unboxed primitive values.
//!
//! # Purpose
//! Collections of `i32`s or `f64`s don't need to pay for genericity over arbitrary `T`: their
//! elements are [`Copy`], have no destructors and can be compared and hashed canonically. The
//! types here are written for exactly that case, described by the [`Primitive`] trait.
//!
//! # Method
//! A list type only implements [`RandomAccessList`], providing a length and positional access.
//! Iteration, searching, bulk removal, sub-lists, equality and hashing are all provided on top of
//! that by [`PrimitiveCollection`] and [`PrimitiveList`], written once in the [`random_access`]
//! module. Capabilities are negotiated at runtime: a list that can't perform a mutation reports
//! [`Unsupported`] instead.
//!
//! # Error Handling
//! Every operation that can fail returns a [`ListError`]. The exceptions are conveniences whose
//! signatures leave no room for an error: [`Extend`] and [`FromIterator`] on [`ArrayList`] panic on
//! a value that is out of range for a narrow list, and [`Iter`] (with everything built on it, such
//! as `contains`, `equals` and formatting) panics when a sub-list's backing list was changed
//! elsewhere. Such failures are never swallowed.

pub mod contiguous;
pub mod random_access;
pub mod traits;

mod error;
mod primitive;
mod unmodifiable;

pub use contiguous::*;
pub use error::*;
pub use primitive::*;
pub use random_access::{Iter, ListIter, SubList};
pub use traits::*;
pub use unmodifiable::*;
