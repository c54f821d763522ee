//! The traits shared by every primitive list.
//!
//! [`RandomAccessList`] is the contract that storage types implement: a length, positional reads
//! and, optionally, positional writes. [`PrimitiveCollection`] and [`PrimitiveList`] are provided
//! for every implementor of that contract, so a new list type gets iteration, searching, bulk
//! operations, sub-lists, equality and hashing without writing any of it.

mod collection;
mod list;
mod random_access;

pub use collection::*;
pub use list::*;
pub use random_access::*;
