//! The shared machinery behind every primitive list: a borrowing [`Iter`], the fail-fast
//! [`ListIter`] cursor and the [`SubList`] view.
//!
//! Everything here is written purely against [`RandomAccessList`], so it is shared by every list
//! type regardless of element type or storage.
//!
//! # Fail-fast Detection
//! Each list reports a modification count. Cursors and sub-lists remember the count they last saw
//! and compare it with the list's current count before doing anything, failing with
//! [`ConcurrentModification`] if it has moved. Changes made through the cursor or sub-list itself
//! resynchronize the remembered count, so only changes made elsewhere are reported. Detection is
//! best-effort, it relies on lists counting their own changes honestly.

mod cursor;
mod iter;
mod sub_list;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use sub_list::*;

use std::fmt::{self, Formatter};

use crate::collections::{
    ConcurrentModification, IndexOutOfBounds, InvalidRange, ListError, Primitive,
    PrimitiveCollection, RandomAccessList,
};

/// Checks that `index` refers to an existing element.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index >= len {
        return Err(IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Checks that `index` is a valid insertion point, which includes `len` itself.
pub(crate) const fn check_position(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index > len {
        return Err(IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Checks that `from..to` lies within a collection of `len` elements.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), ListError> {
    check_position(to, len)?;
    if from > to {
        return Err(InvalidRange { from, to }.into());
    }
    Ok(())
}

pub(crate) const fn check_mod_count(
    expected: usize,
    actual: usize,
) -> Result<(), ConcurrentModification> {
    if expected != actual {
        return Err(ConcurrentModification { expected, actual });
    }
    Ok(())
}

/// Writes a list as `[a, b, c]`, used by the [`Display`](std::fmt::Display) impls of the list
/// types.
pub(crate) fn fmt_list<T, L>(list: &L, f: &mut Formatter<'_>) -> fmt::Result
where
    T: Primitive,
    L: RandomAccessList<T> + ?Sized,
{
    write!(f, "[")?;
    for (i, element) in list.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, "]")
}
