use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::random_access::{check_index, fmt_list};
use crate::collections::{ListError, Primitive, PrimitiveCollection, RandomAccessList, Unsupported};
use crate::util::fmt::DebugEntries;

/// A read-only list over a borrowed slice.
///
/// Every mutator fails with [`Unsupported`], which makes SliceList a cheap way to hand existing
/// data to code written against [`RandomAccessList`] without copying it.
///
/// # Examples
/// ```
/// # use primitive_lists::collections::{PrimitiveList, RandomAccessList, SliceList};
/// let data = [1.5_f64, 2.5, 1.5];
/// let mut list = SliceList::new(&data);
/// assert_eq!(list.last_index_of(1.5), Some(2));
/// assert!(list.set(0, 0.0).unwrap_err().is_unsupported());
/// ```
#[derive(Clone, Copy)]
pub struct SliceList<'a, T> {
    pub(crate) slice: &'a [T],
}

impl<'a, T: Primitive> SliceList<'a, T> {
    pub const fn new(slice: &'a [T]) -> SliceList<'a, T> {
        SliceList { slice }
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<'a, T: Primitive> RandomAccessList<T> for SliceList<'a, T> {
    fn len(&self) -> usize {
        self.slice.len()
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        check_index(index, self.slice.len())?;
        Ok(self.slice[index])
    }

    fn remove_range(&mut self, _from: usize, _to: usize) -> Result<(), ListError> {
        Err(Unsupported::new("remove_range").into())
    }
}

impl<'a, T: Primitive> From<&'a [T]> for SliceList<'a, T> {
    fn from(value: &'a [T]) -> Self {
        SliceList::new(value)
    }
}

impl<'a, T: Primitive> Debug for SliceList<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceList")
            .field("contents", &DebugEntries(self.iter()))
            .finish()
    }
}

impl<'a, T: Primitive> Display for SliceList<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}
