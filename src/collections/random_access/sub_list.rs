use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{check_index, check_mod_count, check_position, check_range, fmt_list};
use crate::collections::{
    ListError, Primitive, PrimitiveCollection, PrimitiveList, RandomAccessList,
};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A view of a contiguous range of a parent list. See
/// [`PrimitiveList::sub_list`](crate::collections::PrimitiveList::sub_list).
///
/// Index `i` of the view is index `offset + i` of the parent. Changes made through the view are
/// made to the parent, and the view's length follows any insertions or removals it performs.
///
/// The view holds an exclusive borrow of its parent, so the parent can't be touched directly
/// while the view exists. The view still checks the parent's modification count before each
/// operation, which catches parents whose count can move through shared state, and keeps a count
/// of its own so that cursors and sub-lists created from the view are fail-fast too.
pub struct SubList<'a, T, L: ?Sized> {
    pub(crate) parent: &'a mut L,
    pub(crate) offset: usize,
    pub(crate) limit: usize,
    pub(crate) expected_parent_mod_count: usize,
    pub(crate) mod_count: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> SubList<'a, T, L> {
    /// Creates a view of `parent[from..to]`.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) if `to` exceeds the
    /// parent's length and with [`InvalidRange`](crate::collections::InvalidRange) if
    /// `from > to`.
    pub fn new(parent: &'a mut L, from: usize, to: usize) -> Result<SubList<'a, T, L>, ListError> {
        parent.check_concurrent_modification()?;
        check_range(from, to, parent.len())?;

        let expected_parent_mod_count = parent.mod_count();
        Ok(SubList {
            parent,
            offset: from,
            limit: to - from,
            expected_parent_mod_count,
            mod_count: 0,
            _phantom: PhantomData,
        })
    }

    /// Returns the index in the parent list of this view's first element.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Checks every list between this view and the backing list, outermost first.
    fn check_parent(&self) -> Result<(), ListError> {
        self.parent.check_concurrent_modification()?;
        check_mod_count(self.expected_parent_mod_count, self.parent.mod_count())?;
        Ok(())
    }

    /// Records a change made through this view.
    fn resync(&mut self) {
        self.expected_parent_mod_count = self.parent.mod_count();
        self.mod_count += 1;
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> RandomAccessList<T> for SubList<'a, T, L> {
    /// # Panics
    /// Panics with [`ConcurrentModification`](crate::collections::ConcurrentModification) if the
    /// parent changed outside of this view.
    fn len(&self) -> usize {
        self.check_parent().throw();
        self.limit
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        self.check_parent()?;
        check_index(index, self.limit)?;
        self.parent.get(self.offset + index)
    }

    fn mod_count(&self) -> usize {
        self.mod_count
    }

    fn check_concurrent_modification(&self) -> Result<(), ListError> {
        self.check_parent()
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.check_parent()?;
        check_index(index, self.limit)?;

        let old = self.parent.set(self.offset + index, value)?;
        self.resync();
        Ok(old)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_parent()?;
        check_position(index, self.limit)?;

        self.parent.insert(self.offset + index, value)?;
        self.limit += 1;
        self.resync();
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_parent()?;
        check_index(index, self.limit)?;

        let removed = self.parent.remove_at(self.offset + index)?;
        self.limit -= 1;
        self.resync();
        Ok(removed)
    }

    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check_parent()?;
        check_range(from, to, self.limit)?;

        self.parent.remove_range(self.offset + from, self.offset + to)?;
        self.limit -= to - from;
        self.resync();
        Ok(())
    }
}

impl<'a, 'b, T, L, O> PartialEq<SubList<'b, T, O>> for SubList<'a, T, L>
where
    T: Primitive,
    L: RandomAccessList<T> + ?Sized,
    O: RandomAccessList<T> + ?Sized,
{
    fn eq(&self, other: &SubList<'b, T, O>) -> bool {
        self.equals(other)
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Eq for SubList<'a, T, L> {}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Hash for SubList<'a, T, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Display for SubList<'a, T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Debug for SubList<'a, T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubList")
            .field("contents", &DebugEntries(self.iter()))
            .field("offset", &self.offset)
            .field("len", &self.limit)
            .finish()
    }
}
