use std::marker::PhantomData;

use super::{check_mod_count, check_position};
use crate::collections::{
    ListError, NoLastElement, NoSuchElement, Primitive, RandomAccessList,
};

/// A bidirectional, fail-fast cursor over a [`RandomAccessList`].
///
/// A ListIter doesn't borrow its list. Instead, every method takes the list as an argument, which
/// lets the list be used (and changed) between calls. Any structural change that isn't made
/// through the cursor itself is detected on the cursor's next call, which fails with
/// [`ConcurrentModification`] rather than reading stale positions. A cursor must only ever be
/// driven with the list that created it.
///
/// Conceptually the cursor sits between two elements: [`next`](ListIter::next) returns the one
/// after it and [`previous`](ListIter::previous) the one before it. [`set`](ListIter::set) and
/// [`remove`](ListIter::remove) act on whichever element was returned last, and are only valid
/// until the cursor next changes the list.
///
/// # Examples
/// ```
/// # use primitive_lists::collections::{ArrayIntList, PrimitiveCollection, RandomAccessList};
/// let mut list: ArrayIntList = (1..=4).collect();
/// let mut cursor = list.cursor();
/// while cursor.has_next(&list)? {
///     if cursor.next(&list)? % 2 == 0 {
///         cursor.remove(&mut list)?;
///     }
/// }
/// assert_eq!(list.to_string(), "[1, 3]");
///
/// let mut stale = list.cursor();
/// list.add(5)?;
/// assert!(stale.next(&list).unwrap_err().is_concurrent_modification());
/// # Ok::<(), primitive_lists::collections::ListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ListIter<T> {
    pub(crate) next_index: usize,
    pub(crate) last_returned: Option<usize>,
    pub(crate) expected_mod_count: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Primitive> ListIter<T> {
    /// Creates a cursor over `list` positioned before the element at `start`.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) unless
    /// `start <= list.len()`.
    pub fn new<L>(list: &L, start: usize) -> Result<ListIter<T>, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        list.check_concurrent_modification()?;
        check_position(start, list.len())?;
        Ok(ListIter {
            next_index: start,
            last_returned: None,
            expected_mod_count: list.mod_count(),
            _phantom: PhantomData,
        })
    }

    pub(crate) fn at_start<L>(list: &L) -> ListIter<T>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        ListIter {
            next_index: 0,
            last_returned: None,
            expected_mod_count: list.mod_count(),
            _phantom: PhantomData,
        }
    }

    pub fn has_next<L>(&self, list: &L) -> Result<bool, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        Ok(self.next_index < list.len())
    }

    /// Returns the element after the cursor and moves the cursor past it.
    ///
    /// # Errors
    /// Fails with [`NoSuchElement`] if the cursor is at the end of the list.
    pub fn next<L>(&mut self, list: &L) -> Result<T, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        if self.next_index >= list.len() {
            return Err(NoSuchElement.into());
        }

        let value = list.get(self.next_index)?;
        self.last_returned = Some(self.next_index);
        self.next_index += 1;
        Ok(value)
    }

    pub fn has_previous<L>(&self, list: &L) -> Result<bool, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        Ok(self.next_index > 0)
    }

    /// Returns the element before the cursor and moves the cursor back past it.
    ///
    /// # Errors
    /// Fails with [`NoSuchElement`] if the cursor is at the start of the list.
    pub fn previous<L>(&mut self, list: &L) -> Result<T, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        let Some(index) = self.next_index.checked_sub(1) else {
            return Err(NoSuchElement.into());
        };

        let value = list.get(index)?;
        self.last_returned = Some(index);
        self.next_index = index;
        Ok(value)
    }

    /// Returns the index of the element that [`next`](ListIter::next) would return.
    pub fn next_index<L>(&self, list: &L) -> Result<usize, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        Ok(self.next_index)
    }

    /// Returns the index of the element that [`previous`](ListIter::previous) would return, or
    /// `None` at the start of the list.
    pub fn previous_index<L>(&self, list: &L) -> Result<Option<usize>, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(list)?;
        Ok(self.next_index.checked_sub(1))
    }

    /// Replaces the element last returned by `next` or `previous`.
    ///
    /// # Errors
    /// Fails with [`NoLastElement`] if no element has been returned since the cursor was created
    /// or last changed the list, or with whatever `list.set` fails with.
    pub fn set<L>(&mut self, list: &mut L, value: T) -> Result<(), ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(&*list)?;
        let index = self.last_returned.ok_or(NoLastElement)?;

        list.set(index, value)?;
        self.last_returned = None;
        self.resync(&*list);
        Ok(())
    }

    /// Inserts `value` immediately before the cursor, so that a following `next` is unaffected
    /// and a following `previous` returns the new value.
    pub fn add<L>(&mut self, list: &mut L, value: T) -> Result<(), ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(&*list)?;

        list.insert(self.next_index, value)?;
        self.next_index += 1;
        self.last_returned = None;
        self.resync(&*list);
        Ok(())
    }

    /// Removes the element last returned by `next` or `previous`.
    ///
    /// # Errors
    /// Fails with [`NoLastElement`] if no element has been returned since the cursor was created
    /// or last changed the list, or with whatever `list.remove_at` fails with.
    pub fn remove<L>(&mut self, list: &mut L) -> Result<(), ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.check_mod_count(&*list)?;
        let index = self.last_returned.ok_or(NoLastElement)?;

        list.remove_at(index)?;
        // After `next` the removed element sat before the cursor, after `previous` it sat after.
        if index < self.next_index {
            self.next_index -= 1;
        }
        self.last_returned = None;
        self.resync(&*list);
        Ok(())
    }

    fn check_mod_count<L>(&self, list: &L) -> Result<(), ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        list.check_concurrent_modification()?;
        check_mod_count(self.expected_mod_count, list.mod_count())?;
        Ok(())
    }

    fn resync<L>(&mut self, list: &L)
    where
        L: RandomAccessList<T> + ?Sized,
    {
        self.expected_mod_count = list.mod_count();
    }
}
