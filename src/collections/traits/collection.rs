use super::RandomAccessList;
use crate::collections::random_access::{Iter, ListIter};
use crate::collections::{ListError, Primitive};

/// Set-like operations over a list's elements, built only on iteration and length.
///
/// This is implemented for every [`RandomAccessList`]. Operations that remove elements do so
/// through a [`ListIter`], so they work for any list that supports
/// [`remove_at`](RandomAccessList::remove_at) and fail with
/// [`Unsupported`](crate::collections::Unsupported) for any that doesn't.
///
/// # Panics
/// Operations that don't return a [`Result`] (`is_empty`, `iter`, `contains`, `contains_all` and
/// `to_array`) panic with the list's error when reading fails, most commonly a
/// [`ConcurrentModification`](crate::collections::ConcurrentModification) on a stale sub-list.
/// Fallible operations report the same failure as an error.
pub trait PrimitiveCollection<T: Primitive>: RandomAccessList<T> {
    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a borrowing iterator over the collection's elements, by value.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayIntList, PrimitiveCollection};
    /// let list: ArrayIntList = (1..=3).collect();
    /// assert_eq!(list.iter().rev().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    fn iter(&self) -> Iter<'_, T, Self> {
        Iter::new(self)
    }

    /// Returns a fail-fast cursor positioned before the first element. Equivalent to
    /// [`list_iter(0)`](crate::collections::PrimitiveList::list_iter).
    fn cursor(&self) -> ListIter<T> {
        ListIter::at_start(self)
    }

    fn contains(&self, value: T) -> bool {
        self.iter().any(|element| element.same(value))
    }

    fn contains_all<C>(&self, other: &C) -> bool
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        other.iter().all(|element| self.contains(element))
    }

    /// Appends `value` to the end of the collection. Returns true because the collection always
    /// changes.
    fn add(&mut self, value: T) -> Result<bool, ListError> {
        self.check_concurrent_modification()?;
        self.insert(self.len(), value)?;
        Ok(true)
    }

    /// Appends every value in order. Returns true if the collection changed.
    fn add_all<I>(&mut self, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.add(value)?;
        }
        Ok(changed)
    }

    /// Removes the first element that is the same as `value`. Returns true if one was found.
    fn remove(&mut self, value: T) -> Result<bool, ListError> {
        let mut cursor = self.cursor();
        while cursor.has_next(&*self)? {
            if cursor.next(&*self)?.same(value) {
                cursor.remove(&mut *self)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Removes every element that is also contained in `other`. Returns true if the collection
    /// changed.
    fn remove_all<C>(&mut self, other: &C) -> Result<bool, ListError>
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        self.remove_where(&mut |element| other.contains(element))
    }

    /// Removes every element that isn't contained in `other`. Returns true if the collection
    /// changed.
    fn retain_all<C>(&mut self, other: &C) -> Result<bool, ListError>
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        self.remove_where(&mut |element| !other.contains(element))
    }

    /// Removes every element matching `predicate`, front to back. Returns true if any were
    /// removed.
    fn remove_where(&mut self, predicate: &mut dyn FnMut(T) -> bool) -> Result<bool, ListError> {
        let mut changed = false;
        let mut cursor = self.cursor();
        while cursor.has_next(&*self)? {
            if predicate(cursor.next(&*self)?) {
                cursor.remove(&mut *self)?;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Removes every element.
    fn clear(&mut self) -> Result<(), ListError> {
        self.check_concurrent_modification()?;
        self.remove_range(0, self.len())
    }

    /// Copies the elements into a new boxed slice.
    fn to_array(&self) -> Box<[T]> {
        self.iter().collect()
    }
}

impl<T: Primitive, L: RandomAccessList<T> + ?Sized> PrimitiveCollection<T> for L {}
