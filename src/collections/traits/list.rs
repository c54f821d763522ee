use super::{PrimitiveCollection, RandomAccessList};
use crate::collections::random_access::{ListIter, SubList};
use crate::collections::{ListError, Primitive};
use crate::util::result::ResultExtension;

/// Positional operations over a list, implemented for every [`RandomAccessList`].
///
/// # Panics
/// Operations that don't return a [`Result`] (`index_of`, `last_index_of`, `equals` and
/// `hash_code`) panic with the list's error when reading fails, most commonly a
/// [`ConcurrentModification`](crate::collections::ConcurrentModification) on a stale sub-list.
/// See [`Iter`](crate::collections::Iter).
pub trait PrimitiveList<T: Primitive>: PrimitiveCollection<T> {
    /// Returns the index of the first element that is the same as `value`.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayByteList, PrimitiveList};
    /// let list: ArrayByteList = [4, 2, 4].into_iter().collect();
    /// assert_eq!(list.index_of(4), Some(0));
    /// assert_eq!(list.index_of(7), None);
    /// ```
    fn index_of(&self, value: T) -> Option<usize> {
        self.iter().position(|element| element.same(value))
    }

    /// Returns the index of the last element that is the same as `value`, found by walking a
    /// cursor backwards from the end.
    ///
    /// # Panics
    /// Panics if the cursor fails, which for a well-behaved list only happens after a concurrent
    /// modification.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayByteList, PrimitiveList};
    /// let list: ArrayByteList = [4, 2, 4].into_iter().collect();
    /// assert_eq!(list.last_index_of(4), Some(2));
    /// ```
    fn last_index_of(&self, value: T) -> Option<usize> {
        let mut cursor = self.list_iter(self.len()).throw();
        while cursor.has_previous(self).throw() {
            if cursor.previous(self).throw().same(value) {
                return Some(cursor.next_index(self).throw());
            }
        }
        None
    }

    /// Returns a fail-fast cursor whose first call to `next` yields the element at `start`.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) unless
    /// `start <= len`.
    fn list_iter(&self, start: usize) -> Result<ListIter<T>, ListError> {
        ListIter::new(self, start)
    }

    /// Returns a view of the elements in `from..to`. Changes made through the view are made to
    /// this list, and the view is itself a list with sub-lists of its own.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) if `to > len` and
    /// with [`InvalidRange`](crate::collections::InvalidRange) if `from > to`.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayIntList, PrimitiveCollection, PrimitiveList, RandomAccessList};
    /// let mut list: ArrayIntList = (0..6).collect();
    /// let mut sub = list.sub_list(1, 4)?;
    /// assert_eq!(sub.remove_at(0)?, 1);
    /// sub.add(10)?;
    /// assert_eq!(list.to_string(), "[0, 2, 3, 10, 4, 5]");
    /// # Ok::<(), primitive_lists::collections::ListError>(())
    /// ```
    fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, T, Self>, ListError> {
        SubList::new(self, from, to)
    }

    /// Returns true if `other` has the same length and the same elements in the same order.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: RandomAccessList<T> + ?Sized,
    {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a.same(b))
    }

    /// Returns an order-sensitive hash of the elements, consistent with
    /// [`equals`](PrimitiveList::equals): `h = 31 * h + e.hash_code()` for each element, starting
    /// from `1`.
    fn hash_code(&self) -> i32 {
        self.iter().fold(1_i32, |hash, element| {
            hash.wrapping_mul(31).wrapping_add(element.hash_code())
        })
    }
}

impl<T: Primitive, L: RandomAccessList<T> + ?Sized> PrimitiveList<T> for L {}
