use crate::collections::random_access::check_range;
use crate::collections::{ListError, Primitive, Unsupported};

/// Positional access to a sequence of primitive values.
///
/// Implementors supply [`len`](RandomAccessList::len) and [`get`](RandomAccessList::get). Lists
/// that can change override [`set`](RandomAccessList::set), [`insert`](RandomAccessList::insert)
/// and [`remove_at`](RandomAccessList::remove_at) as their capabilities allow, any that aren't
/// overridden fail with [`Unsupported`]. Lists that change structurally must also report a
/// modification count that increases with every change, which is how cursors and sub-lists notice
/// that the list has moved under them.
///
/// This trait is dyn-compatible, so `&mut dyn RandomAccessList<T>` can serve as a list handle
/// whose capabilities are only known at runtime.
pub trait RandomAccessList<T: Primitive> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Fails with [`IndexOutOfBounds`](crate::collections::IndexOutOfBounds) if `index >= len`.
    fn get(&self, index: usize) -> Result<T, ListError>;

    /// Returns the number of structural modifications made to this list. Lists that never change
    /// can leave this as `0`.
    fn mod_count(&self) -> usize {
        0
    }

    /// Fails with [`ConcurrentModification`](crate::collections::ConcurrentModification) if this
    /// list is a view whose backing list changed underneath it. Plain lists have nothing to check.
    fn check_concurrent_modification(&self) -> Result<(), ListError> {
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let _ = (index, value);
        Err(Unsupported::new("set").into())
    }

    /// Inserts `value` at `index`, shifting all following elements up by one. `index` may equal
    /// `len`, which appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let _ = (index, value);
        Err(Unsupported::new("insert").into())
    }

    /// Removes and returns the element at `index`, shifting all following elements down by one.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let _ = index;
        Err(Unsupported::new("remove_at").into())
    }

    /// Removes every element in `from..to`.
    ///
    /// The default removes one element at a time from the back of the range, implementors that
    /// can shift a block at once should override it.
    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check_concurrent_modification()?;
        check_range(from, to, self.len())?;
        for index in (from..to).rev() {
            self.remove_at(index)?;
        }
        Ok(())
    }
}
