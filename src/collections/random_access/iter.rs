use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::check_mod_count;
use crate::collections::{Primitive, RandomAccessList};
use crate::util::result::ResultExtension;

/// A borrowing iterator over the elements of a [`RandomAccessList`], yielding them by value. See
/// [`PrimitiveCollection::iter`](crate::collections::PrimitiveCollection::iter).
///
/// The shared borrow rules out changes made through the list itself, but a view's backing list or
/// a list that counts its changes in shared state can still move. The iterator checks for that
/// when it is created and before every element.
///
/// # Panics
/// Creating or advancing the iterator panics with
/// [`ConcurrentModification`](crate::collections::ConcurrentModification) if the list changed
/// since the iterator was created, and with the list's own error if it fails to `get` an index
/// within its length. The same goes for every operation built on iteration, such as `contains`,
/// `index_of`, `equals`, `hash_code`, `to_array` and formatting. Use a
/// [`ListIter`](super::ListIter) to receive these failures as errors instead.
pub struct Iter<'a, T, L: ?Sized> {
    pub(crate) list: &'a L,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) expected_mod_count: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Iter<'a, T, L> {
    #[track_caller]
    pub(crate) fn new(list: &'a L) -> Iter<'a, T, L> {
        list.check_concurrent_modification().throw();
        Iter {
            list,
            front: 0,
            back: list.len(),
            expected_mod_count: list.mod_count(),
            _phantom: PhantomData,
        }
    }

    #[track_caller]
    fn element(&self, index: usize) -> T {
        check_mod_count(self.expected_mod_count, self.list.mod_count()).throw();
        self.list.get(index).throw()
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> Iterator for Iter<'a, T, L> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let value = self.element(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> DoubleEndedIterator for Iter<'a, T, L> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let value = self.element(self.back - 1);
        self.back -= 1;
        Some(value)
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> ExactSizeIterator for Iter<'a, T, L> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T: Primitive, L: RandomAccessList<T> + ?Sized> FusedIterator for Iter<'a, T, L> {}

impl<'a, T, L: ?Sized> Clone for Iter<'a, T, L> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            expected_mod_count: self.expected_mod_count,
            _phantom: PhantomData,
        }
    }
}
