use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::collections::random_access::fmt_list;
use crate::collections::{ListError, Primitive, RandomAccessList, Unsupported};

/// A read-only decorator over another list.
///
/// Reads are forwarded to the wrapped list, including its modification count, so cursors created
/// through the decorator still notice changes made to the inner list. Every mutator fails with
/// [`Unsupported`], including those that would have no effect, like clearing an empty list.
///
/// # Examples
/// ```
/// # use primitive_lists::collections::{ArrayIntList, PrimitiveCollection, Unmodifiable};
/// let list: ArrayIntList = (0..3).collect();
/// let mut view = Unmodifiable::new(&list);
/// assert!(view.contains(2));
/// assert!(view.add(3).unwrap_err().is_unsupported());
/// ```
pub struct Unmodifiable<T, L> {
    pub(crate) inner: L,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Primitive, L: RandomAccessList<T>> Unmodifiable<T, L> {
    pub const fn new(inner: L) -> Unmodifiable<T, L> {
        Unmodifiable {
            inner,
            _phantom: PhantomData,
        }
    }

    pub const fn get_ref(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<T: Primitive, L: RandomAccessList<T>> RandomAccessList<T> for Unmodifiable<T, L> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        self.inner.get(index)
    }

    fn mod_count(&self) -> usize {
        self.inner.mod_count()
    }

    fn check_concurrent_modification(&self) -> Result<(), ListError> {
        self.inner.check_concurrent_modification()
    }

    fn remove_range(&mut self, _from: usize, _to: usize) -> Result<(), ListError> {
        Err(Unsupported::new("remove_range").into())
    }
}

/// Borrowed lists are lists too, which is what lets [`Unmodifiable`] wrap a reference.
impl<T: Primitive, L: RandomAccessList<T> + ?Sized> RandomAccessList<T> for &L {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        (**self).get(index)
    }

    fn mod_count(&self) -> usize {
        (**self).mod_count()
    }

    fn check_concurrent_modification(&self) -> Result<(), ListError> {
        (**self).check_concurrent_modification()
    }
}

impl<T: Primitive, L: RandomAccessList<T> + Debug> Debug for Unmodifiable<T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unmodifiable").field(&self.inner).finish()
    }
}

impl<T: Primitive, L: RandomAccessList<T>> Display for Unmodifiable<T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}
