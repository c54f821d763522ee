use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::marker::PhantomData;

use crate::collections::random_access::{check_index, check_position, check_range, fmt_list};
use crate::collections::{
    ListError, Primitive, PrimitiveCollection, PrimitiveList, RandomAccessList, Repr,
};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A growable list of primitive values, stored contiguously and unboxed.
///
/// `T` is the logical element type and `C` the cell that stores it. For most lists the two are
/// the same, but a narrower cell can be used to save space for values with a restricted range (see
/// [`ArrayUnsignedByteList`](super::ArrayUnsignedByteList) and
/// [`ArrayUnsignedShortList`](super::ArrayUnsignedShortList)). Writing a value that the cell can't
/// represent fails with [`ValueOutOfRange`](crate::collections::ValueOutOfRange).
///
/// Every structural change (including `set` and explicit capacity changes) increases the list's
/// modification count by exactly one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `set` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove_at` | `O(n-i)` |
/// | `remove_range` | `O(n-i)` |
/// | `ensure_capacity` | `O(n)`**, `O(1)` |
/// | `trim_to_size` | `O(n)`**, `O(1)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `add` will take `O(n)`.
///
/// \** Only when the capacity actually changes.
pub struct ArrayList<T, C = T> {
    pub(crate) data: Box<[C]>,
    pub(crate) len: usize,
    pub(crate) mod_count: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T: Primitive, C: Repr<T>> ArrayList<T, C> {
    /// Creates a new, empty ArrayList with capacity 0. Memory will be allocated on the first
    /// insertion.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayByteList, RandomAccessList};
    /// let list = ArrayByteList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn new() -> ArrayList<T, C> {
        ArrayList::with_capacity(0)
    }

    /// Creates a new, empty ArrayList with capacity exactly equal to `cap`.
    pub fn with_capacity(cap: usize) -> ArrayList<T, C> {
        ArrayList {
            data: alloc_cells(cap),
            len: 0,
            mod_count: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates an ArrayList holding a copy of `values`, with capacity equal to their length.
    ///
    /// # Errors
    /// Fails with [`ValueOutOfRange`](crate::collections::ValueOutOfRange) if any value can't be
    /// stored in the list's cells.
    pub fn from_slice(values: &[T]) -> Result<ArrayList<T, C>, ListError> {
        let data = values
            .iter()
            .map(|value| C::encode(*value))
            .collect::<Result<Box<[C]>, _>>()?;

        Ok(ArrayList {
            len: data.len(),
            data,
            mod_count: 0,
            _phantom: PhantomData,
        })
    }

    /// Creates an ArrayList holding a copy of the elements of `list`.
    ///
    /// # Errors
    /// Fails with [`ValueOutOfRange`](crate::collections::ValueOutOfRange) if any element can't be
    /// stored in the list's cells.
    pub fn from_list<L>(list: &L) -> Result<ArrayList<T, C>, ListError>
    where
        L: RandomAccessList<T> + ?Sized,
    {
        list.check_concurrent_modification()?;
        let mut copy: ArrayList<T, C> = ArrayList::with_capacity(list.len());
        for value in list.iter() {
            copy.push_cell(C::encode(value)?);
        }
        Ok(copy)
    }

    /// Returns the number of elements the ArrayList can hold without reallocating. Unlike
    /// [`Vec`], the capacity is exactly the value that the growth policy or the caller chose.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Ensures that the ArrayList can hold at least `min_cap` elements without reallocating.
    /// Counts as a modification whether or not the capacity changes.
    pub fn ensure_capacity(&mut self, min_cap: usize) {
        self.mod_count += 1;
        self.grow_for(min_cap);
    }

    /// Shrinks the capacity to exactly the current length. Counts as a modification whether or
    /// not the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use primitive_lists::collections::{ArrayByteList, PrimitiveCollection, RandomAccessList};
    /// let mut list = ArrayByteList::with_capacity(10);
    /// list.add_all([0, 1, 2])?;
    /// list.remove_at(1)?;
    /// list.trim_to_size();
    /// assert_eq!(list.capacity(), 2);
    /// assert_eq!(list.to_string(), "[0, 2]");
    /// # Ok::<(), primitive_lists::collections::ListError>(())
    /// ```
    pub fn trim_to_size(&mut self) {
        self.mod_count += 1;
        if self.len < self.capacity() {
            self.realloc(self.len);
        }
    }

    /// Grows the backing store so that it holds at least `required` cells. New capacity is the
    /// larger of `required` and one and a half times the current capacity plus one.
    pub(crate) fn grow_for(&mut self, required: usize) {
        let cap = self.capacity();
        if required > cap {
            self.realloc(cmp::max(cap * 3 / 2 + 1, required));
        }
    }

    pub(crate) fn realloc(&mut self, new_cap: usize) {
        log::trace!("reallocating array list from {} to {} cells", self.capacity(), new_cap);

        let mut data = alloc_cells(new_cap);
        data[..self.len].copy_from_slice(&self.data[..self.len]);
        self.data = data;
    }

    /// Appends an already encoded cell without touching the modification count.
    fn push_cell(&mut self, cell: C) {
        self.grow_for(self.len + 1);
        self.data[self.len] = cell;
        self.len += 1;
    }
}

fn alloc_cells<C: Copy + Default>(cap: usize) -> Box<[C]> {
    iter::repeat_n(C::default(), cap).collect()
}

impl<T: Primitive, C: Repr<T>> RandomAccessList<T> for ArrayList<T, C> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;
        Ok(self.data[index].decode())
    }

    fn mod_count(&self) -> usize {
        self.mod_count
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.len)?;
        let cell = C::encode(value)?;

        self.mod_count += 1;
        let old = self.data[index];
        self.data[index] = cell;
        Ok(old.decode())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position(index, self.len)?;
        let cell = C::encode(value)?;

        self.mod_count += 1;
        self.grow_for(self.len + 1);
        self.data.copy_within(index..self.len, index + 1);
        self.data[index] = cell;
        self.len += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;

        self.mod_count += 1;
        let removed = self.data[index];
        self.data.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(removed.decode())
    }

    fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        check_range(from, to, self.len)?;

        self.mod_count += 1;
        self.data.copy_within(to..self.len, from);
        self.len -= to - from;
        Ok(())
    }
}

impl<T: Primitive, C: Repr<T>> Default for ArrayList<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Primitive, C: Repr<T>> Clone for ArrayList<T, C> {
    /// Copies the elements and capacity. The copy starts with a fresh modification count.
    fn clone(&self) -> Self {
        ArrayList {
            data: self.data.clone(),
            len: self.len,
            mod_count: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T: Primitive, C: Repr<T>> TryFrom<&[T]> for ArrayList<T, C> {
    type Error = ListError;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        ArrayList::from_slice(value)
    }
}

impl<T: Primitive, C: Repr<T>> Extend<T> for ArrayList<T, C> {
    /// # Panics
    /// Panics if a value can't be stored in the list's cells.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow_for(self.len + iter.size_hint().0);

        for value in iter {
            self.add(value).throw();
        }
    }
}

impl<T: Primitive, C: Repr<T>> FromIterator<T> for ArrayList<T, C> {
    /// # Panics
    /// Panics if a value can't be stored in the list's cells.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list: ArrayList<T, C> = ArrayList::new();
        list.extend(iter);
        // A freshly collected list hasn't been modified by anyone yet.
        list.mod_count = 0;
        list
    }
}

impl<T: Primitive, C: Repr<T>> PartialEq for ArrayList<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Primitive, C: Repr<T>> Eq for ArrayList<T, C> {}

impl<T: Primitive, C: Repr<T>> Hash for ArrayList<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<T: Primitive, C: Repr<T>> Debug for ArrayList<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Primitive, C: Repr<T>> Display for ArrayList<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}
