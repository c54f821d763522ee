#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::{
    ArrayIntList, ConcurrentModification, IndexOutOfBounds, InvalidRange, ListError,
    NoLastElement, NoSuchElement, PrimitiveCollection, PrimitiveList, RandomAccessList,
    SliceList, Unmodifiable,
};
use crate::util::panic::assert_panics;

/// A list whose modification count lives outside of it, so that tests can move the count while a
/// sub-list holds the only borrow.
struct SharedCountList {
    data: Vec<i32>,
    mod_count: Rc<Cell<usize>>,
}

impl SharedCountList {
    fn new(data: impl IntoIterator<Item = i32>) -> SharedCountList {
        SharedCountList {
            data: data.into_iter().collect(),
            mod_count: Rc::new(Cell::new(0)),
        }
    }

    fn bump(&self) {
        self.mod_count.set(self.mod_count.get() + 1);
    }
}

impl RandomAccessList<i32> for SharedCountList {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<i32, ListError> {
        check_index(index, self.data.len())?;
        Ok(self.data[index])
    }

    fn mod_count(&self) -> usize {
        self.mod_count.get()
    }

    fn insert(&mut self, index: usize, value: i32) -> Result<(), ListError> {
        check_position(index, self.data.len())?;
        self.data.insert(index, value);
        self.bump();
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<i32, ListError> {
        check_index(index, self.data.len())?;
        self.bump();
        Ok(self.data.remove(index))
    }
}

#[test]
fn test_cursor_walk() {
    let list: ArrayIntList = (1..=3).collect();
    let mut cursor = list.cursor();

    assert_eq!(cursor.has_previous(&list), Ok(false));
    assert_eq!(cursor.previous_index(&list), Ok(None));
    assert_eq!(
        cursor.previous(&list),
        Err(ListError::NoSuchElement(NoSuchElement))
    );

    let mut forward = Vec::new();
    while cursor.has_next(&list).unwrap() {
        forward.push(cursor.next(&list).unwrap());
    }
    assert_eq!(forward, [1, 2, 3]);
    assert_eq!(cursor.next_index(&list), Ok(3));
    assert_eq!(cursor.previous_index(&list), Ok(Some(2)));
    assert!(
        cursor.next(&list).unwrap_err().is_no_such_element(),
        "Moving past the end should fail."
    );

    assert_eq!(cursor.previous(&list), Ok(3));
    assert_eq!(cursor.previous(&list), Ok(2));
    assert_eq!(cursor.next(&list), Ok(2), "Changing direction returns the same element.");
}

#[test]
fn test_list_iter_start() {
    let list: ArrayIntList = (0..4).collect();

    let mut cursor = list.list_iter(2).unwrap();
    assert_eq!(cursor.next(&list), Ok(2));

    let end = list.list_iter(4).unwrap();
    assert_eq!(end.has_next(&list), Ok(false));
    assert_eq!(end.has_previous(&list), Ok(true));

    assert_eq!(
        list.list_iter(5).unwrap_err(),
        ListError::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 })
    );
}

#[test]
fn test_cursor_last_returned() {
    let mut list: ArrayIntList = (1..=3).collect();
    let mut cursor = list.cursor();

    assert_eq!(
        cursor.set(&mut list, 9),
        Err(ListError::NoLastElement(NoLastElement)),
        "A fresh cursor has nothing to set."
    );
    assert!(cursor.remove(&mut list).unwrap_err().is_no_last_element());

    cursor.next(&list).unwrap();
    cursor.set(&mut list, 10).unwrap();
    assert_eq!(list.get(0), Ok(10));
    assert!(
        cursor.set(&mut list, 11).unwrap_err().is_no_last_element(),
        "Set should consume the last returned element."
    );
    assert!(cursor.remove(&mut list).unwrap_err().is_no_last_element());

    cursor.next(&list).unwrap();
    cursor.add(&mut list, 5).unwrap();
    assert!(
        cursor.remove(&mut list).unwrap_err().is_no_last_element(),
        "Add should consume the last returned element."
    );
    assert_eq!(list.to_string(), "[10, 2, 5, 3]");
}

#[test]
fn test_cursor_remove_position() {
    let mut list: ArrayIntList = (0..5).collect();
    let mut cursor = list.cursor();

    cursor.next(&list).unwrap();
    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(
        cursor.next_index(&list),
        Ok(1),
        "Removing after next should step the cursor back."
    );
    assert_eq!(cursor.next(&list), Ok(2));

    cursor.previous(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(
        cursor.next_index(&list),
        Ok(1),
        "Removing after previous should leave the cursor where it is."
    );
    assert_eq!(cursor.next(&list), Ok(3));
    assert_eq!(list.to_string(), "[0, 3, 4]");
}

#[test]
fn test_cursor_add() {
    let mut list: ArrayIntList = [1, 3].into_iter().collect();
    let mut cursor = list.cursor();

    cursor.next(&list).unwrap();
    cursor.add(&mut list, 2).unwrap();
    assert_eq!(cursor.next(&list), Ok(3), "Add shouldn't affect a following next.");
    cursor.previous(&list).unwrap();
    assert_eq!(cursor.previous(&list), Ok(2), "Previous should return the added element.");

    let mut end = list.list_iter(list.len()).unwrap();
    end.add(&mut list, 4).unwrap();
    assert_eq!(list.to_string(), "[1, 2, 3, 4]");
}

#[test]
fn test_fail_fast() {
    let mut list: ArrayIntList = (0..3).collect();
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();

    list.add(3).unwrap();

    assert!(cursor.has_next(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.next(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.has_previous(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.previous(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.next_index(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.previous_index(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.set(&mut list, 0).unwrap_err().is_concurrent_modification());
    assert!(cursor.add(&mut list, 0).unwrap_err().is_concurrent_modification());
    assert_eq!(
        cursor.remove(&mut list),
        Err(ListError::ConcurrentModification(ConcurrentModification {
            expected: 0,
            actual: 1,
        }))
    );
    assert_eq!(list.len(), 4, "Failed cursor calls shouldn't change the list.");
}

#[test]
fn test_fail_fast_own_changes() {
    let mut list: ArrayIntList = (0..6).collect();
    let mut cursor = list.cursor();
    let mut other = list.cursor();

    while cursor.has_next(&list).unwrap() {
        let value = cursor.next(&list).unwrap();
        if value % 2 == 0 {
            cursor.remove(&mut list).unwrap();
        } else {
            cursor.set(&mut list, value * 10).unwrap();
        }
    }
    assert_eq!(list.to_string(), "[10, 30, 50]");

    assert!(
        other.next(&list).unwrap_err().is_concurrent_modification(),
        "Changes by one cursor should trip every other cursor."
    );
}

#[test]
fn test_sub_list_translation() {
    let mut list: ArrayIntList = (0..10).collect();
    let mut sub = list.sub_list(2, 6).unwrap();

    assert_eq!(sub.len(), 4);
    assert_eq!(sub.offset(), 2);
    assert_eq!(sub.get(0), Ok(2));
    assert_eq!(sub.get(3), Ok(5));
    assert!(sub.get(4).unwrap_err().is_index_out_of_bounds());
    assert!(sub.insert(5, 0).unwrap_err().is_index_out_of_bounds());

    assert_eq!(sub.set(1, 30), Ok(3));
    assert_eq!(sub.remove_at(0), Ok(2));
    sub.insert(3, 55).unwrap();
    sub.add(56).unwrap();
    assert_eq!(sub.len(), 5);
    assert_eq!(sub.to_string(), "[30, 4, 5, 55, 56]");
    assert_eq!(sub.index_of(55), Some(3));

    sub.remove_range(1, 3).unwrap();
    assert_eq!(sub.to_string(), "[30, 55, 56]");

    assert_eq!(list.to_string(), "[0, 1, 30, 55, 56, 6, 7, 8, 9]");
}

#[test]
fn test_sub_list_bounds() {
    let mut list: ArrayIntList = (0..3).collect();

    assert_eq!(
        list.sub_list(0, 4).unwrap_err(),
        ListError::IndexOutOfBounds(IndexOutOfBounds { index: 4, len: 3 })
    );
    assert_eq!(
        list.sub_list(2, 1).unwrap_err(),
        ListError::InvalidRange(InvalidRange { from: 2, to: 1 })
    );

    let mut empty = list.sub_list(3, 3).unwrap();
    assert!(empty.is_empty());
    empty.add(3).unwrap();
    assert_eq!(list.to_string(), "[0, 1, 2, 3]");
}

#[test]
fn test_nested_sub_lists() {
    let mut list: ArrayIntList = (0..10).collect();
    {
        let mut outer = list.sub_list(1, 9).unwrap();
        {
            let mut inner = outer.sub_list(2, 5).unwrap();
            assert_eq!(inner.get(0), Ok(3));
            inner.clear().unwrap();
            inner.add(-1).unwrap();
        }
        assert_eq!(outer.len(), 6, "The outer view should follow changes made by the inner.");
        assert_eq!(outer.to_string(), "[1, 2, -1, 6, 7, 8]");
    }
    assert_eq!(list.to_string(), "[0, 1, 2, -1, 6, 7, 8, 9]");
}

#[test]
fn test_sub_list_cursor() {
    let mut list: ArrayIntList = (0..6).collect();
    let mut sub = list.sub_list(1, 5).unwrap();

    let mut cursor = sub.cursor();
    while cursor.has_next(&sub).unwrap() {
        if cursor.next(&sub).unwrap() % 2 == 1 {
            cursor.remove(&mut sub).unwrap();
        }
    }
    assert_eq!(sub.to_string(), "[2, 4]");

    let mut stale = sub.cursor();
    sub.add(7).unwrap();
    assert!(stale.next(&sub).unwrap_err().is_concurrent_modification());
    assert_eq!(sub.last_index_of(7), Some(2));

    assert_eq!(list.to_string(), "[0, 2, 4, 7, 5]");
}

#[test]
fn test_sub_list_parent_check() {
    let mut list = SharedCountList::new(0..5);
    let counter = Rc::clone(&list.mod_count);

    let mut sub = list.sub_list(1, 4).unwrap();
    sub.remove_at(0).unwrap();
    assert_eq!(sub.get(0), Ok(2), "Changes through the view shouldn't trip it.");

    counter.set(counter.get() + 1);
    assert!(sub.get(0).unwrap_err().is_concurrent_modification());
    assert!(sub.insert(0, 0).unwrap_err().is_concurrent_modification());
    assert!(sub.remove_range(0, 1).unwrap_err().is_concurrent_modification());
}

#[test]
fn test_stale_sub_list_reads() {
    let mut list = SharedCountList::new(0..5);
    let counter = Rc::clone(&list.mod_count);

    let mut sub = list.sub_list(1, 4).unwrap();
    counter.set(counter.get() + 1);

    assert!(sub.get(0).unwrap_err().is_concurrent_modification());
    assert!(sub.check_concurrent_modification().unwrap_err().is_concurrent_modification());
    assert!(sub.list_iter(0).unwrap_err().is_concurrent_modification());
    assert!(sub.cursor().has_next(&sub).unwrap_err().is_concurrent_modification());
    assert!(sub.add(9).unwrap_err().is_concurrent_modification());
    assert!(sub.clear().unwrap_err().is_concurrent_modification());
    assert!(sub.remove(2).unwrap_err().is_concurrent_modification());
    assert!(sub.sub_list(0, 1).unwrap_err().is_concurrent_modification());
    assert!(ArrayIntList::from_list(&sub).unwrap_err().is_concurrent_modification());

    assert_panics!({ sub.len() }, "A stale view shouldn't report a length.");
    assert_panics!({ sub.is_empty() });
    assert_panics!({ sub.contains(2) }, "A stale view shouldn't answer contains.");
    assert_panics!({ sub.index_of(2) });
    assert_panics!({ sub.last_index_of(2) });
    assert_panics!({ sub.to_array() });
    assert_panics!({ sub.hash_code() });
    assert_panics!({ sub.equals(&SliceList::new(&[1, 2, 3])) });
    assert_panics!({ sub.to_string() });
}

#[test]
fn test_stale_nested_sub_list() {
    let mut list = SharedCountList::new(0..6);
    let counter = Rc::clone(&list.mod_count);

    let mut outer = list.sub_list(1, 5).unwrap();
    let inner = outer.sub_list(1, 3).unwrap();
    counter.set(counter.get() + 1);

    assert!(
        inner.get(0).unwrap_err().is_concurrent_modification(),
        "A change to the backing list should reach views of views."
    );
    assert_panics!({ inner.to_array() });
}

#[test]
fn test_iter_outside_change() {
    let list = SharedCountList::new(0..3);
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(0));

    list.bump();
    assert_panics!(
        { iter.next() },
        "The iterator should notice a change made while it was open."
    );

    let mut empty = SharedCountList::new(0..0);
    let counter = Rc::clone(&empty.mod_count);
    let sub = empty.sub_list(0, 0).unwrap();
    counter.set(counter.get() + 1);
    assert_panics!({ sub.iter() }, "Even an empty stale view should be caught.");
}

#[test]
fn test_default_mutators() {
    let mut list = SharedCountList::new(0..6);

    assert!(
        list.set(0, 1).unwrap_err().is_unsupported(),
        "Lists that don't override set should report it as unsupported."
    );

    list.remove_range(1, 4).unwrap();
    assert_eq!(list.data, [0, 4, 5]);
    assert_eq!(list.mod_count(), 3, "The default removes one element at a time.");

    assert!(list.remove_range(2, 4).unwrap_err().is_index_out_of_bounds());

    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    assert!(cursor.set(&mut list, 9).unwrap_err().is_unsupported());
}

#[test]
fn test_dyn_handle() {
    let data = [4, 5, 6];
    let mut slice = SliceList::new(&data);
    let handle: &mut dyn RandomAccessList<i32> = &mut slice;

    assert_eq!(handle.get(1), Ok(5));
    assert!(handle.contains(6));
    assert!(handle.set(0, 1).unwrap_err().is_unsupported());
    assert!(handle.add(7).unwrap_err().is_unsupported());
    assert!(handle.remove(4).unwrap_err().is_unsupported());
    assert!(handle.clear().unwrap_err().is_unsupported());
    assert_eq!(handle.to_array().as_ref(), [4, 5, 6]);

    let mut list: ArrayIntList = (0..2).collect();
    let handle: &mut dyn RandomAccessList<i32> = &mut list;
    handle.add(2).unwrap();
    let mut sub = handle.sub_list(1, 3).unwrap();
    sub.remove_at(0).unwrap();
    assert_eq!(list.to_string(), "[0, 2]");
}

#[test]
fn test_unmodifiable() {
    let mut list: ArrayIntList = (0..3).collect();
    {
        let mut view = Unmodifiable::new(&list);
        assert_eq!(view.get(2), Ok(2));
        assert_eq!(view.mod_count(), list.mod_count());
        assert!(view.set(0, 1).unwrap_err().is_unsupported());
        assert!(view.insert(0, 1).unwrap_err().is_unsupported());
        assert!(view.remove_at(0).unwrap_err().is_unsupported());
        assert!(view.remove_range(0, 0).unwrap_err().is_unsupported());
        assert!(view.add(3).unwrap_err().is_unsupported());
        assert_eq!(
            view.retain_all(&list),
            Ok(false),
            "Bulk removals that match nothing never reach a mutator."
        );
        assert_eq!(view.to_string(), "[0, 1, 2]");
    }

    list.clear().unwrap();
    let mut view = Unmodifiable::new(list);
    assert!(
        view.clear().unwrap_err().is_unsupported(),
        "Clearing an empty list is still a mutation."
    );
    assert!(view.into_inner().is_empty());
}

#[test]
fn test_iter() {
    let list: ArrayIntList = (0..5).collect();

    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.clone().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(iter.rev().collect::<Vec<_>>(), [3, 2, 1]);

    assert_eq!(list.to_array().as_ref(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_sub_list_equality() {
    let mut a: ArrayIntList = (0..6).collect();
    let mut b: ArrayIntList = [9, 2, 3, 4, 9].into_iter().collect();

    let sub_a = a.sub_list(2, 5).unwrap();
    let sub_b = b.sub_list(1, 4).unwrap();
    assert_eq!(sub_a, sub_b);
    assert_eq!(sub_a.hash_code(), sub_b.hash_code());
    assert!(sub_a.equals(&SliceList::new(&[2, 3, 4])));
    assert_eq!(
        format!("{sub_a:?}"),
        "SubList { contents: [2, 3, 4], offset: 2, len: 3 }"
    );
}
