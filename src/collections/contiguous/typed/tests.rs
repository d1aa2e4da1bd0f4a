#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::ArrayError;
use crate::util::panic::assert_panics;

#[test]
fn test_end_to_end() {
    let mut list = TypedList::<i32>::new(3).unwrap();

    for value in [10, 20, 30, 40, 50, 60] {
        list.push(value).unwrap();
    }
    assert_eq!(list.cap(), 6);

    list.set(2, 25).unwrap();
    list.insert(2, 20).unwrap();

    let expected: TypedList<i32> = [10, 20, 20, 25, 40, 50, 60].into_iter().collect();
    assert_eq!(list, expected);
    assert_eq!(list.len(), 7);
    assert_eq!(list.cap(), 12);
}

#[test]
fn test_search_and_position() {
    let list: TypedList<i32> = [98, 65, 46, 89].into_iter().collect();

    assert_eq!(list.search(|v| *v == 46), Ok(Some(2)));
    assert_eq!(list.search(|v| *v < 0), Ok(None));
    assert_eq!(list.position(&89), Ok(Some(3)));
    assert_eq!(list.position(&90), Ok(None));
}

#[test]
fn test_compare() {
    let mut a: TypedList<i32> = [98, 65, 46, 89].into_iter().collect();
    let mut b: TypedList<i32> = [98, 65, 46, 89].into_iter().collect();
    assert_eq!(a.cmp(&b), Ordering::Equal);

    a.push(102).unwrap();
    assert!(a > b, "Appending to one side should make it greater.");

    b.push(0).unwrap();
    assert!(a > b);
    b.set(4, 102).unwrap();
    assert_eq!(a, b, "Setting the same content should make both sides equal again.");

    assert_eq!(
        a.compare_by(&b, |x, y| y.cmp(x)),
        Ordering::Equal,
        "Equal contents are equal under any order."
    );
    b.set(0, 0).unwrap();
    assert_eq!(a.compare_by(&b, |x, y| y.cmp(x)), Ordering::Less);

    b.destroy().unwrap();
    assert!(b < a, "A destroyed list should be less than a live one.");
}

#[test]
fn test_remove() {
    let mut list: TypedList<u64> = (0..8).collect();

    assert_eq!(list.remove(0), Ok(0));
    assert_eq!(list.remove(6), Ok(7));
    assert_eq!(
        list.remove(6),
        Err(ArrayError::IndexOutOfRange { index: 6, len: 6 }),
        "Removing past the end should fail."
    );

    while list.len() > 1 {
        list.remove(0).unwrap();
    }
    assert_eq!(list.get(0), Ok(6));
    assert_eq!(list.cap(), 4, "The capacity should have halved once the list got small.");
}

#[test]
fn test_apply() {
    let list: TypedList<f64> = [0.1, 0.2, 0.3, 0.4, 0.45, 6.7, 78.9, 8.0, 91.0, 1.0]
        .into_iter()
        .collect();

    let mut max = 0.0;
    list.apply(&mut max, |max, index, value| {
        if index == 0 || *max < value {
            *max = value;
        }
        Ok::<_, ArrayError>(())
    }).unwrap();
    assert_eq!(max, 91.0);

    let mut seen = 0;
    let result = list.apply(&mut seen, |seen, _, value| {
        *seen += 1;
        if value > 50.0 { Err(ArrayError::InvalidElement) } else { Ok(()) }
    });
    assert_eq!(result, Err(ArrayError::InvalidElement));
    assert_eq!(seen, 7, "Traversal should stop at the first value over 50.");
}

#[test]
fn test_array_elements() {
    let mut list = TypedList::<[u8; 3]>::new(1).unwrap();
    list.extend_from_slice(&[*b"abc", *b"def", *b"ghi"]).unwrap();

    assert_eq!(list.as_inner().width(), 3);
    assert_eq!(list.as_inner().as_bytes(), Ok(&b"abcdefghi"[..]));
    assert_eq!(list.get(1), Ok(*b"def"));

    let inner = list.into_inner();
    assert_eq!(inner.len(), 3);
}

#[test]
fn test_destroyed() {
    let mut list: TypedList<i16> = [1, 2, 3].into_iter().collect();
    list.destroy().unwrap();

    assert_eq!(list.push(4), Err(ArrayError::Destroyed));
    assert_eq!(list.get(0), Err(ArrayError::Destroyed));
    assert_eq!(list.search(|_| true), Err(ArrayError::Destroyed));
    assert_eq!(format!("{list:?}"), "TypedList { contents: <destroyed>, len: 0, cap: 0 }");

    assert_panics!({
        let mut list = list;
        list.extend([5, 6]);
    }, "destroyed");
}

#[test]
fn test_zero_sized_elements() {
    assert_eq!(
        TypedList::<[u32; 0]>::new(4).unwrap_err(),
        ArrayError::InvalidArgument { capacity: 4, width: 0 }
    );

    assert_panics!({
        let _ = (0..3).map(|_| [0_u32; 0]).collect::<TypedList<_>>();
    }, "width");
}

#[test]
fn test_debug() {
    let list: TypedList<u8> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list:?}"), "TypedList { contents: [1, 2, 3], len: 3, cap: 3 }");
}

proptest! {
    #[test]
    fn push_then_get_reads_back(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut list = TypedList::new(1).unwrap();
        for value in &values {
            list.push(*value).unwrap();
        }

        prop_assert_eq!(list.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(list.get(index), Ok(*value));
        }
    }

    #[test]
    fn ordering_follows_length_then_values(
        a in prop::collection::vec(any::<i32>(), 1..20),
        b in prop::collection::vec(any::<i32>(), 1..20),
    ) {
        let list_a: TypedList<i32> = a.iter().copied().collect();
        let list_b: TypedList<i32> = b.iter().copied().collect();

        let expected = a.len().cmp(&b.len()).then_with(|| a.cmp(&b));
        prop_assert_eq!(list_a.cmp(&list_b), expected);
    }
}
