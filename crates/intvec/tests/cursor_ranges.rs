//! Integration test: range-based algorithms driven through cursors.
//!
//! Cursor pairs are resolved into slices with `range`/`range_mut`, then
//! handed to standard slice algorithms.

use intvec::{ArrayError, DynamicArray};

#[test]
fn sort_whole_range() {
    let mut a = DynamicArray::from_values(&[9, 3, 7, 1, 5]);
    let (first, last) = (a.begin(), a.end());
    a.range_mut(first, last).unwrap().sort_unstable();
    assert_eq!(a.as_slice(), &[1, 3, 5, 7, 9]);
}

#[test]
fn copy_between_arrays_through_cursors() {
    let src = DynamicArray::from_values(&[1, 2, 3, 4, 5]);
    let mut dst = DynamicArray::sized(3);
    let window = src.range(src.begin() + 1, src.begin() + 4).unwrap();
    let (first, last) = (dst.begin(), dst.end());
    dst.range_mut(first, last).unwrap().copy_from_slice(window);
    assert_eq!(dst.as_slice(), &[2, 3, 4]);
}

#[test]
fn extent_is_cursor_distance() {
    let a = DynamicArray::from_values(&[4, 4, 4, 4]);
    let first = a.begin() + 1;
    let last = a.end();
    let window = a.range(first, last).unwrap();
    assert_eq!(window.len() as isize, last - first);
}

#[test]
fn empty_range_is_valid() {
    let a = DynamicArray::from_values(&[1, 2]);
    assert!(a.range(a.end(), a.end()).unwrap().is_empty());
    let e = DynamicArray::new();
    assert!(e.range(e.begin(), e.end()).unwrap().is_empty());
}

#[test]
fn inverted_range_rejected() {
    let a = DynamicArray::from_values(&[1, 2, 3]);
    assert_eq!(
        a.range(a.begin() + 2, a.begin() + 1),
        Err(ArrayError::IndexOutOfBounds { index: 1, len: 3 })
    );
}

#[test]
fn range_past_end_rejected() {
    let a = DynamicArray::from_values(&[1, 2, 3]);
    assert!(matches!(
        a.range(a.begin(), a.end() + 1),
        Err(ArrayError::IndexOutOfBounds { index: 4, .. })
    ));
}

#[test]
fn stale_range_rejected_after_growth() {
    let mut a = DynamicArray::from_values(&[1, 2, 3]);
    let (first, last) = (a.begin(), a.end());
    a.push_back(4);
    assert!(matches!(
        a.range(first, last),
        Err(ArrayError::StaleCursor { .. })
    ));
}

#[test]
fn manual_reverse_with_two_cursors() {
    let mut a = DynamicArray::from_values(&[1, 2, 3, 4, 5, 6]);
    let mut lo = a.begin();
    let mut hi = a.end() - 1;
    while lo < hi {
        let (x, y) = (lo.get(&a).unwrap(), hi.get(&a).unwrap());
        *lo.get_mut(&mut a).unwrap() = y;
        *hi.get_mut(&mut a).unwrap() = x;
        lo.increment();
        hi.decrement();
    }
    assert_eq!(a.as_slice(), &[6, 5, 4, 3, 2, 1]);
}

#[test]
fn binary_search_by_cursor_arithmetic() {
    let a: DynamicArray = (0..100).map(|x| x * 3).collect();
    let target = 141;
    let mut first = a.begin();
    let mut count = a.end() - first;
    while count > 0 {
        let step = count / 2;
        let mid = first + step;
        if mid.get(&a).unwrap() < target {
            first = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    assert_eq!(first - a.begin(), 47);
    assert_eq!(first.get(&a), Ok(141));
}
