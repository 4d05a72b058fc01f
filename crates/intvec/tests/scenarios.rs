//! Integration test: end-to-end container scenarios.
//!
//! Each test walks one lifecycle through the public API only: construct,
//! mutate, copy or move, and check length, capacity and contents.

use intvec::{ArrayError, DynamicArray, GrowthPolicy};

#[test]
fn from_sequence_then_push() {
    let mut a = DynamicArray::from_values(&[3, 1, 2]);
    a.push_back(9);
    assert_eq!(a.len(), 4);
    assert_eq!(a.as_slice(), &[3, 1, 2, 9]);
    assert!(a.capacity() >= 4);
}

#[test]
fn sized_array_is_zeroed() {
    let a = DynamicArray::sized(5);
    assert_eq!(a.len(), 5);
    assert_eq!(a.capacity(), 5);
    for i in 0..5 {
        assert_eq!(a[i], 0);
    }
}

#[test]
fn pop_single_then_push() {
    let mut a = DynamicArray::from_values(&[1]);
    a.pop_back();
    assert_eq!(a.len(), 0);
    a.push_back(7);
    assert_eq!(a[0], 7);
}

#[test]
fn clear_keeps_capacity() {
    let mut a = DynamicArray::from_values(&[1, 2, 3]);
    let before = a.capacity();
    a.clear();
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), before);
}

#[test]
fn capacity_sequence_from_empty() {
    let mut a = DynamicArray::new();
    let mut growth = Vec::new();
    for i in 0..20 {
        let before = a.capacity();
        a.push_back(i);
        if a.capacity() != before {
            growth.push(a.capacity());
        }
    }
    assert_eq!(growth, vec![1, 2, 4, 8, 16, 32]);
    assert_eq!(a.len(), 20);
}

#[test]
fn presized_array_grows_from_its_size() {
    let mut a = DynamicArray::sized(3);
    assert_eq!(a.capacity(), 3);
    a.push_back(1);
    assert_eq!(a.capacity(), 6);
}

#[test]
fn copy_then_mutate_copy() {
    let a = DynamicArray::from_values(&[1, 2, 3, 4]);
    let mut b = a.clone();
    for i in 0..a.len() {
        assert_eq!(a[i], b[i]);
    }
    b[0] = -1;
    b.push_back(5);
    assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(b.as_slice(), &[-1, 2, 3, 4, 5]);
}

#[test]
fn move_empties_source() {
    let mut a = DynamicArray::from_values(&[8, 9]);
    let b = a.take();
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);
    assert_eq!(b.as_slice(), &[8, 9]);
}

#[test]
fn copy_assign_then_move_assign() {
    let source = DynamicArray::from_values(&[1, 2, 3]);
    let mut dest = DynamicArray::new();
    dest.assign_copy(&source);
    assert_eq!(dest, source);

    let mut other = DynamicArray::sized(2);
    other.assign_move(&mut dest);
    assert_eq!(other.as_slice(), &[1, 2, 3]);
    assert!(dest.is_empty());
    assert_eq!(dest.capacity(), 0);
}

#[test]
fn self_copy_assignment_is_harmless() {
    let mut a = DynamicArray::from_values(&[5, 6, 7]);
    a = a.clone();
    assert_eq!(a.as_slice(), &[5, 6, 7]);

    let snapshot = a.clone();
    a.clone_from(&snapshot);
    assert_eq!(a.as_slice(), &[5, 6, 7]);
}

#[test]
fn swap_is_a_state_exchange() {
    let mut a = DynamicArray::from_values(&[1, 2, 3]);
    let mut b = DynamicArray::new();
    a.swap(&mut b);
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 0);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.capacity(), 3);
}

#[test]
fn dropping_empty_and_moved_from_arrays() {
    let empty = DynamicArray::new();
    drop(empty);

    let mut a = DynamicArray::from_values(&[1, 2]);
    let b = a.take();
    drop(a);
    drop(b);
}

#[test]
fn checked_paths_report_errors() {
    let mut a = DynamicArray::with_policy(GrowthPolicy::default());
    assert_eq!(
        a.get(0),
        Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 })
    );
    assert!(a.set(0, 1).is_err());
    assert!(a.try_reserve(usize::MAX).is_err());
    assert_eq!(a.pop_back(), None);
}
