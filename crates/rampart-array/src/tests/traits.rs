// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::DynamicArray;

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_debug_reports_data_len_and_capacity() {
    let mut array = DynamicArray::from([1, 2]);
    array.reserve(4);

    assert_eq!(
        format!("{:?}", array),
        "DynamicArray { data: [1, 2], len: 2, capacity: 4 }"
    );
}

#[test]
fn test_partial_eq_ignores_capacity() {
    let a = DynamicArray::from([1, 2, 3]);
    let mut b: DynamicArray<i32> = DynamicArray::with_capacity(100);
    b.extend([1, 2, 3]);

    assert_eq!(a, b);
    assert_ne!(a, DynamicArray::from([1, 2]));
}

#[test]
fn test_partial_eq_with_slices_and_arrays() {
    let array = DynamicArray::from([1, 2, 3]);
    let slice: &[i32] = &[1, 2, 3];

    assert!(array == [1, 2, 3]);
    assert!(array == *slice);
    assert!(array == slice);
}

#[test]
fn test_hash_matches_slice_hash() {
    let array = DynamicArray::from([4u8, 5, 6]);

    assert_eq!(hash_of(&array), hash_of(&[4u8, 5, 6][..]));
}

#[test]
fn test_from_iterator_grows_by_doubling() {
    let array: DynamicArray<u32> = (0..5).collect();

    assert_eq!(array.as_slice(), [0, 1, 2, 3, 4]);
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_extend_by_reference() {
    let mut array = DynamicArray::from([1]);
    let more = [2, 3];

    array.extend(more.iter());

    assert_eq!(array.as_slice(), [1, 2, 3]);
}

#[test]
fn test_from_slice_clones() {
    let source = [String::from("a"), String::from("b")];

    let array = DynamicArray::from(&source[..]);

    assert_eq!(array.as_slice(), source);
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_deref_exposes_slice_api() {
    let mut array = DynamicArray::from([3, 1, 2]);

    array.sort();

    assert_eq!(array.first(), Some(&1));
    assert_eq!(array.last(), Some(&3));
    assert!(array.contains(&2));
    assert_eq!(array.as_ref(), [1, 2, 3]);
}

#[test]
fn test_borrowed_iteration() {
    let mut array = DynamicArray::from([1, 2, 3]);

    for value in &mut array {
        *value *= 2;
    }

    let mut sum = 0;
    for value in &array {
        sum += *value;
    }

    assert_eq!(sum, 12);
}

#[test]
fn test_send_and_sync_follow_element() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<DynamicArray<u64>>();
    assert_send_sync::<DynamicArray<String>>();
}
