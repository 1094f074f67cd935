// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_test_utils::{MockElement, MockElementBehaviour, MockProbe};

use crate::DynamicArray;

#[test]
fn test_into_iter_yields_in_order() {
    let array = DynamicArray::from([1, 2, 3]);

    let collected: Vec<i32> = array.into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_double_ended() {
    let mut iter = DynamicArray::from([1, 2, 3, 4]).into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.as_slice(), [2, 3]);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_drops_unyielded_elements() {
    MockProbe::reset(MockElementBehaviour::None);

    let array: DynamicArray<MockElement> = (0..5).map(MockElement::new).collect();
    let mut iter = array.into_iter();

    let first = iter.next().map(|e| e.value());
    drop(iter);

    assert_eq!(first, Some(0));
    assert_eq!(MockProbe::live(), 0);
}

#[test]
fn test_into_iter_of_empty() {
    let array: DynamicArray<String> = DynamicArray::new();

    assert_eq!(array.into_iter().count(), 0);
}

#[test]
fn test_into_iter_debug() {
    let mut iter = DynamicArray::from([1, 2]).into_iter();
    iter.next();

    assert_eq!(format!("{:?}", iter), "IntoIter([2])");
}
