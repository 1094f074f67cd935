// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_arena::ArenaError;
use rampart_test_utils::{MockElement, MockElementBehaviour, MockProbe};

use crate::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};

#[test]
fn test_behaviour_default_is_none() {
    assert_eq!(DynamicArrayBehaviour::default(), DynamicArrayBehaviour::None);
}

#[test]
fn test_fail_at_allocation_try_push_back() {
    let mut array = DynamicArray::<u64>::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let result = array.try_push_back(1);

    assert_eq!(
        result,
        Err(DynamicArrayError::Arena(ArenaError::OutOfMemory {
            bytes: 8,
            align: 8
        }))
    );
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_fail_at_allocation_does_not_affect_spare_capacity() {
    let mut array = DynamicArray::<u8>::with_capacity(2);
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert!(array.try_push_back(1).is_ok());
    assert!(array.try_push_back(2).is_ok());
    assert!(array.try_push_back(3).is_err());

    assert_eq!(array.as_slice(), [1, 2]);
    assert_eq!(array.allocation_count(), 1);
}

#[test]
fn test_fail_at_nth_allocation_keeps_contents() {
    MockProbe::reset(MockElementBehaviour::None);

    let mut array = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtNthAllocation(3));

    array
        .try_push_back(MockElement::new(1))
        .expect("Failed to try_push_back(1)");
    array
        .try_push_back(MockElement::new(2))
        .expect("Failed to try_push_back(2)");

    let result = array.try_push_back(MockElement::new(3));

    assert!(matches!(
        result,
        Err(DynamicArrayError::Arena(ArenaError::OutOfMemory { .. }))
    ));
    assert_eq!(array.len(), 2);
    assert_eq!(array.capacity(), 2);
    assert_eq!(array.iter().map(MockElement::value).collect::<Vec<_>>(), [1, 2]);
    // The rejected element was dropped, not leaked.
    assert_eq!(MockProbe::live(), 2);

    // Sticky behaviour only fires on the Nth allocation.
    array
        .try_push_back(MockElement::new(4))
        .expect("Failed to try_push_back(4)");
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_try_reserve_failure_keeps_storage() {
    let mut array = DynamicArray::from([1, 2, 3]);
    let ptr = array.as_ptr();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let result = array.try_reserve(100);

    assert!(result.is_err());
    assert_eq!(array.as_ptr(), ptr);
    assert_eq!(array.capacity(), 3);
    assert_eq!(array.as_slice(), [1, 2, 3]);
}

#[test]
fn test_try_reserve_noop_does_not_allocate() {
    let mut array = DynamicArray::<u8>::with_capacity(8);
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert!(array.try_reserve(8).is_ok());
    assert_eq!(array.allocation_count(), 0);
}

#[test]
fn test_try_insert_failure_keeps_contents() {
    let mut array = DynamicArray::from([1, 2]);
    array.change_behaviour(DynamicArrayBehaviour::FailAtNthAllocation(1));

    assert!(array.try_insert(1, 5).is_err());
    assert_eq!(array.as_slice(), [1, 2]);

    let inserted = array.try_insert(1, 5).expect("Failed to try_insert(..)");
    assert_eq!(*inserted, 5);
    assert_eq!(array.as_slice(), [1, 5, 2]);
}

#[test]
fn test_try_reserve_capacity_overflow() {
    let mut array = DynamicArray::<u64>::new();

    let result = array.try_reserve(usize::MAX);

    assert_eq!(
        result,
        Err(DynamicArrayError::Arena(ArenaError::CapacityOverflow))
    );
}

#[test]
fn test_change_behaviour_resets_allocation_count() {
    let mut array = DynamicArray::<u8>::new();

    array.push_back(1);
    array.push_back(2);
    assert_eq!(array.allocation_count(), 2);

    array.change_behaviour(DynamicArrayBehaviour::None);
    assert_eq!(array.allocation_count(), 0);
}

#[test]
fn test_dynamic_array_error_display() {
    assert_eq!(
        DynamicArrayError::Overflow.to_string(),
        "Integer overflow: grown capacity would exceed usize::MAX"
    );
    assert_eq!(
        DynamicArrayError::from(ArenaError::CapacityOverflow).to_string(),
        "ArenaError: capacity overflow: requested storage exceeds isize::MAX bytes"
    );
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_overflow_raise_panics() {
    DynamicArrayError::Overflow.raise();
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_reserve_capacity_overflow_panics() {
    let mut array = DynamicArray::<u64>::new();

    array.reserve(usize::MAX);
}
