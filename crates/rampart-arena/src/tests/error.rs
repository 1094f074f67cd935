// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ArenaError;

#[test]
fn test_arena_error_display() {
    assert_eq!(
        ArenaError::CapacityOverflow.to_string(),
        "capacity overflow: requested storage exceeds isize::MAX bytes"
    );
    assert_eq!(
        ArenaError::OutOfMemory {
            bytes: 64,
            align: 8
        }
        .to_string(),
        "out of memory: failed to allocate 64 bytes (align 8)"
    );
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_raise_capacity_overflow_panics() {
    ArenaError::CapacityOverflow.raise();
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_raise_out_of_memory_with_invalid_layout_panics() {
    // Alignment 3 is not a power of two, so no layout can be rebuilt.
    ArenaError::OutOfMemory { bytes: 8, align: 3 }.raise();
}
