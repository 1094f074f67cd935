// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-array.

use rampart_arena::ArenaError;
use thiserror::Error;

/// Error type for fallible `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The backing arena could not be allocated.
    #[error("ArenaError: {0}")]
    Arena(#[from] ArenaError),

    /// Integer overflow when computing the grown capacity.
    ///
    /// Only reachable with zero-sized elements, where capacity is not
    /// bounded by memory.
    #[error("Integer overflow: grown capacity would exceed usize::MAX")]
    Overflow,
}

impl DynamicArrayError {
    /// Raises this error the way an infallible operation would: allocation
    /// failure through `handle_alloc_error`, overflow as a panic.
    #[cold]
    #[inline(never)]
    pub fn raise(self) -> ! {
        match self {
            Self::Arena(e) => e.raise(),
            Self::Overflow => panic!("capacity overflow"),
        }
    }
}
