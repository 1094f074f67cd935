// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-arena.

use alloc::alloc::{Layout, handle_alloc_error};
use thiserror::Error;

/// Errors that can occur when allocating an [`Arena`](crate::Arena).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArenaError {
    /// The requested number of slots does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: requested storage exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator could not provide the block.
    #[error("out of memory: failed to allocate {bytes} bytes (align {align})")]
    OutOfMemory {
        /// Size of the rejected allocation in bytes.
        bytes: usize,
        /// Alignment of the rejected allocation.
        align: usize,
    },
}

impl ArenaError {
    /// Raises this error the way an infallible allocation would.
    ///
    /// `OutOfMemory` goes through [`handle_alloc_error`], `CapacityOverflow`
    /// panics. Used by the infallible entry points so both paths share one
    /// allocation routine.
    #[cold]
    #[inline(never)]
    pub fn raise(self) -> ! {
        match self {
            Self::CapacityOverflow => capacity_overflow(),
            Self::OutOfMemory { bytes, align } => match Layout::from_size_align(bytes, align) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => capacity_overflow(),
            },
        }
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
