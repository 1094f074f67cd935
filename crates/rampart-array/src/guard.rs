// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rollback guard for runs of in-place construction.

use core::ptr;

/// Tracks how many consecutive slots starting at `start` have been
/// constructed.
///
/// If the guard is dropped before [`InitGuard::commit`] (a constructor
/// panicked), exactly the constructed prefix is dropped and nothing else.
pub(crate) struct InitGuard<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    /// # Safety
    ///
    /// `start` must point to uninitialized slots, valid for writes, for every
    /// value later passed to [`InitGuard::push`].
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// Writes `value` into the next slot.
    ///
    /// # Safety
    ///
    /// The next slot must lie inside the block `start` points into.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees the slot is in bounds and uninitialized.
        unsafe { self.start.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Disarms the guard and returns how many slots were constructed.
    #[inline]
    pub(crate) fn commit(self) -> usize {
        let initialized = self.initialized;
        core::mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): exactly `initialized` slots were written by `push`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}
