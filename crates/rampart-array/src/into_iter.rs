// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use rampart_arena::Arena;

/// Owning iterator over the elements of a `DynamicArray`.
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    arena: Arena<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(arena: Arena<T>, len: usize) -> Self {
        Self {
            arena,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): [start, end) is still live.
        unsafe { slice::from_raw_parts(self.arena.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;
        // SAFETY (PRECONDITIONS ARE MET): slot `index` was live and is now outside [start, end).
        Some(unsafe { self.arena.slot(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slot `end` was live and is now outside [start, end).
        Some(unsafe { self.arena.slot(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        let start = self.arena.slot_mut(self.start);
        // Mark everything as yielded first; a panicking destructor must not re-enter.
        self.start = self.end;
        // SAFETY (PRECONDITIONS ARE MET): the range was live until now.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, remaining)) };
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
