// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc, dealloc};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::ArenaError;

/// One exclusively owned block of uninitialized storage for `capacity`
/// values of `T`.
///
/// The arena hands out raw slot pointers and nothing else. It never runs a
/// constructor or destructor: whoever writes a value into a slot is
/// responsible for dropping it before the arena is dropped or replaced.
///
/// A zero capacity (and any capacity for a zero-sized `T`) allocates
/// nothing; the pointer is then dangling but well aligned.
///
/// # Example
///
/// ```rust
/// use rampart_arena::Arena;
///
/// let mut a = Arena::<u64>::allocate(2);
/// let mut b = Arena::<u64>::new();
///
/// a.swap(&mut b);
///
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.capacity(), 2);
/// ```
pub struct Arena<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: the block is exclusively owned; sharing follows the slot type.
unsafe impl<T: Send> Send for Arena<T> {}
unsafe impl<T: Sync> Sync for Arena<T> {}

impl<T> Arena<T> {
    /// Creates an empty arena with capacity 0. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates an arena with room for exactly `capacity` values.
    ///
    /// `capacity == 0` returns the empty arena.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`. Allocation failure
    /// is reported through [`alloc::alloc::handle_alloc_error`].
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(arena) => arena,
            Err(e) => e.raise(),
        }
    }

    /// Fallible twin of [`Arena::allocate`].
    ///
    /// # Errors
    ///
    /// - [`ArenaError::CapacityOverflow`] if the byte size overflows `isize::MAX`.
    /// - [`ArenaError::OutOfMemory`] if the global allocator returns null.
    pub fn try_allocate(capacity: usize) -> Result<Self, ArenaError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| ArenaError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY (PRECONDITIONS ARE MET): layout has non-zero size.
        let raw = unsafe { alloc(layout) };

        let ptr = NonNull::new(raw.cast::<T>()).ok_or(ArenaError::OutOfMemory {
            bytes: layout.size(),
            align: layout.align(),
        })?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the arena has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns the base address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to slot `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end
    /// pointer. The range is only checked with `debug_assert!`: reading or
    /// writing through a pointer past the block is undefined behaviour, and
    /// reading a slot that holds no live value is as well.
    #[inline]
    pub fn slot(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity);
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Mutable variant of [`Arena::slot`].
    #[inline]
    pub fn slot_mut(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity);
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Exchanges blocks with `other` in O(1). No slot is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the block out, leaving `self` empty with capacity 0.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    fn layout(&self) -> Option<Layout> {
        if self.capacity == 0 {
            return None;
        }

        // Cannot fail: the same layout was computed successfully when allocating.
        Layout::array::<T>(self.capacity)
            .ok()
            .filter(|layout| layout.size() != 0)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            // SAFETY (PRECONDITIONS ARE MET): ptr was returned by `alloc` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<T> core::fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
