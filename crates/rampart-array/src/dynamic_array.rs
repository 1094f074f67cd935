// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr;
use core::slice;

use rampart_arena::{Arena, ArenaError};

use crate::error::DynamicArrayError;
use crate::guard::InitGuard;

/// Test behaviour for injecting allocation failures in `DynamicArray`.
///
/// This is only available with the `test-utils` feature and lets callers
/// exercise the fallible paths (`try_reserve`, `try_push_back`,
/// `try_insert`) without exhausting real memory. Injected failures surface
/// as [`ArenaError::OutOfMemory`].
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use rampart_array::{DynamicArray, DynamicArrayBehaviour};
///
/// let mut array = DynamicArray::<u8>::new();
/// array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
///
/// assert!(array.try_push_back(1).is_err());
/// assert!(array.is_empty());
///
/// array.change_behaviour(DynamicArrayBehaviour::None);
/// assert!(array.try_push_back(1).is_ok());
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every arena allocation fails.
    FailAtAllocation,
    /// The Nth arena allocation fails (1-indexed: 1 = first allocation fails).
    FailAtNthAllocation(usize),
}

/// A growable, contiguous array built directly on an [`Arena`].
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are allocated
/// but uninitialized. When capacity runs out the array allocates a new arena
/// of `max(1, 2 * capacity)` slots, constructs the incoming element there
/// first, relocates the existing elements and only then retires the old
/// arena. A panic or allocation failure at any step leaves the array exactly
/// as it was.
///
/// # Example
///
/// ```rust
/// use rampart_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3);
/// assert_eq!(array.capacity(), 4);
///
/// array.reserve(10);
/// assert_eq!(array.capacity(), 10);
///
/// array.erase(1);
/// assert_eq!(array.as_slice(), [1, 3]);
///
/// array.pop_back();
/// assert_eq!(array.as_slice(), [1]);
/// ```
pub struct DynamicArray<T> {
    arena: Arena<T>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: DynamicArrayBehaviour,
    #[cfg(any(test, feature = "test-utils"))]
    allocation_count: usize,
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(op: &str, index: usize, len: usize) -> ! {
    panic!("{op} index (is {index}) should be < len (is {len})");
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity 0. Does not allocate.
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: DynamicArrayBehaviour::None,
            #[cfg(any(test, feature = "test-utils"))]
            allocation_count: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.arena = Arena::allocate(capacity);
        array
    }

    /// Creates an array of `len` default-constructed elements, with
    /// capacity exactly `len`.
    ///
    /// If `T::default()` panics, the elements built so far are dropped and
    /// the storage is released before the panic propagates.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);
        // SAFETY (PRECONDITIONS ARE MET): capacity == len and the array is empty.
        unsafe { array.construct_tail(len, |_| T::default()) };
        array
    }

    /// Changes the injected failure behaviour and resets the allocation counter.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
        self.allocation_count = 0;
    }

    /// Returns the number of arena allocations attempted since the last
    /// [`DynamicArray::change_behaviour`].
    #[cfg(any(test, feature = "test-utils"))]
    pub fn allocation_count(&self) -> usize {
        self.allocation_count
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.arena.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.arena.as_mut_ptr()
    }

    /// Returns the live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) is constructed and the pointer is aligned.
        unsafe { slice::from_raw_parts(self.arena.as_ptr(), self.len) }
    }

    /// Returns the live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) is constructed and exclusively borrowed.
        unsafe { slice::from_raw_parts_mut(self.arena.as_mut_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be `< len()`. Only debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees index < len.
        unsafe { &*self.arena.slot(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be `< len()`. Only debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY (PRECONDITIONS ARE MET): caller guarantees index < len.
        unsafe { &mut *self.arena.slot_mut(index) }
    }

    /// Exchanges storage and length with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.arena.swap(&mut other.arena);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Ensures capacity is at least `capacity` (an absolute slot count, not
    /// an additional one).
    ///
    /// Does nothing if the current capacity suffices; otherwise moves every
    /// element into a new arena of exactly `capacity` slots.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(e) = self.try_reserve(capacity) {
            e.raise();
        }
    }

    /// Fallible twin of [`DynamicArray::reserve`].
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::Arena`] if the new arena cannot be
    /// allocated; the array is left untouched.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        let mut arena = self.allocate_arena(capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): the new arena is larger than len.
        unsafe { self.relocate(0, self.len, &mut arena, 0) };
        self.arena.swap(&mut arena);

        Ok(())
    }

    /// Appends `value` to the end of the array.
    ///
    /// Grows capacity to `max(1, 2 * capacity)` when full.
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Fallible twin of [`DynamicArray::push_back`].
    ///
    /// # Errors
    ///
    /// Returns an error if growing the storage fails. `value` is dropped and
    /// the array is left untouched.
    pub fn try_push_back(&mut self, value: T) -> Result<(), DynamicArrayError> {
        let len = self.len;
        self.try_emplace(len, || value).map(|_| ())
    }

    /// Constructs a new element at the end from `f` and returns a reference
    /// to it.
    ///
    /// When the array is full, `f` runs after the new arena is allocated but
    /// before any existing element is touched: if it panics the array is
    /// unchanged.
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        self.emplace(len, f)
    }

    /// Inserts `value` at `index`, shifting later elements toward the end.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, || value)
    }

    /// Fallible twin of [`DynamicArray::insert`].
    ///
    /// # Errors
    ///
    /// Returns an error if growing the storage fails; the array is left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, DynamicArrayError> {
        self.try_emplace(index, || value)
    }

    /// Constructs a new element from `f` at `index`, shifting later elements
    /// toward the end, and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`. If `f` panics the array is unchanged.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace(index, f) {
            Ok(element) => element,
            Err(e) => e.raise(),
        }
    }

    fn try_emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        if index > self.len {
            index_out_of_bounds("insertion", index, self.len);
        }

        if self.len < self.capacity() {
            // Materialize first: a panicking `f` must not find a gap open.
            let value = f();
            // SAFETY (PRECONDITIONS ARE MET): slot `len` is spare, so the shifted range stays in bounds.
            unsafe {
                let gap = self.arena.slot_mut(index);
                ptr::copy(gap, gap.add(1), self.len - index);
                gap.write(value);
            }
        } else {
            let capacity = self.grown_capacity()?;
            let mut arena = self.allocate_arena(capacity)?;

            // New element first, then prefix [0, index) and suffix [index, len).
            // SAFETY (PRECONDITIONS ARE MET): capacity > len, so index + 1 + (len - index) fits.
            unsafe {
                arena.slot_mut(index).write(f());
                self.relocate(0, index, &mut arena, 0);
                self.relocate(index, self.len - index, &mut arena, index + 1);
            }

            self.arena.swap(&mut arena);
        }

        self.len += 1;

        // SAFETY (PRECONDITIONS ARE MET): slot `index` was just constructed.
        Ok(unsafe { &mut *self.arena.slot_mut(index) })
    }

    /// Removes and drops the element at `index`, shifting later elements
    /// toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            index_out_of_bounds("removal", index, self.len);
        }

        // SAFETY (PRECONDITIONS ARE MET): index < len; the tail [index + 1, len) is live.
        unsafe {
            let slot = self.arena.slot_mut(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY (PRECONDITIONS ARE MET): slot `len` was live and is now outside [0, len).
        Some(unsafe { self.arena.slot(self.len).read() })
    }

    /// Drops trailing elements until `len() <= len`, last element first.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            // Shrink first so a panicking destructor cannot cause a double drop.
            self.len -= 1;
            // SAFETY (PRECONDITIONS ARE MET): slot `len` was live and is now outside [0, len).
            unsafe { ptr::drop_in_place(self.arena.slot_mut(self.len)) };
        }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `len` elements.
    ///
    /// Shrinking drops the trailing `len() - len` elements. Growing reserves
    /// at least `len` slots and default-constructs `[len(), len)`; if a
    /// default constructor panics, the elements built so far are dropped and
    /// the contents are unchanged.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default);
    }

    /// Like [`DynamicArray::resize`], filling new slots with `f`.
    pub fn resize_with<F>(&mut self, len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if len <= self.len {
            self.truncate(len);
            return;
        }

        self.reserve(len);
        let count = len - self.len;
        // SAFETY (PRECONDITIONS ARE MET): reserve guarantees capacity >= len.
        unsafe { self.construct_tail(count, |_| f()) };
    }

    /// Appends clones of every element in `other`.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        let Some(required) = self.len.checked_add(other.len()) else {
            DynamicArrayError::Overflow.raise();
        };
        self.reserve(required);
        // SAFETY (PRECONDITIONS ARE MET): capacity >= len + other.len().
        unsafe { self.construct_tail(other.len(), |i| other[i].clone()) };
    }

    /// Consumes the array and returns its storage with the live length.
    pub(crate) fn into_raw_parts(self) -> (Arena<T>, usize) {
        let mut this = core::mem::ManuallyDrop::new(self);
        (this.arena.take(), this.len)
    }

    /// Constructs `count` new elements in `[len, len + count)`.
    ///
    /// # Safety
    ///
    /// `len + count <= capacity()`.
    pub(crate) unsafe fn construct_tail<F>(&mut self, count: usize, mut f: F)
    where
        F: FnMut(usize) -> T,
    {
        debug_assert!(self.len + count <= self.capacity());

        // SAFETY (PRECONDITIONS ARE MET): [len, len + count) is spare capacity.
        let mut guard = unsafe { InitGuard::new(self.arena.slot_mut(self.len)) };
        for i in 0..count {
            let value = f(i);
            // SAFETY (PRECONDITIONS ARE MET): i < count keeps the write in bounds.
            unsafe { guard.push(value) };
        }
        self.len += guard.commit();
    }

    /// Moves `count` elements starting at `from` into `dst` at `to`.
    ///
    /// Rust moves are bitwise and cannot fail, so relocation is always safe
    /// to prefer over cloning: a source element is never left half-moved.
    /// The source slots are logically uninitialized afterwards.
    ///
    /// # Safety
    ///
    /// `[from, from + count)` must be live, `[to, to + count)` in `dst` must
    /// be spare.
    unsafe fn relocate(&self, from: usize, count: usize, dst: &mut Arena<T>, to: usize) {
        // SAFETY (PRECONDITIONS ARE MET): distinct arenas never overlap.
        unsafe { ptr::copy_nonoverlapping(self.arena.slot(from), dst.slot_mut(to), count) };
    }

    fn grown_capacity(&self) -> Result<usize, DynamicArrayError> {
        match self.capacity() {
            0 => Ok(1),
            capacity => capacity
                .checked_mul(2)
                .ok_or(DynamicArrayError::Overflow),
        }
    }

    fn allocate_arena(&mut self, capacity: usize) -> Result<Arena<T>, ArenaError> {
        #[cfg(any(test, feature = "test-utils"))]
        {
            self.allocation_count += 1;

            let fail = match self.behaviour {
                DynamicArrayBehaviour::None => false,
                DynamicArrayBehaviour::FailAtAllocation => true,
                DynamicArrayBehaviour::FailAtNthAllocation(n) => self.allocation_count == n,
            };

            if fail {
                return Err(ArenaError::OutOfMemory {
                    bytes: capacity.saturating_mul(core::mem::size_of::<T>()),
                    align: core::mem::align_of::<T>(),
                });
            }
        }

        Arena::try_allocate(capacity)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): [0, len) is live; the arena frees the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}
