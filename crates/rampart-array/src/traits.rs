// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard trait implementations for `DynamicArray`.

use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use crate::dynamic_array::DynamicArray;
use crate::into_iter::IntoIter;

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy of `[0, len)` into an arena of exactly `len` slots.
    ///
    /// If a `clone` panics, the copies made so far are dropped and `self`
    /// is untouched.
    fn clone(&self) -> Self {
        let mut array = Self::with_capacity(self.len());
        let source = self.as_slice();
        // SAFETY (PRECONDITIONS ARE MET): capacity == source.len() and the array is empty.
        unsafe { array.construct_tail(source.len(), |i| source[i].clone()) };
        array
    }

    /// Copy assignment.
    ///
    /// Without enough capacity, builds a full copy of `source` and swaps it
    /// in. Otherwise reuses the current storage: excess trailing elements
    /// are dropped, the overlapping prefix is assigned element-wise with
    /// `clone_from`, and any missing tail is cloned into spare slots.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len() {
            let mut copy = source.clone();
            self.swap(&mut copy);
            return;
        }

        self.truncate(source.len());

        let (prefix, tail) = source.as_slice().split_at(self.len());
        for (dst, src) in self.as_mut_slice().iter_mut().zip(prefix) {
            dst.clone_from(src);
        }

        // SAFETY (PRECONDITIONS ARE MET): capacity >= source.len() == len + tail.len().
        unsafe { self.construct_tail(tail.len(), |i| tail[i].clone()) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Bounds-checked indexing: out-of-range access panics.
///
/// Use [`DynamicArray::get_unchecked`] for the unchecked contract.
impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynamicArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(slice: &[T]) -> Self {
        let mut array = Self::with_capacity(slice.len());
        array.extend_from_slice(slice);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for value in values {
            array.push_back(value);
        }
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (arena, len) = self.into_raw_parts();
        IntoIter::new(arena, len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
