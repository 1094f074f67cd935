// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array built on raw arenas, with strong panic safety.
//!
//! `DynamicArray<T>` owns exactly one [`rampart_arena::Arena`] plus a count of
//! live elements. Every element is written into the arena explicitly and
//! dropped explicitly; no growable-array primitive sits underneath.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: a full array grows to `max(1, 2 * capacity)`, so
//!   capacity goes `0 → 1 → 2 → 4 → 8 → ...` under repeated pushes.
//! - **Strong safety on growth**: the incoming element is constructed in the
//!   new arena before any existing element moves. A panicking constructor
//!   (closure, `Clone`, `Default`) or a failed allocation leaves length,
//!   contents and storage exactly as they were.
//! - **Exact rollback**: runs of in-place construction are tracked slot by
//!   slot, and on unwind exactly the constructed slots are dropped.
//! - **Value semantics**: `Clone` is a deep copy, `clone_from` reuses
//!   storage, and a move (or `core::mem::take`) leaves an empty array behind.
//!
//! # Example
//!
//! ```rust
//! use rampart_array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! for i in 1..=3 {
//!     array.push_back(i);
//! }
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//!
//! array.insert(1, 10);
//! assert_eq!(array.as_slice(), [1, 10, 2, 3]);
//!
//! array.erase(1);
//! assert_eq!(array.as_slice(), [1, 2, 3]);
//!
//! let copy = array.clone();
//! let moved = core::mem::take(&mut array);
//! assert_eq!(copy, moved);
//! assert_eq!(array.capacity(), 0);
//! ```
//!
//! # Example: Fallible Growth
//!
//! ```rust
//! use rampart_array::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::<u64>::new();
//!     array.try_reserve(8)?;
//!     array.try_push_back(42)?;
//!
//!     assert_eq!(array.capacity(), 8);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! rampart-array = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use `DynamicArrayBehaviour` with `DynamicArray::change_behaviour`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod dynamic_array;
mod error;
mod guard;
mod into_iter;
mod traits;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use into_iter::IntoIter;

#[cfg(any(test, feature = "test-utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
