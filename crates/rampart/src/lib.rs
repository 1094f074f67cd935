// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Raw arenas and a panic-safe growable array for Rust.</em></p>
//!
//! ---
//!
//! Rampart splits a growable array into two layers: an [`Arena`](arena::Arena)
//! that owns a block of uninitialized, typed slots, and a
//! [`DynamicArray`](array::DynamicArray) that builds and destroys elements
//! inside it.
//!
//! # Features
//!
//! - **Strong panic safety**: if a constructor or `clone` panics mid-operation, the array is left exactly as it was
//! - **Predictable growth**: capacity goes 0, 1, 2, 4, 8... and never shrinks
//! - **Fallible API**: `try_reserve`, `try_push_back` and `try_insert` report allocation failure as a value
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! rampart = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::array::DynamicArray;
//!
//! let mut names = DynamicArray::new();
//! names.push_back(String::from("ada"));
//! names.push_back(String::from("grace"));
//! names.insert(1, String::from("barbara"));
//!
//! assert_eq!(names.as_slice(), ["ada", "barbara", "grace"]);
//! assert_eq!(names.capacity(), 4);
//!
//! // Copies are deep, moves leave the source empty
//! let copy = names.clone();
//! let moved = core::mem::take(&mut names);
//! assert!(names.is_empty());
//! assert_eq!(copy, moved);
//! ```
//!
//! # Types
//!
//! - **`Arena<T>`**: uniquely owned storage for `capacity` values of `T`. Never constructs or drops a `T`.
//! - **`DynamicArray<T>`**: the growable array. Elements `[0, len)` are initialized, the rest of the arena is not.
//! - **`IntoIter<T>`**: owning iterator returned by `DynamicArray::into_iter`.
//!
//! # Testing
//!
//! With the `test-utils` feature, `DynamicArray` exposes failure injection
//! for its allocations:
//!
//! ```rust,ignore
//! use rampart::array::{DynamicArray, DynamicArrayBehaviour};
//!
//! let mut array = DynamicArray::<u8>::new();
//! array.change_behaviour(DynamicArrayBehaviour::FailAtNthAllocation(2));
//!
//! assert!(array.try_push_back(1).is_ok());  // 1st allocation succeeds
//! assert!(array.try_push_back(2).is_err()); // 2nd fails, array untouched
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

#[cfg(test)]
mod tests;

pub use rampart_arena as arena;
pub use rampart_array as array;
