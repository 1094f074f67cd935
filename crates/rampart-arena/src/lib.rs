// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned blocks of uninitialized, typed storage.
//!
//! An [`Arena<T>`] owns one contiguous allocation large enough for a fixed
//! number of `T` slots. It never tracks which slots hold a live value: it
//! neither constructs nor drops elements. Callers (such as
//! `rampart-array`'s `DynamicArray`) write values in with `ptr::write` and
//! must drop every value they constructed before the arena goes away.
//!
//! # Core Guarantees
//!
//! - **Single owner**: `Arena` is neither `Clone` nor `Copy`. Ownership moves
//!   or swaps in O(1).
//! - **No element lifecycle**: dropping an arena only releases the raw block.
//! - **Never resized**: growth means allocating a new arena and retiring the
//!   old one.
//! - **Explicit OOM**: [`Arena::allocate`] raises allocation failure through
//!   `handle_alloc_error`; [`Arena::try_allocate`] reports it as an
//!   [`ArenaError`]. Neither retries.
//!
//! # Example
//!
//! ```rust
//! use rampart_arena::{Arena, ArenaError};
//!
//! fn example() -> Result<(), ArenaError> {
//!     let mut arena = Arena::<u32>::try_allocate(4)?;
//!     assert_eq!(arena.capacity(), 4);
//!
//!     unsafe {
//!         arena.slot_mut(0).write(7);
//!         assert_eq!(*arena.slot(0), 7);
//!     }
//!
//!     // `u32` has no drop glue, so nothing has to be dropped before the
//!     // arena releases its block.
//!     let taken = arena.take();
//!     assert_eq!(arena.capacity(), 0);
//!     assert_eq!(taken.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod arena;
mod error;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use error::ArenaError;
