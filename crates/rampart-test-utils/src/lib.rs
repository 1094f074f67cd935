// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Rampart crates.
//!
//! [`MockElement`] is an instrumented element type: every construction and
//! drop is counted per thread, and [`MockElementBehaviour`] makes the Nth
//! construction panic. Containers under test can then be checked for strong
//! panic safety (contents unchanged) and for leaks or double drops
//! (`MockProbe::live()` back to its expected value).
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

mod mock_element;

#[cfg(test)]
mod tests;

pub use mock_element::{MockElement, MockElementBehaviour, MockProbe, catch_panic};
