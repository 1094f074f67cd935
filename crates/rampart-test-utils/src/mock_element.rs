// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Configurable behaviour for [`MockElement`] constructions.
///
/// Counts are 1-indexed and start at the last [`MockProbe::reset`]:
/// `FailAtNthClone(1)` makes the first clone after a reset panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockElementBehaviour {
    /// Normal operation.
    #[default]
    None,
    /// The Nth construction of any kind (`new`, `clone`, `default`) panics.
    FailAtNthConstruction(usize),
    /// The Nth `clone` panics.
    FailAtNthClone(usize),
    /// The Nth `default` panics.
    FailAtNthDefault(usize),
}

#[derive(Clone, Copy)]
enum Construction {
    New,
    Clone,
    Default,
}

thread_local! {
    static BEHAVIOUR: Cell<MockElementBehaviour> = const { Cell::new(MockElementBehaviour::None) };
    static CONSTRUCTIONS: Cell<usize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
    static DEFAULTS: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) -> usize {
    counter.with(|c| {
        let next = c.get() + 1;
        c.set(next);
        next
    })
}

/// Per-thread counters for [`MockElement`].
///
/// Each test runs on its own thread, so counters never leak between tests.
pub struct MockProbe;

impl MockProbe {
    /// Sets `behaviour` and zeroes every counter.
    pub fn reset(behaviour: MockElementBehaviour) {
        BEHAVIOUR.with(|b| b.set(behaviour));
        CONSTRUCTIONS.with(|c| c.set(0));
        CLONES.with(|c| c.set(0));
        DEFAULTS.with(|c| c.set(0));
        DROPS.with(|c| c.set(0));
    }

    /// Changes the behaviour without touching the counters.
    pub fn change_behaviour(behaviour: MockElementBehaviour) {
        BEHAVIOUR.with(|b| b.set(behaviour));
    }

    /// Successful constructions since the last reset.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.with(Cell::get)
    }

    /// Drops since the last reset.
    pub fn drops() -> usize {
        DROPS.with(Cell::get)
    }

    /// Elements constructed since the last reset and not yet dropped.
    ///
    /// Negative balances (a double drop) panic.
    pub fn live() -> usize {
        let constructions = Self::constructions();
        let drops = Self::drops();
        assert!(
            drops <= constructions,
            "MockElement dropped more often ({drops}) than constructed ({constructions})"
        );
        constructions - drops
    }

    fn construct(kind: Construction) {
        let attempt = CONSTRUCTIONS.with(Cell::get) + 1;
        let kind_attempt = match kind {
            Construction::New => 0,
            Construction::Clone => CLONES.with(Cell::get) + 1,
            Construction::Default => DEFAULTS.with(Cell::get) + 1,
        };

        let fail = match (BEHAVIOUR.with(Cell::get), kind) {
            (MockElementBehaviour::None, _) => false,
            (MockElementBehaviour::FailAtNthConstruction(n), _) => attempt == n,
            (MockElementBehaviour::FailAtNthClone(n), Construction::Clone) => kind_attempt == n,
            (MockElementBehaviour::FailAtNthDefault(n), Construction::Default) => kind_attempt == n,
            _ => false,
        };

        // Failed attempts still count, so the same N never fires twice.
        match kind {
            Construction::New => {}
            Construction::Clone => {
                bump(&CLONES);
            }
            Construction::Default => {
                bump(&DEFAULTS);
            }
        }

        if fail {
            BEHAVIOUR.with(|b| b.set(MockElementBehaviour::None));
            panic!("MockElement: injected failure at construction #{attempt}");
        }

        bump(&CONSTRUCTIONS);
    }
}

/// Instrumented element for container tests.
///
/// Holds its value on the heap so a double drop is a double free, not a
/// silent miscount.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MockElement {
    value: Box<u64>,
}

impl MockElement {
    /// Constructs a new element. Counts as a construction.
    ///
    /// # Panics
    ///
    /// Panics if the current behaviour selects this construction.
    pub fn new(value: u64) -> Self {
        MockProbe::construct(Construction::New);
        Self {
            value: Box::new(value),
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> u64 {
        *self.value
    }
}

impl Clone for MockElement {
    fn clone(&self) -> Self {
        MockProbe::construct(Construction::Clone);
        Self {
            value: self.value.clone(),
        }
    }
}

impl Default for MockElement {
    fn default() -> Self {
        MockProbe::construct(Construction::Default);
        Self {
            value: Box::new(0),
        }
    }
}

impl Drop for MockElement {
    fn drop(&mut self) {
        bump(&DROPS);
    }
}

/// Runs `f`, returning `true` if it panicked.
///
/// The closure is asserted unwind safe: the point of these tests is to
/// inspect state after an unwind.
pub fn catch_panic<F: FnOnce()>(f: F) -> bool {
    catch_unwind(AssertUnwindSafe(f)).is_err()
}
