// Common test utilities for integration tests
//
// This module provides shared element types whose constructions, clones, and
// drops are observable from the outside, plus controlled failure injection
// for panic-safety tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared ledger counting constructions and drops of tracked elements.
#[derive(Default)]
pub struct Ledger {
    created: AtomicUsize,
    dropped: AtomicUsize,
}

impl Ledger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Total values constructed against this ledger.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Total values dropped against this ledger.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Values currently alive: constructed but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// Element whose constructions and drops are recorded in a [`Ledger`].
pub struct Tracked {
    pub value: i32,
    ledger: Arc<Ledger>,
}

impl Tracked {
    pub fn new(value: i32, ledger: &Arc<Ledger>) -> Self {
        ledger.created.fetch_add(1, Ordering::SeqCst);
        Self {
            value,
            ledger: Arc::clone(ledger),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.value, &self.ledger)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

/// Element that panics when asked to clone its trigger value. Constructions
/// and drops are recorded like [`Tracked`], so leak checks work across the
/// injected failure.
pub struct PanicOnClone {
    pub value: i32,
    trigger: i32,
    ledger: Arc<Ledger>,
}

impl PanicOnClone {
    pub fn new(value: i32, trigger: i32, ledger: &Arc<Ledger>) -> Self {
        ledger.created.fetch_add(1, Ordering::SeqCst);
        Self {
            value,
            trigger,
            ledger: Arc::clone(ledger),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        if self.value == self.trigger {
            panic!("clone failure injected at value {}", self.value);
        }
        PanicOnClone::new(self.value, self.trigger, &self.ledger)
    }
}

impl Drop for PanicOnClone {
    fn drop(&mut self) {
        self.ledger.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

thread_local! {
    static FUSSY_BUDGET: Cell<usize> = const { Cell::new(usize::MAX) };
    static FUSSY_LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Element whose default construction succeeds a configured number of times
/// and then panics. Tests run single-threaded per test function, so the
/// thread-local budget never crosses tests. The byte of payload keeps the
/// type sized, so containers of it allocate real storage.
pub struct FussyDefault(u8);

impl Default for FussyDefault {
    fn default() -> Self {
        FUSSY_BUDGET.with(|budget| {
            if budget.get() == 0 {
                panic!("default construction failure injected");
            }
            budget.set(budget.get() - 1);
        });
        FUSSY_LIVE.with(|live| live.set(live.get() + 1));
        FussyDefault(0)
    }
}

impl Drop for FussyDefault {
    fn drop(&mut self) {
        FUSSY_LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Allows `count` further [`FussyDefault`] constructions before one panics.
pub fn set_fussy_budget(count: usize) {
    FUSSY_BUDGET.with(|budget| budget.set(count));
}

/// Number of [`FussyDefault`] values alive on this thread.
pub fn fussy_live() -> usize {
    FUSSY_LIVE.with(Cell::get)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The ledger records one construction and one drop per value,
    /// including clones.
    #[test]
    fn test_ledger_counts_lifecycle() {
        let ledger = Ledger::new();
        let a = Tracked::new(1, &ledger);
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.live(), 2);
        drop(a);
        drop(b);
        assert_eq!(ledger.live(), 0);
    }

    /// The fussy element must occupy storage, or capacity effects in the
    /// tests that use it would be unobservable.
    #[test]
    fn test_fussy_default_occupies_storage() {
        assert_ne!(std::mem::size_of::<FussyDefault>(), 0);
    }

    /// The construction budget counts down and trips exactly on zero.
    #[test]
    fn test_fussy_budget_trips() {
        set_fussy_budget(2);
        let a = FussyDefault::default();
        let b = FussyDefault::default();
        assert_eq!(fussy_live(), 2);
        let result = std::panic::catch_unwind(FussyDefault::default);
        assert!(result.is_err());
        drop(a);
        drop(b);
        assert_eq!(fussy_live(), 0);
    }
}
