//! Single-slot display state store.
//!
//! Holds exactly one [`TelemetrySnapshot`], or none before the first event.
//! One writer (the vehicle listener) replaces it; the render path reads it.
//! Replacement swaps the whole slot in one step, so readers always observe a
//! fully-formed snapshot, never a partially-updated one. No history, no
//! rollback, no merge.
//!
//! The pipeline is single-threaded and reactive, so interior mutability via
//! `RefCell` is enough: the listener closure holds an `Rc` to the store and
//! the render path reads through another.

use std::cell::RefCell;

use crate::snapshot::TelemetrySnapshot;

/// Observable state container for the current telemetry snapshot.
#[derive(Debug, Default)]
pub struct DisplayStateStore {
    slot: RefCell<Option<TelemetrySnapshot>>,
}

impl DisplayStateStore {
    /// Create an empty store (pre-first-event: no snapshot, overlay hidden).
    pub const fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Replace the current snapshot wholesale. Last write wins.
    pub fn replace(&self, snapshot: TelemetrySnapshot) {
        *self.slot.borrow_mut() = Some(snapshot);
    }

    /// Read the current snapshot, if any event has arrived yet.
    ///
    /// Returns a clone so the read borrow never outlives a later `replace`.
    pub fn current(&self) -> Option<TelemetrySnapshot> {
        self.slot.borrow().clone()
    }

    /// Whether any event has been received yet.
    pub fn has_snapshot(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
