//! A recording stand-in for the undo table.

use std::cell::{Cell, RefCell};

use undo_core::{Savepoint, UndoContext, UndoFn};

use crate::table::UndoManager;

/// A call made against a [`RecordingUndo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoCall {
    Push { invocable: bool },
    Mark(Savepoint),
    Rollback,
    RollbackTo(Savepoint),
    Commit,
    CommitTo(Savepoint),
}

/// An [`UndoManager`] that records calls and tracks depth but never
/// invokes anything.
///
/// Pushed contexts are released immediately.
#[derive(Debug, Default)]
pub struct RecordingUndo {
    calls: RefCell<Vec<UndoCall>>,
    depth: Cell<usize>,
}

impl RecordingUndo {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<UndoCall> {
        self.calls.borrow().clone()
    }

    /// The depth a real log would have.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Forget recorded calls and reset depth.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
        self.depth.set(0);
    }

    fn record(&self, call: UndoCall) {
        self.calls.borrow_mut().push(call);
    }

    fn truncate(&self, savepoint: Savepoint) {
        self.depth.set(self.depth.get().min(savepoint.depth()));
    }
}

impl UndoManager for RecordingUndo {
    fn push(&self, undo: Option<UndoFn>, context: Option<UndoContext>) {
        self.record(UndoCall::Push {
            invocable: undo.is_some() && context.is_some(),
        });
        self.depth.set(self.depth.get() + 1);
    }

    fn mark(&self) -> Savepoint {
        let savepoint = Savepoint::new(self.depth());
        self.record(UndoCall::Mark(savepoint));
        savepoint
    }

    fn rollback_to(&self, savepoint: Savepoint) {
        self.record(UndoCall::RollbackTo(savepoint));
        self.truncate(savepoint);
    }

    fn commit_to(&self, savepoint: Savepoint) {
        self.record(UndoCall::CommitTo(savepoint));
        self.truncate(savepoint);
    }

    fn rollback(&self) {
        self.record(UndoCall::Rollback);
        self.truncate(Savepoint::ORIGIN);
    }

    fn commit(&self) {
        self.record(UndoCall::Commit);
        self.truncate(Savepoint::ORIGIN);
    }
}
