//! The public operation table.

use undo_core::{Savepoint, UndoAction, UndoContext, UndoFn};

use crate::local;

/// The six undo operations, addressed to the calling thread's log.
///
/// Implementations can be swapped, e.g. for [`RecordingUndo`] in tests.
///
/// [`RecordingUndo`]: crate::RecordingUndo
pub trait UndoManager {
    /// Register a reversible step on top of the log.
    ///
    /// Either half may be `None`; such a step is never invoked.
    fn push(&self, undo: Option<UndoFn>, context: Option<UndoContext>);

    /// Snapshot the current depth.
    fn mark(&self) -> Savepoint;

    /// Undo everything pushed since `savepoint`, most recent first.
    fn rollback_to(&self, savepoint: Savepoint);

    /// Discard everything pushed since `savepoint` without invoking it.
    fn commit_to(&self, savepoint: Savepoint);

    /// Undo everything in the log.
    fn rollback(&self) {
        self.rollback_to(Savepoint::ORIGIN);
    }

    /// Discard everything in the log.
    fn commit(&self) {
        self.commit_to(Savepoint::ORIGIN);
    }
}

/// The per-thread implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadUndo;

impl UndoManager for ThreadUndo {
    fn push(&self, undo: Option<UndoFn>, context: Option<UndoContext>) {
        local::push(UndoAction::new(undo, context));
    }

    fn mark(&self) -> Savepoint {
        local::mark()
    }

    fn rollback_to(&self, savepoint: Savepoint) {
        local::rollback_to(savepoint);
    }

    fn commit_to(&self, savepoint: Savepoint) {
        local::commit_to(savepoint);
    }
}

/// The process-wide table.
pub static UNDO: ThreadUndo = ThreadUndo;

/// Get the process-wide table.
pub fn undo() -> &'static dyn UndoManager {
    &UNDO
}
