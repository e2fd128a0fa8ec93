//! Scoped transactions.

use tracing::debug;
use undo_core::Savepoint;

use crate::table::{undo, UndoManager};

/// A guard that rolls the log back to where it was created unless it is
/// committed.
///
/// Early returns, `?` propagation and panic unwinding all roll back. Note
/// that committing discards the undo history above the scope's savepoint:
/// an enclosing scope that later rolls back will not undo it.
#[must_use = "an `UndoScope` rolls back when dropped; call `UndoScope::commit` to keep its effects"]
pub struct UndoScope<'m> {
    manager: &'m dyn UndoManager,
    savepoint: Savepoint,
    resolved: bool,
}

impl UndoScope<'static> {
    /// Open a scope on the calling thread's log.
    pub fn begin() -> Self {
        Self::on(undo())
    }
}

impl<'m> UndoScope<'m> {
    /// Open a scope on the given manager.
    pub fn on(manager: &'m dyn UndoManager) -> Self {
        let savepoint = manager.mark();
        Self {
            manager,
            savepoint,
            resolved: false,
        }
    }

    /// The savepoint this scope unwinds to.
    pub fn savepoint(&self) -> Savepoint {
        self.savepoint
    }

    /// Accept everything pushed inside the scope.
    pub fn commit(mut self) {
        self.manager.commit_to(self.savepoint);
        self.resolved = true;
    }

    /// Undo everything pushed inside the scope.
    pub fn rollback(mut self) {
        self.manager.rollback_to(self.savepoint);
        self.resolved = true;
    }
}

impl Drop for UndoScope<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            debug!(savepoint = %self.savepoint, "undo scope dropped unresolved");
            self.manager.rollback_to(self.savepoint);
        }
    }
}

/// Run `f` on the calling thread's log, committing on `Ok` and rolling
/// back on `Err`.
pub fn atomically<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    atomically_on(undo(), f)
}

/// Run `f` on the given manager, committing on `Ok` and rolling back on
/// `Err`.
pub fn atomically_on<T, E>(
    manager: &dyn UndoManager,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let scope = UndoScope::on(manager);
    match f() {
        Ok(value) => {
            scope.commit();
            Ok(value)
        }
        Err(err) => {
            scope.rollback();
            Err(err)
        }
    }
}
