//! The undo log stack engine.

use tracing::{debug, trace};

use crate::action::UndoAction;
use crate::config::UndoConfig;
use crate::error::UndoResult;
use crate::savepoint::Savepoint;

/// An ordered stack of undo actions, most recently pushed on top.
///
/// Rollback pops and invokes actions top-first; commit pops and discards
/// them. Both stop at a savepoint, and both are no-ops once the depth is
/// at or below it. Dropping the log discards whatever is left without
/// invoking it.
#[derive(Debug, Default)]
pub struct UndoLog {
    actions: Vec<UndoAction>,
}

impl UndoLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with the configured capacity reserved.
    pub fn with_config(config: &UndoConfig) -> UndoResult<Self> {
        config.validate()?;
        let mut actions = Vec::new();
        actions.try_reserve_exact(config.initial_capacity)?;
        Ok(Self { actions })
    }

    /// Number of actions currently on the stack.
    pub fn depth(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Snapshot the current depth.
    pub fn mark(&self) -> Savepoint {
        Savepoint::new(self.depth())
    }

    /// Push an action on top of the stack.
    pub fn push(&mut self, action: UndoAction) -> UndoResult<()> {
        self.actions.try_reserve(1)?;
        self.actions.push(action);
        trace!(depth = self.depth(), "pushed undo action");
        Ok(())
    }

    /// Pop the top action if the stack is deeper than `savepoint`.
    pub fn pop_above(&mut self, savepoint: Savepoint) -> Option<UndoAction> {
        if self.depth() > savepoint.depth() {
            self.actions.pop()
        } else {
            None
        }
    }

    /// Undo everything pushed since `savepoint`, most recent first.
    pub fn rollback_to(&mut self, savepoint: Savepoint) {
        let from = self.depth();
        let mut invoked = 0usize;
        while let Some(action) = self.pop_above(savepoint) {
            if action.is_invocable() {
                invoked += 1;
            }
            action.run();
        }
        if from > self.depth() {
            debug!(from, to = self.depth(), invoked, "rolled back undo log");
        }
    }

    /// Undo everything on the stack.
    pub fn rollback(&mut self) {
        self.rollback_to(Savepoint::ORIGIN);
    }

    /// Discard everything pushed since `savepoint` without invoking it.
    pub fn commit_to(&mut self, savepoint: Savepoint) {
        let from = self.depth();
        while let Some(action) = self.pop_above(savepoint) {
            action.discard();
        }
        if from > self.depth() {
            debug!(from, to = self.depth(), "committed undo log");
        }
    }

    /// Discard everything on the stack without invoking it.
    pub fn commit(&mut self) {
        self.commit_to(Savepoint::ORIGIN);
    }
}

impl Drop for UndoLog {
    fn drop(&mut self) {
        // Teardown never runs pending undo logic.
        self.commit();
    }
}
