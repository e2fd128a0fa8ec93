//! Invocation tape: records which undo actions ran, in order.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use undo_manager::{UndoContext, UndoFn, UndoManager};

/// A shared record of invoked undo actions.
///
/// Cloning a tape shares the same record.
#[derive(Debug, Clone, Default)]
pub struct Tape {
    entries: Rc<RefCell<Vec<String>>>,
}

/// Context payload for one named action.
struct Entry {
    tape: Tape,
    name: String,
}

fn replay(context: &dyn Any) {
    if let Some(entry) = context.downcast_ref::<Entry>() {
        entry.tape.entries.borrow_mut().push(entry.name.clone());
    }
}

impl Tape {
    /// Create an empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// The undo function that appends an action's name to its tape.
    pub fn undo_fn() -> UndoFn {
        replay
    }

    /// Build the context for a named action.
    pub fn context(&self, name: impl Into<String>) -> UndoContext {
        Rc::new(Entry {
            tape: self.clone(),
            name: name.into(),
        })
    }

    /// Push a named, invocable action onto `manager`.
    pub fn push(&self, manager: &dyn UndoManager, name: impl Into<String>) {
        manager.push(Some(Self::undo_fn()), Some(self.context(name)));
    }

    /// Names invoked so far.
    pub fn invoked(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Names invoked so far, clearing the record.
    pub fn take(&self) -> Vec<String> {
        self.entries.borrow_mut().drain(..).collect()
    }

    /// Number of contexts built from this tape that are still alive.
    pub fn outstanding(&self) -> usize {
        Rc::strong_count(&self.entries) - 1
    }
}

/// Install a test-friendly tracing subscriber. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use undo_manager::RecordingUndo;

    #[test]
    fn test_context_replays_into_tape() {
        // GIVEN
        let tape = Tape::new();
        let context = tape.context("f1");

        // WHEN
        (Tape::undo_fn())(&*context);

        // THEN
        assert_eq!(tape.invoked(), vec!["f1".to_string()]);
        assert_eq!(tape.take(), vec!["f1".to_string()]);
        assert!(tape.invoked().is_empty());
    }

    #[test]
    fn test_outstanding_counts_live_contexts() {
        let tape = Tape::new();
        let context = tape.context("a");
        assert_eq!(tape.outstanding(), 1);
        drop(context);
        assert_eq!(tape.outstanding(), 0);

        // The recorder releases contexts immediately.
        tape.push(&RecordingUndo::new(), "b");
        assert_eq!(tape.outstanding(), 0);
    }
}
