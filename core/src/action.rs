//! Undo actions.
//!
//! An action pairs a reversal function with the opaque context it reverses.
//! Either half may be absent; such an action is a placeholder and is
//! discarded without invocation.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque, caller-owned context handed back to an undo function.
///
/// The log only holds a shared handle. It never inspects the pointee and
/// never decides when the pointee itself is freed.
pub type UndoContext = Rc<dyn Any>;

/// A reversal step. Receives the context it was pushed with.
pub type UndoFn = fn(&dyn Any);

/// One registered reversible step.
pub struct UndoAction {
    undo: Option<UndoFn>,
    context: Option<UndoContext>,
}

impl UndoAction {
    /// Create a new action.
    pub fn new(undo: Option<UndoFn>, context: Option<UndoContext>) -> Self {
        Self { undo, context }
    }

    /// Create an action that is never invoked.
    pub fn placeholder() -> Self {
        Self::new(None, None)
    }

    /// Returns true if rollback would invoke this action.
    pub fn is_invocable(&self) -> bool {
        self.undo.is_some() && self.context.is_some()
    }

    /// Invoke the action if both halves are present, then release it.
    pub fn run(self) {
        if let (Some(undo), Some(context)) = (self.undo, self.context) {
            undo(&*context);
        }
    }

    /// Release the action without invoking it.
    pub fn discard(self) {}
}

impl fmt::Debug for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoAction")
            .field("undo", &self.undo.map(|_| "<fn>"))
            .field("context", &self.context.as_ref().map(|_| "<context>"))
            .finish()
    }
}
