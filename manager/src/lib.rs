//! Undo Manager
//!
//! Per-thread undo logs behind a process-wide operation table.
//!
//! Responsibilities:
//! - Give every thread its own private `UndoLog`, created on first use
//! - Discard a thread's pending actions without running them when it exits
//! - Expose push/mark/commit/rollback through the `UndoManager` table
//! - Provide scoped transactions that roll back unless committed
//!
//! Any failure to allocate or reach a thread's log aborts the process; a
//! silently dropped undo registration would make a later rollback
//! incomplete with no way to detect it.
//!
//! Undo functions must not call back into the table on their own thread
//! while a rollback is running.

mod local;
mod recording;
mod scope;
mod table;

pub use local::configure;
pub use recording::{RecordingUndo, UndoCall};
pub use scope::{atomically, atomically_on, UndoScope};
pub use table::{undo, ThreadUndo, UndoManager, UNDO};

pub use undo_core::{
    Savepoint, UndoAction, UndoConfig, UndoContext, UndoError, UndoFn, UndoResult,
};
