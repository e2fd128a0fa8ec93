//! Undo Core
//!
//! This crate provides the foundational pieces of the undo log:
//! - Undo actions (a reversal function paired with opaque caller context)
//! - Savepoints (depth coordinates taken with `mark`)
//! - The `UndoLog` stack engine (push, mark, commit, rollback)
//! - Configuration and common error types

mod action;
mod config;
mod error;
mod log;
mod savepoint;

pub use action::{UndoAction, UndoContext, UndoFn};
pub use config::{UndoConfig, UNDO_INITIAL_CAPACITY_DEFAULT, UNDO_INITIAL_CAPACITY_MAX};
pub use error::{UndoError, UndoResult};
pub use log::UndoLog;
pub use savepoint::Savepoint;
