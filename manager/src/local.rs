//! Thread-local undo log storage.
//!
//! Each thread lazily creates its own log on first access. When the thread
//! exits the slot is dropped, which discards any pending actions without
//! running them.
//!
//! Popped actions are run or dropped after the slot borrow is released, so
//! nothing caller-supplied executes while the log is borrowed.

use std::cell::RefCell;
use std::process;
use std::sync::OnceLock;

use tracing::{debug, error};
use undo_core::{Savepoint, UndoAction, UndoConfig, UndoError, UndoLog, UndoResult};

static CONFIG: OnceLock<UndoConfig> = OnceLock::new();

thread_local! {
    static LOG: RefCell<UndoLog> = RefCell::new(create_log());
}

/// Install the process-wide configuration.
///
/// Applies to every thread log created afterwards. Can only be called once.
pub fn configure(config: UndoConfig) -> UndoResult<()> {
    config.validate()?;
    CONFIG.set(config).map_err(|_| UndoError::AlreadyConfigured)
}

fn create_log() -> UndoLog {
    let config = CONFIG.get().cloned().unwrap_or_default();
    match UndoLog::with_config(&config) {
        Ok(log) => log,
        Err(err) => fatal(&err),
    }
}

/// Report an unrecoverable failure and abort the process.
pub(crate) fn fatal(err: &UndoError) -> ! {
    error!(error = %err, "unrecoverable undo log failure");
    eprintln!("{}", err);
    process::abort()
}

fn with_log<R>(f: impl FnOnce(&mut UndoLog) -> UndoResult<R>) -> R {
    let result = LOG
        .try_with(|cell| -> UndoResult<R> {
            let mut log = cell.try_borrow_mut()?;
            f(&mut log)
        })
        .map_err(UndoError::from)
        .and_then(|inner| inner);

    match result {
        Ok(value) => value,
        Err(err) => fatal(&err),
    }
}

pub(crate) fn push(action: UndoAction) {
    with_log(|log| log.push(action))
}

pub(crate) fn mark() -> Savepoint {
    with_log(|log| Ok(log.mark()))
}

pub(crate) fn rollback_to(savepoint: Savepoint) {
    let popped = unwind(savepoint, UndoAction::run);
    if popped > 0 {
        debug!(%savepoint, popped, "rolled back thread undo log");
    }
}

pub(crate) fn commit_to(savepoint: Savepoint) {
    let popped = unwind(savepoint, UndoAction::discard);
    if popped > 0 {
        debug!(%savepoint, popped, "committed thread undo log");
    }
}

fn unwind(savepoint: Savepoint, dispose: fn(UndoAction)) -> usize {
    let mut popped = 0;
    while let Some(action) = with_log(|log| Ok(log.pop_above(savepoint))) {
        dispose(action);
        popped += 1;
    }
    popped
}
