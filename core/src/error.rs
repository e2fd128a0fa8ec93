//! Undo log error types.

use std::cell::BorrowMutError;
use std::collections::TryReserveError;
use std::thread::AccessError;

use thiserror::Error;

/// Undo log errors.
///
/// Stale savepoints and half-empty actions are not errors. Everything here
/// is unrecoverable for a thread-local log.
#[derive(Debug, Error)]
pub enum UndoError {
    /// Storage for a new action could not be allocated.
    #[error("undo stack memory allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),

    /// The thread's log slot is gone (thread is shutting down).
    #[error("thread specific undo log is unavailable: {0}")]
    StorageUnavailable(#[from] AccessError),

    /// The thread's log is already borrowed.
    #[error("undo log is already in use on this thread")]
    LogInUse(#[from] BorrowMutError),

    /// Invalid configuration value.
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Configuration was already installed.
    #[error("undo configuration already installed")]
    AlreadyConfigured,
}

impl UndoError {
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for undo log operations.
pub type UndoResult<T> = Result<T, UndoError>;
