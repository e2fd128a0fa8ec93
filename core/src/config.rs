//! Undo log configuration.

use crate::error::{UndoError, UndoResult};

/// Actions reserved up front when a log is created.
pub const UNDO_INITIAL_CAPACITY_DEFAULT: usize = 16;

/// Upper bound on the up-front reservation.
pub const UNDO_INITIAL_CAPACITY_MAX: usize = 1024 * 1024;

/// Configuration applied when a log is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoConfig {
    /// Number of actions to reserve before the first push.
    pub initial_capacity: usize,
}

impl Default for UndoConfig {
    fn default() -> Self {
        Self {
            initial_capacity: UNDO_INITIAL_CAPACITY_DEFAULT,
        }
    }
}

impl UndoConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> UndoResult<()> {
        if self.initial_capacity > UNDO_INITIAL_CAPACITY_MAX {
            return Err(UndoError::invalid_configuration(
                "initial_capacity",
                format!("must be at most {}", UNDO_INITIAL_CAPACITY_MAX),
            ));
        }
        Ok(())
    }
}
