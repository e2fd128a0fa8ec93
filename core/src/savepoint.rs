//! Savepoints.

use std::fmt;

/// A depth coordinate captured by `mark`.
///
/// Savepoints are only meaningful on the log that produced them. A
/// savepoint above the current depth is stale and bounds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Savepoint(usize);

impl Savepoint {
    /// The empty log. Rolling back or committing to it unwinds everything.
    pub const ORIGIN: Savepoint = Savepoint(0);

    /// Create a savepoint at the given depth.
    pub const fn new(depth: usize) -> Self {
        Self(depth)
    }

    /// The depth this savepoint was taken at.
    pub const fn depth(self) -> usize {
        self.0
    }
}

impl fmt::Display for Savepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sp@{}", self.0)
    }
}

impl From<usize> for Savepoint {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}
