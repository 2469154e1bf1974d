//! Identity types and the injected id sequence.
//!
//! # Invariants
//! - Ids handed out by one `IdSequence` are strictly increasing and never reused.
//! - An id is fixed at construction and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

/// Stable identifier of one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id generator.
///
/// Owned by whoever creates entities (normally the staffing service) and
/// passed in explicitly, so there is no hidden process-global counter.
///
/// # Invariants
/// - The first value is `1` unless constructed with [`IdSequence::starting_at`].
/// - There is no reset operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Creates a sequence whose first value is `1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a sequence continuing from `first`.
    ///
    /// `0` is not a valid id and is clamped to `1`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.max(1),
        }
    }

    /// Returns the next id value and advances the sequence.
    pub fn next_value(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// Returns the value the next call to [`IdSequence::next_value`] yields.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
