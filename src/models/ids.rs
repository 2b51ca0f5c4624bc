//! Strongly-typed ID wrappers
//!
//! Using newtype wrappers prevents accidentally mixing up expense ids and
//! participant keys at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Utc;

/// Identifier of an expense record
///
/// The value is the creation time in Unix milliseconds, which keeps ids
/// increasing in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an ID from raw milliseconds
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the underlying millisecond value
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Next id after `last`, based on the current clock
    ///
    /// Never returns a value less than or equal to `last`. Returns `None`
    /// when `last` is already `i64::MAX`.
    pub fn next_after(last: Option<ExpenseId>) -> Option<Self> {
        let now = Utc::now().timestamp_millis();
        match last {
            Some(last) if last.0 >= now => last.0.checked_add(1).map(Self),
            _ => Some(Self(now)),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Stable key of a roster participant (e.g. "A")
///
/// Stored as a plain string; deserialization trims it like [`ParticipantId::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a participant id, trimming surrounding whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self(id.trim().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the id is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}
