//! Custom error types for TripSplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for TripSplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Invalid new-expense input (description, amount, participant subset)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payer or sharer that is not part of the roster
    #[error("Unknown participant '{participant}' ({context})")]
    UnknownParticipant {
        participant: String,
        context: String,
    },

    /// Net balances do not sum to zero within tolerance
    #[error("Balance mismatch: net balances are off by {discrepancy:.4}")]
    BalanceMismatch { discrepancy: f64 },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SplitError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create an unknown-participant error
    pub fn unknown_participant(participant: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownParticipant {
            participant: participant.into(),
            context: context.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-participant error
    pub fn is_unknown_participant(&self) -> bool {
        matches!(self, Self::UnknownParticipant { .. })
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for TripSplit operations
pub type SplitResult<T> = Result<T, SplitError>;
