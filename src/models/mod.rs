//! Core data models for TripSplit
//!
//! This module contains the data structures of the expense-splitting domain:
//! participants and the roster, expense records, ids and money.

pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, ParticipantId};
pub use money::{Money, MoneyParseError, SETTLEMENT_TOLERANCE};
pub use participant::{Participant, Roster, RosterValidationError};
