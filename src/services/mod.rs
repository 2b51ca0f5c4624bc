//! Service layer for TripSplit
//!
//! Business logic on top of the models and storage: input validation
//! against the roster, balance calculation and settlement advice.

pub mod balance;
pub mod expense;
pub mod settlement;
pub mod summary;

pub use balance::{compute_balances, BalanceSheet, ParticipantBalance};
pub use expense::{CreateExpenseInput, ExpenseService};
pub use settlement::{
    advise_settlement, classify_balances, derive_settlement, BalanceStatus, ParticipantStatus,
    SettlementOutcome,
};
pub use summary::{summarize, TripSummary};
