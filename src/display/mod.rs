//! Display formatting for terminal output
//!
//! Turns expenses and summaries into plain-text tables.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_participant_list};
pub use summary::{format_conclusion, format_status, format_summary};
