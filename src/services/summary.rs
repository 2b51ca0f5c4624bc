//! Trip summary
//!
//! Bundles balances, per-participant statuses and the settlement conclusion
//! for the presentation layer.

use serde::Serialize;

use crate::error::SplitResult;
use crate::models::{Expense, Money, Roster};

use super::balance::{compute_balances, BalanceSheet};
use super::settlement::{classify_balances, derive_settlement, ParticipantStatus, SettlementOutcome};

/// Everything needed to render a settlement summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub sheet: BalanceSheet,
    pub statuses: Vec<ParticipantStatus>,
    pub outcome: SettlementOutcome,
}

impl TripSummary {
    pub fn total_spent(&self) -> Money {
        self.sheet.total_spent()
    }
}

/// Compute balances and the settlement conclusion in one pass
pub fn summarize(expenses: &[Expense], roster: &Roster) -> SplitResult<TripSummary> {
    let sheet = compute_balances(expenses, roster)?;
    let outcome = derive_settlement(&sheet)?;
    let statuses = classify_balances(&sheet);

    Ok(TripSummary {
        sheet,
        statuses,
        outcome,
    })
}
