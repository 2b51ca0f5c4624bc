//! Balance calculation
//!
//! Maps an expense sequence and the roster to each participant's net
//! balance (paid minus owed share) and the total amount spent.

use serde::Serialize;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Money, ParticipantId, Roster};

/// Net position of one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantBalance {
    pub participant: ParticipantId,
    /// Positive: is owed money. Negative: owes money.
    pub net: Money,
}

/// Net balances in roster order plus the total spent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSheet {
    balances: Vec<ParticipantBalance>,
    total_spent: Money,
}

impl BalanceSheet {
    /// Build a sheet from precomputed balances
    pub fn new(balances: Vec<ParticipantBalance>, total_spent: Money) -> Self {
        Self {
            balances,
            total_spent,
        }
    }

    /// Build a sheet from `(participant, net)` pairs
    pub fn from_pairs<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<ParticipantId>,
    {
        let balances = pairs
            .into_iter()
            .map(|(participant, net)| ParticipantBalance {
                participant: participant.into(),
                net: Money::new(net),
            })
            .collect();
        Self::new(balances, Money::zero())
    }

    pub fn balances(&self) -> &[ParticipantBalance] {
        &self.balances
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Net balance of one participant
    pub fn get(&self, participant: &ParticipantId) -> Option<Money> {
        self.balances
            .iter()
            .find(|b| &b.participant == participant)
            .map(|b| b.net)
    }

    /// Sum of all net balances (zero for consistent data)
    pub fn net_sum(&self) -> Money {
        self.balances.iter().map(|b| b.net).sum()
    }

    /// Total credits equal total debits within tolerance
    pub fn is_conserved(&self) -> bool {
        self.net_sum().is_settled()
    }

    /// Every participant is within tolerance of zero
    pub fn is_all_settled(&self) -> bool {
        self.balances.iter().all(|b| b.net.is_settled())
    }
}

/// Compute net balances for every roster participant
///
/// Payments are credited first, then shares are debited, both in record
/// order. A payer or sharer outside the roster is an error.
pub fn compute_balances(expenses: &[Expense], roster: &Roster) -> SplitResult<BalanceSheet> {
    let mut net = vec![Money::zero(); roster.len()];
    let mut total_spent = Money::zero();

    for expense in expenses {
        let index = roster.position(&expense.payer).ok_or_else(|| {
            SplitError::unknown_participant(
                expense.payer.as_str(),
                format!("payer of expense {} '{}'", expense.id, expense.description),
            )
        })?;
        net[index] += expense.amount;
        total_spent += expense.amount;
    }

    for expense in expenses {
        for participant in &expense.participants {
            let index = roster.position(participant).ok_or_else(|| {
                SplitError::unknown_participant(
                    participant.as_str(),
                    format!("sharer of expense {} '{}'", expense.id, expense.description),
                )
            })?;
            net[index] -= expense.share_per_person;
        }
    }

    let balances: Vec<ParticipantBalance> = roster
        .ids()
        .into_iter()
        .zip(net)
        .map(|(participant, net)| ParticipantBalance { participant, net })
        .collect();

    tracing::debug!(
        "Computed balances for {} participants over {} expenses, total spent {}",
        balances.len(),
        expenses.len(),
        total_spent
    );

    Ok(BalanceSheet::new(balances, total_spent))
}
