//! Expense service
//!
//! Validates new expenses against the roster before they reach the store,
//! so unknown participants are rejected at input time.

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, ExpenseId, Money, ParticipantId, Roster};
use crate::storage::{ExpensePersistence, ExpenseStore};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub payer: ParticipantId,
    /// Sharers; `None` means the whole roster
    pub participants: Option<Vec<ParticipantId>>,
}

impl CreateExpenseInput {
    /// Expense shared by the whole roster
    pub fn shared_by_all(
        description: impl Into<String>,
        amount: Money,
        payer: impl Into<ParticipantId>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            payer: payer.into(),
            participants: None,
        }
    }

    /// Restrict the expense to a subset of the roster
    pub fn shared_by<I, P>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        self.participants = Some(participants.into_iter().map(Into::into).collect());
        self
    }
}

/// Service for expense management
pub struct ExpenseService<'a, P: ExpensePersistence> {
    store: &'a mut ExpenseStore<P>,
    roster: &'a Roster,
}

impl<'a, P: ExpensePersistence> ExpenseService<'a, P> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore<P>, roster: &'a Roster) -> Self {
        Self { store, roster }
    }

    /// Validate and record a new expense
    pub fn add(&mut self, input: CreateExpenseInput) -> SplitResult<Expense> {
        let participants = input.participants.unwrap_or_else(|| self.roster.ids());

        let expense = Expense::new(
            self.store.next_id()?,
            input.description,
            input.amount,
            input.payer,
            participants,
        )
        .map_err(|e| SplitError::Validation(e.to_string()))?;

        if !self.roster.contains(&expense.payer) {
            return Err(SplitError::unknown_participant(
                expense.payer.as_str(),
                "payer is not on the roster",
            ));
        }

        if let Some(unknown) = expense
            .participants
            .iter()
            .find(|p| !self.roster.contains(p))
        {
            return Err(SplitError::unknown_participant(
                unknown.as_str(),
                "sharer is not on the roster",
            ));
        }

        self.store.add(expense.clone())?;

        tracing::info!(
            "Added expense {} '{}' ({} paid by {}, shared by {})",
            expense.id,
            expense.description,
            expense.amount,
            expense.payer,
            expense.share_count()
        );

        Ok(expense)
    }

    /// Delete an expense; missing ids return `Ok(None)`
    pub fn delete(&mut self, id: ExpenseId) -> SplitResult<Option<Expense>> {
        let removed = self.store.remove(id)?;
        match &removed {
            Some(expense) => tracing::info!("Deleted expense {} '{}'", id, expense.description),
            None => tracing::debug!("No expense with id {} to delete", id),
        }
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.store.all()
    }

    /// Find an expense by its id string
    pub fn find(&self, identifier: &str) -> SplitResult<&Expense> {
        let id: ExpenseId = identifier
            .parse()
            .map_err(|_| SplitError::Validation(format!("Invalid expense id: {}", identifier)))?;

        self.store
            .get(id)
            .ok_or_else(|| SplitError::expense_not_found(identifier))
    }
}
