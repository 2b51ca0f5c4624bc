//! Expense model
//!
//! An expense is one shared cost: who paid, how much, and which roster
//! members share it. Records are immutable once created; the per-person
//! share is fixed at creation time and never recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, ParticipantId};
use super::money::{Money, SETTLEMENT_TOLERANCE};

/// A shared trip expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique, increasing identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Total amount paid
    pub amount: Money,

    /// Participant who paid
    #[serde(rename = "paidBy", alias = "payer")]
    pub payer: ParticipantId,

    /// Participants sharing the cost (no duplicates, roster order of entry)
    pub participants: Vec<ParticipantId>,

    /// amount / participants.len(), stored at creation
    pub share_per_person: Money,

    /// When the record was created (absent in records from older data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a validated expense
    ///
    /// Duplicate participants are collapsed, keeping the first occurrence.
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        payer: ParticipantId,
        participants: Vec<ParticipantId>,
    ) -> Result<Self, ExpenseValidationError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !amount.is_finite() || amount.value() <= 0.0 {
            return Err(ExpenseValidationError::InvalidAmount(amount.value()));
        }

        if payer.is_empty() {
            return Err(ExpenseValidationError::EmptyPayer);
        }

        let mut unique: Vec<ParticipantId> = Vec::with_capacity(participants.len());
        for participant in participants {
            if participant.is_empty() {
                continue;
            }
            if !unique.contains(&participant) {
                unique.push(participant);
            }
        }

        let share_per_person = amount
            .split(unique.len())
            .ok_or(ExpenseValidationError::NoParticipants)?;

        Ok(Self {
            id,
            description,
            amount,
            payer,
            participants: unique,
            share_per_person,
            created_at: Some(Utc::now()),
        })
    }

    /// Number of people sharing this expense
    pub fn share_count(&self) -> usize {
        self.participants.len()
    }

    /// Check whether a participant shares this expense
    pub fn is_shared_by(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Sum of all stored shares (≈ amount)
    pub fn total_shares(&self) -> Money {
        Money::new(self.share_per_person.value() * self.share_count() as f64)
    }

    /// Re-check the creation invariants on a record read back from storage
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() || self.amount.value() <= 0.0 {
            return Err(ExpenseValidationError::InvalidAmount(self.amount.value()));
        }

        if self.payer.is_empty() {
            return Err(ExpenseValidationError::EmptyPayer);
        }

        if self.participants.is_empty() {
            return Err(ExpenseValidationError::NoParticipants);
        }

        let shares = self.total_shares();
        if !shares.is_finite() || (shares.value() - self.amount.value()).abs() > SETTLEMENT_TOLERANCE
        {
            return Err(ExpenseValidationError::ShareMismatch {
                amount: self.amount,
                shares,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} paid by {}",
            self.description, self.amount, self.payer
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    InvalidAmount(f64),
    EmptyPayer,
    NoParticipants,
    ShareMismatch { amount: Money, shares: Money },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::InvalidAmount(value) => {
                write!(f, "Amount must be a finite positive number, got {}", value)
            }
            Self::EmptyPayer => write!(f, "Expense must have a payer"),
            Self::NoParticipants => write!(f, "At least one participant must share the expense"),
            Self::ShareMismatch { amount, shares } => write!(
                f,
                "Shares total {} but the expense amount is {}",
                shares, amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<ParticipantId> {
        list.iter().map(|s| ParticipantId::new(*s)).collect()
    }

    #[test]
    fn test_new_expense_computes_share() {
        let expense = Expense::new(
            ExpenseId::from_millis(1),
            "Dinner",
            Money::new(300.0),
            "A".into(),
            ids(&["A", "B", "C"]),
        )
        .unwrap();

        assert_eq!(expense.share_count(), 3);
        assert_eq!(expense.share_per_person.value(), 100.0);
        assert!(expense.is_shared_by(&"B".into()));
        assert!(expense.created_at.is_some());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_share_times_count_matches_amount() {
        let expense = Expense::new(
            ExpenseId::from_millis(1),
            "Tuk-tuk",
            Money::new(100.0),
            "A".into(),
            ids(&["A", "B", "C"]),
        )
        .unwrap();

        assert!(expense.total_shares().approx_eq(expense.amount));
    }

    #[test]
    fn test_duplicate_participants_collapsed() {
        let expense = Expense::new(
            ExpenseId::from_millis(1),
            "Snacks",
            Money::new(90.0),
            "B".into(),
            ids(&["A", "B", "A", "C", "B"]),
        )
        .unwrap();

        assert_eq!(expense.participants, ids(&["A", "B", "C"]));
        assert_eq!(expense.share_per_person.value(), 30.0);
    }

    #[test]
    fn test_description_trimmed() {
        let expense = Expense::new(
            ExpenseId::from_millis(1),
            "  Hotel  ",
            Money::new(50.0),
            "A".into(),
            ids(&["A"]),
        )
        .unwrap();
        assert_eq!(expense.description, "Hotel");
    }

    #[test]
    fn test_rejects_invalid_input() {
        let make = |desc: &str, amount: f64, participants: Vec<ParticipantId>| {
            Expense::new(
                ExpenseId::from_millis(1),
                desc,
                Money::new(amount),
                "A".into(),
                participants,
            )
        };

        assert_eq!(
            make("   ", 10.0, ids(&["A"])),
            Err(ExpenseValidationError::EmptyDescription)
        );
        assert_eq!(
            make("Taxi", 0.0, ids(&["A"])),
            Err(ExpenseValidationError::InvalidAmount(0.0))
        );
        assert_eq!(
            make("Taxi", -5.0, ids(&["A"])),
            Err(ExpenseValidationError::InvalidAmount(-5.0))
        );
        assert!(matches!(
            make("Taxi", f64::NAN, ids(&["A"])),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            make("Taxi", f64::INFINITY, ids(&["A"])),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
        assert_eq!(
            make("Taxi", 10.0, vec![]),
            Err(ExpenseValidationError::NoParticipants)
        );
        assert_eq!(
            make("Taxi", 10.0, ids(&[" "])),
            Err(ExpenseValidationError::NoParticipants)
        );
    }

    #[test]
    fn test_validate_detects_tampered_share() {
        let mut expense = Expense::new(
            ExpenseId::from_millis(1),
            "Dinner",
            Money::new(300.0),
            "A".into(),
            ids(&["A", "B", "C"]),
        )
        .unwrap();
        expense.share_per_person = Money::new(50.0);

        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::ShareMismatch { .. })
        ));
    }

    #[test]
    fn test_reads_original_field_names() {
        let json = r#"{
            "id": 1717171717171,
            "description": "Massage",
            "amount": 400,
            "paidBy": "B",
            "participants": ["A", "B"],
            "sharePerPerson": 200
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_millis(), 1_717_171_717_171);
        assert_eq!(expense.payer, ParticipantId::new("B"));
        assert_eq!(expense.share_per_person.value(), 200.0);
        assert!(expense.created_at.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_serializes_camel_case() {
        let expense = Expense::new(
            ExpenseId::from_millis(7),
            "Boat",
            Money::new(20.0),
            "A".into(),
            ids(&["A", "B"]),
        )
        .unwrap();

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["paidBy"], "A");
        assert_eq!(value["sharePerPerson"], 10.0);
    }
}
