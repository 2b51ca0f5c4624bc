//! Settlement advice
//!
//! Turns a balance sheet into a conclusion: everyone is square, one person
//! pays another, or the per-participant list has to be read as is. No
//! multi-party transfer plan is attempted.

use serde::Serialize;

use crate::error::{SplitError, SplitResult};
use crate::models::{Money, ParticipantId};

use super::balance::BalanceSheet;

/// Classification of a single net balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Is owed this amount
    Creditor(Money),
    /// Owes this amount
    Debtor(Money),
    Settled,
}

impl BalanceStatus {
    /// Classify a net balance using the ±0.01 tolerance band
    pub fn classify(net: Money) -> Self {
        if net.is_credit() {
            Self::Creditor(net)
        } else if net.is_debt() {
            Self::Debtor(net.abs())
        } else {
            Self::Settled
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// A participant paired with their status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantStatus {
    pub participant: ParticipantId,
    pub status: BalanceStatus,
}

/// Conclusion drawn from a balance sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SettlementOutcome {
    /// Every balance is within tolerance of zero
    AllSettled,
    /// Raw per-participant list, for callers to present as is
    PerParticipantStatus { statuses: Vec<ParticipantStatus> },
    /// Exactly one debtor and one creditor
    SinglePairTransfer {
        debtor: ParticipantId,
        creditor: ParticipantId,
        amount: Money,
    },
    /// Several debtors or creditors at once; no instruction produced
    Ambiguous,
}

/// Status of every participant in sheet order
pub fn classify_balances(sheet: &BalanceSheet) -> Vec<ParticipantStatus> {
    sheet
        .balances()
        .iter()
        .map(|b| ParticipantStatus {
            participant: b.participant.clone(),
            status: BalanceStatus::classify(b.net),
        })
        .collect()
}

fn mismatch(discrepancy: Money) -> SplitError {
    tracing::error!("Net balances do not cancel out: off by {}", discrepancy);
    SplitError::BalanceMismatch {
        discrepancy: discrepancy.value(),
    }
}

/// Decide between `AllSettled`, `SinglePairTransfer` and `Ambiguous`
///
/// Balances that do not sum to zero within tolerance surface as
/// [`SplitError::BalanceMismatch`] instead of an instruction.
pub fn derive_settlement(sheet: &BalanceSheet) -> SplitResult<SettlementOutcome> {
    let statuses = classify_balances(sheet);

    if statuses.iter().all(|s| s.status.is_settled()) {
        return Ok(SettlementOutcome::AllSettled);
    }

    if !sheet.is_conserved() {
        return Err(mismatch(sheet.net_sum()));
    }

    let debtors: Vec<(&ParticipantId, Money)> = statuses
        .iter()
        .filter_map(|s| match s.status {
            BalanceStatus::Debtor(amount) => Some((&s.participant, amount)),
            _ => None,
        })
        .collect();
    let creditors: Vec<(&ParticipantId, Money)> = statuses
        .iter()
        .filter_map(|s| match s.status {
            BalanceStatus::Creditor(amount) => Some((&s.participant, amount)),
            _ => None,
        })
        .collect();

    tracing::debug!(
        "{} debtors, {} creditors",
        debtors.len(),
        creditors.len()
    );

    match (debtors.as_slice(), creditors.as_slice()) {
        // Settled participants may leave the pair a few hundredths apart;
        // the debtor pays what they owe.
        ([(debtor, owed)], [(creditor, _)]) => Ok(SettlementOutcome::SinglePairTransfer {
            debtor: (*debtor).clone(),
            creditor: (*creditor).clone(),
            amount: *owed,
        }),
        _ => Ok(SettlementOutcome::Ambiguous),
    }
}

/// Like [`derive_settlement`], with `Ambiguous` replaced by the
/// per-participant status list
pub fn advise_settlement(sheet: &BalanceSheet) -> SplitResult<SettlementOutcome> {
    match derive_settlement(sheet)? {
        SettlementOutcome::Ambiguous => Ok(SettlementOutcome::PerParticipantStatus {
            statuses: classify_balances(sheet),
        }),
        outcome => Ok(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            BalanceStatus::classify(Money::new(200.0)),
            BalanceStatus::Creditor(Money::new(200.0))
        );
        assert_eq!(
            BalanceStatus::classify(Money::new(-100.0)),
            BalanceStatus::Debtor(Money::new(100.0))
        );
        assert_eq!(BalanceStatus::classify(Money::new(0.01)), BalanceStatus::Settled);
        assert_eq!(BalanceStatus::classify(Money::new(-0.01)), BalanceStatus::Settled);
    }

    #[test]
    fn test_all_zero_is_settled() {
        let sheet = BalanceSheet::from_pairs([("A", 0.0), ("B", 0.0), ("C", 0.0)]);
        assert_eq!(derive_settlement(&sheet).unwrap(), SettlementOutcome::AllSettled);
    }

    #[test]
    fn test_within_tolerance_is_settled() {
        let sheet = BalanceSheet::from_pairs([("A", 0.004), ("B", -0.004)]);
        assert_eq!(derive_settlement(&sheet).unwrap(), SettlementOutcome::AllSettled);
    }

    #[test]
    fn test_single_pair_transfer() {
        let sheet = BalanceSheet::from_pairs([("A", 50.0), ("B", -50.0)]);
        assert_eq!(
            derive_settlement(&sheet).unwrap(),
            SettlementOutcome::SinglePairTransfer {
                debtor: "B".into(),
                creditor: "A".into(),
                amount: Money::new(50.0),
            }
        );
    }

    #[test]
    fn test_single_pair_in_larger_roster() {
        let sheet = BalanceSheet::from_pairs([("A", 0.0), ("B", -25.0), ("C", 0.0), ("D", 25.0)]);
        assert_eq!(
            derive_settlement(&sheet).unwrap(),
            SettlementOutcome::SinglePairTransfer {
                debtor: "B".into(),
                creditor: "D".into(),
                amount: Money::new(25.0),
            }
        );
    }

    #[test]
    fn test_two_debtors_is_ambiguous() {
        let sheet = BalanceSheet::from_pairs([("A", 200.0), ("B", -100.0), ("C", -100.0)]);
        assert_eq!(derive_settlement(&sheet).unwrap(), SettlementOutcome::Ambiguous);
    }

    #[test]
    fn test_two_creditors_is_ambiguous() {
        let sheet = BalanceSheet::from_pairs([("A", 30.0), ("B", 20.0), ("C", -50.0)]);
        assert_eq!(derive_settlement(&sheet).unwrap(), SettlementOutcome::Ambiguous);
    }

    #[test]
    fn test_advise_falls_back_to_statuses() {
        let sheet = BalanceSheet::from_pairs([("A", 200.0), ("B", -100.0), ("C", -100.0)]);

        let outcome = advise_settlement(&sheet).unwrap();
        assert_eq!(
            outcome,
            SettlementOutcome::PerParticipantStatus {
                statuses: vec![
                    ParticipantStatus {
                        participant: "A".into(),
                        status: BalanceStatus::Creditor(Money::new(200.0)),
                    },
                    ParticipantStatus {
                        participant: "B".into(),
                        status: BalanceStatus::Debtor(Money::new(100.0)),
                    },
                    ParticipantStatus {
                        participant: "C".into(),
                        status: BalanceStatus::Debtor(Money::new(100.0)),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_advise_keeps_pair_transfer() {
        let sheet = BalanceSheet::from_pairs([("A", 50.0), ("B", -50.0)]);
        assert!(matches!(
            advise_settlement(&sheet).unwrap(),
            SettlementOutcome::SinglePairTransfer { .. }
        ));
    }

    #[test]
    fn test_unbalanced_pair_is_mismatch() {
        let sheet = BalanceSheet::from_pairs([("A", 50.0), ("B", -40.0)]);
        let err = derive_settlement(&sheet).unwrap_err();

        match err {
            SplitError::BalanceMismatch { discrepancy } => {
                assert!((discrepancy - 10.0).abs() < 1e-9)
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_pair_with_settled_remainders() {
        // A paid 0.02 for A, B, C and 10.00 for A, D
        let sheet = BalanceSheet::from_pairs([
            ("A", 0.02 - 0.02 / 3.0 + 5.0),
            ("B", -0.02 / 3.0),
            ("C", -0.02 / 3.0),
            ("D", -5.0),
        ]);
        assert_eq!(
            derive_settlement(&sheet).unwrap(),
            SettlementOutcome::SinglePairTransfer {
                debtor: "D".into(),
                creditor: "A".into(),
                amount: Money::new(5.0),
            }
        );
    }

    #[test]
    fn test_unbalanced_group_is_mismatch() {
        let sheet = BalanceSheet::from_pairs([("A", 100.0), ("B", -10.0), ("C", -10.0)]);
        assert!(matches!(
            derive_settlement(&sheet),
            Err(SplitError::BalanceMismatch { .. })
        ));
    }
}
