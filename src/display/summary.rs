//! Summary display formatting
//!
//! Renders total spent, each participant's status and the conclusion line.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Roster;
use crate::services::{BalanceStatus, SettlementOutcome, TripSummary};

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Participant")]
    name: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Human-readable status of one participant
pub fn format_status(status: &BalanceStatus, currency: &str) -> String {
    match status {
        BalanceStatus::Creditor(amount) => format!("is owed {}", amount.format_with_code(currency)),
        BalanceStatus::Debtor(amount) => format!("owes {}", amount.format_with_code(currency)),
        BalanceStatus::Settled => "settled".to_string(),
    }
}

/// One-line conclusion for a settlement outcome
pub fn format_conclusion(outcome: &SettlementOutcome, roster: &Roster, currency: &str) -> String {
    match outcome {
        SettlementOutcome::AllSettled => "All settled!".to_string(),
        SettlementOutcome::SinglePairTransfer {
            debtor,
            creditor,
            amount,
        } => format!(
            "{} pays {} {}",
            roster.display_name(debtor),
            roster.display_name(creditor),
            amount.format_with_code(currency)
        ),
        SettlementOutcome::Ambiguous | SettlementOutcome::PerParticipantStatus { .. } => {
            "Settlement needed, see the list above.".to_string()
        }
    }
}

/// Format the full settlement summary
pub fn format_summary(summary: &TripSummary, roster: &Roster, currency: &str) -> String {
    let rows = summary
        .sheet
        .balances()
        .iter()
        .zip(&summary.statuses)
        .map(|(balance, status)| BalanceRow {
            name: roster.display_name(&balance.participant).to_string(),
            net: balance.net.format_with_code(currency),
            status: format_status(&status.status, currency),
        });

    let mut output = format!(
        "Total spent: {}\n\n",
        summary.total_spent().format_with_code(currency)
    );
    output.push_str(&Table::new(rows).with(Style::psql()).to_string());
    output.push_str("\n\n");
    output.push_str(&format_conclusion(&summary.outcome, roster, currency));
    output
}
