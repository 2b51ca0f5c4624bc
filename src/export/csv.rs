//! CSV Export functionality
//!
//! Exports expenses and net balances to spreadsheet-friendly CSV.

use std::io::Write;

use serde::Serialize;

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Roster};
use crate::services::{BalanceStatus, TripSummary};

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Paid By")]
    payer: &'a str,
    #[serde(rename = "Shared By")]
    sharers: String,
    #[serde(rename = "Share Per Person")]
    share: String,
    #[serde(rename = "Created At")]
    created_at: String,
}

#[derive(Serialize)]
struct BalanceRecord<'a> {
    #[serde(rename = "Participant")]
    participant: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Net")]
    net: String,
    #[serde(rename = "Status")]
    status: &'static str,
}

fn export_error(e: csv::Error) -> SplitError {
    SplitError::Export(e.to_string())
}

/// Export all expenses to CSV, one row per expense
///
/// Sharers are joined with `;` inside a single column.
pub fn export_expenses_csv<W: Write>(
    expenses: &[Expense],
    roster: &Roster,
    writer: W,
) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(ExpenseRecord {
                id: expense.id.as_millis(),
                description: &expense.description,
                amount: format!("{:.2}", expense.amount.value()),
                payer: roster.display_name(&expense.payer),
                sharers: expense
                    .participants
                    .iter()
                    .map(|p| roster.display_name(p))
                    .collect::<Vec<_>>()
                    .join(";"),
                share: format!("{:.2}", expense.share_per_person.value()),
                created_at: expense
                    .created_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default(),
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}

/// Export each participant's net balance and status to CSV
pub fn export_balances_csv<W: Write>(
    summary: &TripSummary,
    roster: &Roster,
    writer: W,
) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (balance, status) in summary.sheet.balances().iter().zip(&summary.statuses) {
        csv_writer
            .serialize(BalanceRecord {
                participant: balance.participant.as_str(),
                name: roster.display_name(&balance.participant),
                net: format!("{:.2}", balance.net.value()),
                status: match status.status {
                    BalanceStatus::Creditor(_) => "creditor",
                    BalanceStatus::Debtor(_) => "debtor",
                    BalanceStatus::Settled => "settled",
                },
            })
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}
