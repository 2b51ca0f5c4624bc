//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseId, Money, ParticipantId, Roster};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount paid (e.g. 300, 1,250.50)
        amount: String,
        /// Participant ID of the payer
        #[arg(short, long)]
        payer: String,
        /// Participant IDs sharing the cost, comma-separated (default: everyone)
        #[arg(short, long, value_delimiter = ',')]
        split: Option<Vec<String>>,
    },
    /// List all expenses
    List,
    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let roster = settings.roster()?;
    let currency = &settings.currency_code;
    let mut service = ExpenseService::new(&mut storage.expenses, &roster);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            payer,
            split,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| SplitError::Validation(e.to_string()))?;

            let mut input = CreateExpenseInput::shared_by_all(description, amount, payer.as_str());
            if let Some(split) = split {
                input = input.shared_by(split.iter().map(|s| ParticipantId::new(s.as_str())));
            }

            let expense = service.add(input)?;
            println!(
                "Added expense: {} ({})",
                expense.description,
                expense.amount.format_with_code(currency)
            );
            println!("  ID:         {}", expense.id);
            println!("  Paid by:    {}", roster.display_name(&expense.payer));
            println!(
                "  Per person: {} x {}",
                expense.share_per_person.format_with_code(currency),
                expense.share_count()
            );
        }

        ExpenseCommands::List => {
            println!("{}", format_expense_list(service.list(), &roster, currency));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            println!("Expense:    {}", expense.description);
            println!("ID:         {}", expense.id);
            println!("Amount:     {}", expense.amount.format_with_code(currency));
            println!("Paid by:    {}", roster.display_name(&expense.payer));
            println!("Shared by:  {}", sharer_names(&roster, &expense.participants));
            println!(
                "Per person: {}",
                expense.share_per_person.format_with_code(currency)
            );
            if let Some(created) = expense.created_at {
                println!("Created:    {}", created.format("%Y-%m-%d %H:%M"));
            }
        }

        ExpenseCommands::Delete { id } => {
            let expense_id: ExpenseId = id
                .parse()
                .map_err(|_| SplitError::Validation(format!("Invalid expense id: {}", id)))?;

            match service.delete(expense_id)? {
                Some(deleted) => println!("Deleted expense: {}", deleted.description),
                None => println!("No expense with ID {}; nothing deleted", expense_id),
            }
        }
    }

    Ok(())
}

fn sharer_names(roster: &Roster, participants: &[ParticipantId]) -> String {
    participants
        .iter()
        .map(|p| roster.display_name(p))
        .collect::<Vec<_>>()
        .join(", ")
}
