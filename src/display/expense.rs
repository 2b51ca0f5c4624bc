//! Expense display formatting
//!
//! Renders the expense list and the roster as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Roster};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid by")]
    payer: String,
    #[tabled(rename = "Shared by")]
    sharers: String,
    #[tabled(rename = "Per person")]
    share: String,
}

#[derive(Tabled)]
struct ParticipantRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format the expense list as a table
pub fn format_expense_list(expenses: &[Expense], roster: &Roster, currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        description: expense.description.clone(),
        amount: expense.amount.format_with_code(currency),
        payer: roster.display_name(&expense.payer).to_string(),
        sharers: expense
            .participants
            .iter()
            .map(|p| roster.display_name(p))
            .collect::<Vec<_>>()
            .join(", "),
        share: expense.share_per_person.format_with_code(currency),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n\nTotal: {} expenses", expenses.len()));
    output
}

/// Format the roster as a table
pub fn format_participant_list(roster: &Roster) -> String {
    let rows = roster.iter().map(|p| ParticipantRow {
        id: p.id.to_string(),
        name: p.name.clone(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, Participant, ParticipantId};

    fn roster() -> Roster {
        Roster::new(vec![
            Participant::new("A", "Andy"),
            Participant::new("B", "Coco"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &roster(), "THB"),
            "No expenses recorded."
        );
    }

    #[test]
    fn test_list_uses_display_names() {
        let expense = Expense::new(
            ExpenseId::from_millis(1717),
            "Night market",
            Money::new(100.0),
            "A".into(),
            vec![ParticipantId::new("A"), "B".into()],
        )
        .unwrap();

        let output = format_expense_list(&[expense], &roster(), "THB");
        assert!(output.contains("1717"));
        assert!(output.contains("Night market"));
        assert!(output.contains("100.00 THB"));
        assert!(output.contains("Andy, Coco"));
        assert!(output.contains("50.00 THB"));
        assert!(output.contains("Total: 1 expenses"));
    }

    #[test]
    fn test_participant_list() {
        let output = format_participant_list(&roster());
        assert!(output.contains("Andy"));
        assert!(output.contains("Coco"));
    }
}
