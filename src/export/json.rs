//! JSON Export functionality
//!
//! Exports the roster and every expense to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, Money, Participant};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full trip export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_code: String,

    /// Participants in roster order
    pub roster: Vec<Participant>,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub participant_count: usize,

    /// Sum of all expense amounts
    pub total_spent: Money,

    /// Creation time of the oldest expense that has one
    pub earliest_expense: Option<String>,

    /// Creation time of the newest expense that has one
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Build an export from settings and the current expenses
    pub fn new(settings: &Settings, expenses: &[Expense]) -> Self {
        let created = expenses.iter().filter_map(|e| e.created_at);

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            participant_count: settings.roster.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: created.clone().min().map(|t| t.to_rfc3339()),
            latest_expense: created.max().map(|t| t.to_rfc3339()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_code: settings.currency_code.clone(),
            roster: settings.roster.clone(),
            expenses: expenses.to_vec(),
            metadata,
        }
    }
}

/// Export the trip to JSON
pub fn export_full_json<W: Write>(
    settings: &Settings,
    expenses: &[Expense],
    writer: W,
    pretty: bool,
) -> SplitResult<()> {
    let export = FullExport::new(settings, expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
