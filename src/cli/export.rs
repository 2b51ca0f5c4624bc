//! CLI command for data export
//!
//! Writes expenses or the full trip to a file in the chosen format.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::export::{csv, json, yaml};
use crate::services::summarize;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (roster and expenses)
    Json,
    /// YAML format (roster and expenses, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Export net balances instead of expenses (CSV only)
    #[arg(long)]
    pub balances: bool,
}

/// Handle the export command
///
/// The export is rendered in memory first, so a failure leaves any existing
/// file at the output path untouched.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> SplitResult<()> {
    if args.balances && args.format != ExportFormat::Csv {
        return Err(SplitError::Validation(
            "--balances is only available with --format csv".into(),
        ));
    }

    let expenses = storage.expenses.all();
    let mut buffer = Vec::new();

    let message = match args.format {
        ExportFormat::Csv if args.balances => {
            let roster = settings.roster()?;
            let summary = summarize(expenses, &roster)?;
            csv::export_balances_csv(&summary, &roster, &mut buffer)?;
            format!("Exported {} balances", roster.len())
        }
        ExportFormat::Csv => {
            let roster = settings.roster()?;
            csv::export_expenses_csv(expenses, &roster, &mut buffer)?;
            format!("Exported {} expenses", expenses.len())
        }
        ExportFormat::Json => {
            json::export_full_json(settings, expenses, &mut buffer, args.pretty)?;
            "Trip exported".to_string()
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(settings, expenses, &mut buffer)?;
            "Trip exported".to_string()
        }
    };

    fs::write(&args.output, &buffer).map_err(|e| {
        SplitError::Export(format!(
            "Failed to write file {}: {}",
            args.output.display(),
            e
        ))
    })?;

    println!("{} to: {}", message, args.output.display());

    Ok(())
}
