//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable layout.

use std::io::Write;

use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::export::json::FullExport;
use crate::models::Expense;

/// Export the trip to YAML
pub fn export_full_yaml<W: Write>(
    settings: &Settings,
    expenses: &[Expense],
    mut writer: W,
) -> SplitResult<()> {
    let export = FullExport::new(settings, expenses);

    writeln!(writer, "# TripSplit Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SplitError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
