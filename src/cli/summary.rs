//! Summary CLI command
//!
//! Prints total spent, per-participant balances and the settlement conclusion.

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::SplitResult;
use crate::services::summarize;
use crate::storage::Storage;

/// Handle the summary command
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> SplitResult<()> {
    let roster = settings.roster()?;
    let summary = summarize(storage.expenses.all(), &roster)?;

    println!("{}", format_summary(&summary, &roster, &settings.currency_code));

    Ok(())
}
