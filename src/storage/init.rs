//! Storage initialization
//!
//! Handles first-run setup: settings file and an empty expense list

use crate::config::paths::TripPaths;
use crate::config::settings::Settings;
use crate::error::SplitError;

use super::persistence::{ExpensePersistence, JsonExpenseFile};

/// Initialize storage for a fresh installation
///
/// Existing expense data is never overwritten.
pub fn initialize_storage(paths: &TripPaths, settings: &mut Settings) -> Result<(), SplitError> {
    paths.ensure_directories()?;

    // Fails early on a broken roster instead of at the first summary
    settings.roster()?;

    if !paths.expenses_file().exists() {
        JsonExpenseFile::new(paths.expenses_file()).save(&[])?;
    }

    settings.setup_completed = true;
    settings.save(paths)?;

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TripPaths) -> bool {
    !paths.is_initialized()
}
