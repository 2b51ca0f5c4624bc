//! Storage layer for TripSplit
//!
//! Provides JSON file storage with atomic writes and the expense store that
//! sits on top of it.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod persistence;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use init::initialize_storage;
pub use persistence::{ExpensePersistence, InMemoryPersistence, JsonExpenseFile};

use crate::config::paths::TripPaths;
use crate::error::SplitError;

/// Main storage coordinator
pub struct Storage {
    paths: TripPaths,
    pub expenses: ExpenseStore<JsonExpenseFile>,
}

impl Storage {
    /// Open storage under `paths`, loading persisted expenses
    pub fn open(paths: TripPaths) -> Result<Self, SplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::open(JsonExpenseFile::new(paths.expenses_file())),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TripPaths {
        &self.paths
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
