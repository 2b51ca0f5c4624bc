//! Persistence port for the expense store
//!
//! The store only needs two operations from its backing storage: load the
//! whole sequence at start-up and save the whole sequence after every
//! mutation. Loading never fails; absent or corrupt data reads as empty.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SplitError, SplitResult};
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Backing storage for the expense sequence
pub trait ExpensePersistence {
    /// Load all stored expenses in insertion order
    fn load(&self) -> Vec<Expense>;

    /// Replace the stored sequence with `expenses`
    fn save(&self, expenses: &[Expense]) -> SplitResult<()>;
}

/// Stored expense data as written by `save`
#[derive(Debug, Serialize)]
struct ExpenseData<'a> {
    expenses: &'a [Expense],
}

/// Stored expense data before individual records are checked
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawExpenseData {
    Wrapped { expenses: Vec<Value> },
    /// Bare array, as kept by the browser version of the app
    Bare(Vec<Value>),
}

impl Default for RawExpenseData {
    fn default() -> Self {
        Self::Wrapped {
            expenses: Vec::new(),
        }
    }
}

impl RawExpenseData {
    fn into_records(self) -> Vec<Value> {
        match self {
            Self::Wrapped { expenses } | Self::Bare(expenses) => expenses,
        }
    }
}

/// Decode records one at a time, dropping the ones that do not parse
fn decode_records(records: Vec<Value>) -> Vec<Expense> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(expense) => Some(expense),
            Err(e) => {
                tracing::warn!("Skipping unreadable stored expense at position {index}: {e}");
                None
            }
        })
        .collect()
}

/// Drop records that break the creation invariants
fn retain_valid(expenses: Vec<Expense>) -> Vec<Expense> {
    expenses
        .into_iter()
        .filter(|expense| match expense.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Skipping stored expense {}: {e}", expense.id);
                false
            }
        })
        .collect()
}

/// Expense persistence backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonExpenseFile {
    path: PathBuf,
}

impl JsonExpenseFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpensePersistence for JsonExpenseFile {
    fn load(&self) -> Vec<Expense> {
        let data: RawExpenseData = read_json_or_default(&self.path);
        retain_valid(decode_records(data.into_records()))
    }

    fn save(&self, expenses: &[Expense]) -> SplitResult<()> {
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }
}

/// In-memory persistence, mainly for tests and dry runs
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    stored: RefCell<Vec<Expense>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with previously stored records
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            stored: RefCell::new(expenses),
            ..Self::default()
        }
    }

    /// Snapshot of what was last saved
    pub fn stored(&self) -> Vec<Expense> {
        self.stored.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make subsequent saves fail
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl ExpensePersistence for InMemoryPersistence {
    fn load(&self) -> Vec<Expense> {
        retain_valid(self.stored.borrow().clone())
    }

    fn save(&self, expenses: &[Expense]) -> SplitResult<()> {
        if self.fail_saves.get() {
            return Err(SplitError::Storage("In-memory save disabled".into()));
        }
        *self.stored.borrow_mut() = expenses.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
