//! Expense store
//!
//! Owns the ordered expense sequence for the lifetime of the process. Every
//! mutation writes the full sequence through the persistence port.

use crate::error::{SplitError, SplitResult};
use crate::models::{Expense, ExpenseId};

use super::persistence::{ExpensePersistence, JsonExpenseFile};

/// Ordered, persisted collection of expense records
pub struct ExpenseStore<P: ExpensePersistence = JsonExpenseFile> {
    persistence: P,
    expenses: Vec<Expense>,
}

impl<P: ExpensePersistence> ExpenseStore<P> {
    /// Open a store, rehydrating it from persistence
    pub fn open(persistence: P) -> Self {
        let expenses = persistence.load();
        tracing::debug!("Loaded {} expenses", expenses.len());
        Self {
            persistence,
            expenses,
        }
    }

    /// Append a record and persist
    ///
    /// If the save fails the record is not kept.
    pub fn add(&mut self, expense: Expense) -> SplitResult<()> {
        self.expenses.push(expense);
        if let Err(e) = self.persistence.save(&self.expenses) {
            self.expenses.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the record with `id`, returning it
    ///
    /// Absent ids are not an error and leave storage untouched.
    pub fn remove(&mut self, id: ExpenseId) -> SplitResult<Option<Expense>> {
        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let removed = self.expenses.remove(index);
        if let Err(e) = self.persistence.save(&self.expenses) {
            self.expenses.insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get a record by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Id for the next record, strictly greater than any stored id
    ///
    /// Fails when a stored id already holds the largest possible value.
    pub fn next_id(&self) -> SplitResult<ExpenseId> {
        let last = self.expenses.iter().map(|e| e.id).max();
        ExpenseId::next_after(last).ok_or_else(|| {
            SplitError::Storage(format!(
                "Expense ids exhausted: stored id {} has no successor",
                last.map(|id| id.to_string()).unwrap_or_default()
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Access the persistence backend
    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ParticipantId};
    use crate::storage::persistence::InMemoryPersistence;
    use tempfile::TempDir;

    fn expense(store: &ExpenseStore<impl ExpensePersistence>, amount: f64) -> Expense {
        Expense::new(
            store.next_id().unwrap(),
            "Street food",
            Money::new(amount),
            ParticipantId::new("A"),
            vec!["A".into(), "B".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_open() {
        let store = ExpenseStore::open(InMemoryPersistence::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_persists_and_keeps_order() {
        let mut store = ExpenseStore::open(InMemoryPersistence::new());

        let first = expense(&store, 10.0);
        store.add(first.clone()).unwrap();
        let second = expense(&store, 20.0);
        store.add(second.clone()).unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.all(), &[first.clone(), second.clone()]);
        assert_eq!(store.persistence().stored(), vec![first, second]);
        assert_eq!(store.persistence().save_count(), 2);
    }

    #[test]
    fn test_remove() {
        let mut store = ExpenseStore::open(InMemoryPersistence::new());
        let e = expense(&store, 10.0);
        let id = e.id;
        store.add(e).unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(id));
        assert!(store.is_empty());
        assert!(store.persistence().stored().is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = ExpenseStore::open(InMemoryPersistence::new());
        let e = expense(&store, 10.0);
        store.add(e.clone()).unwrap();
        let saves = store.persistence().save_count();

        let removed = store.remove(ExpenseId::from_millis(-1)).unwrap();
        assert!(removed.is_none());
        assert_eq!(store.all(), &[e]);
        assert_eq!(store.persistence().save_count(), saves);
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let mut store = ExpenseStore::open(InMemoryPersistence::new());
        let kept = expense(&store, 10.0);
        store.add(kept.clone()).unwrap();

        store.persistence().set_fail_saves(true);

        let rejected = expense(&store, 99.0);
        assert!(store.add(rejected).is_err());
        assert_eq!(store.all(), &[kept.clone()]);

        assert!(store.remove(kept.id).is_err());
        assert_eq!(store.all(), &[kept]);
    }

    #[test]
    fn test_rehydrate_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let mut store = ExpenseStore::open(JsonExpenseFile::new(path.clone()));
        let e = expense(&store, 42.0);
        store.add(e.clone()).unwrap();

        let reopened = ExpenseStore::open(JsonExpenseFile::new(path));
        assert_eq!(reopened.all(), &[e.clone()]);
        assert_eq!(reopened.get(e.id).map(|e| e.amount), Some(Money::new(42.0)));
    }

    #[test]
    fn test_next_id_after_max_id_is_error() {
        let stored = Expense::new(
            ExpenseId::from_millis(i64::MAX),
            "Imported",
            Money::new(10.0),
            ParticipantId::new("A"),
            vec!["A".into()],
        )
        .unwrap();
        let store = ExpenseStore::open(InMemoryPersistence::with_expenses(vec![stored]));

        let err = store.next_id().unwrap_err();
        assert!(matches!(err, SplitError::Storage(_)));
    }
}
