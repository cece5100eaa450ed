//! Storage layer: the in-memory record store and its flat-file backing
//!
//! `ExpenseStore` is the single in-process owner of the record collection.
//! Every mutation is followed by a synchronous whole-file rewrite before
//! control returns to the caller (write-through). Queries hand out
//! read-only views and never touch the file.

pub mod flat_file;

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::Expense;

/// In-memory expense store with write-through flat-file persistence
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    next_id: u32,
}

impl ExpenseStore {
    /// Open the store backed by the given ledger file
    ///
    /// A missing or unreadable file produces an empty store, never an
    /// error. The id counter resumes at `max(existing ids) + 1` so ids are
    /// never reused, including after deletions in a prior run.
    pub fn open(path: PathBuf) -> Self {
        let expenses = flat_file::read_expenses(&path);
        let next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        Self {
            path,
            expenses,
            next_id,
        }
    }

    /// Insert a new record, assigning the next id, and save the ledger
    ///
    /// The store performs no input validation; callers are responsible for
    /// checking the category and amount beforehand. A save failure is
    /// returned but the in-memory insert stands, so memory and disk can
    /// diverge until the next successful save.
    pub fn insert(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<&Expense> {
        let expense = Expense::new(self.next_id, amount, category, date, description);
        self.next_id += 1;
        self.expenses.push(expense);

        self.save()?;
        Ok(self.expenses.last().expect("record was just pushed"))
    }

    /// Delete the record with the given id, saving only when one was found
    ///
    /// Returns whether a record was removed. The id is never reassigned.
    pub fn delete(&mut self, id: u32) -> LedgerResult<bool> {
        let Some(pos) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        self.expenses.remove(pos);
        self.save()?;
        Ok(true)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Records in the given category, preserving insertion order
    pub fn by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The id the next insert will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    fn save(&self) -> LedgerResult<()> {
        flat_file::write_expenses(&self.path, &self.expenses)
    }
}
