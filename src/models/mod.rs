//! Core data models for spendlog
//!
//! This module contains the data structures that represent the ledger
//! domain: the expense record plus the fixed category and budget tables.

pub mod category;
pub mod expense;

pub use category::{BudgetTable, CategorySet};
pub use expense::Expense;
