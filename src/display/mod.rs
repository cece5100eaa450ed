//! Display formatting for terminal output
//!
//! Provides utilities for formatting query results for terminal display.
//! This layer only consumes the core query surface; swapping it for a
//! different front end leaves the core untouched.

pub mod expense;

pub use expense::{
    format_breakdown, format_budget_alerts, format_expense_table, format_period_report,
};
