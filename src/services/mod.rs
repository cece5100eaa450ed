//! Service layer for spendlog
//!
//! Read-only analytics on top of the record store: aggregation, period
//! queries, budget evaluation and the quick-entry calculator. Everything
//! here operates on plain record slices and returns by value; only the
//! store itself mutates state.

pub mod aggregate;
pub mod budget;
pub mod calculator;
pub mod period;

pub use aggregate::CategoryShare;
pub use budget::{BudgetAlert, BudgetStatus};
pub use period::PeriodReport;
