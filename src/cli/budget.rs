//! Budget alert CLI command
//!
//! Evaluates current-month spending against the budget table and prints
//! the categories in warning or exceeded state.

use crate::dates;
use crate::display;
use crate::error::LedgerResult;
use crate::models::BudgetTable;
use crate::services::budget;
use crate::storage::ExpenseStore;

/// Print budget alerts for the current calendar month
pub fn handle_budget(store: &ExpenseStore, table: &BudgetTable) -> LedgerResult<()> {
    let month = dates::current_month_text();
    let alerts = budget::evaluate(store.all(), table, &month);

    println!("Budget alerts for {}", month);
    print!("{}", display::format_budget_alerts(&alerts));
    Ok(())
}
