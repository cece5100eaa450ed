//! Expense entry CLI commands
//!
//! Handlers for adding, listing and deleting records. Input validation
//! lives here, at the entry point: the store itself stays permissive, so
//! the category set, date format and amount sign are checked before the
//! insert path is reached.

use crate::dates;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::models::CategorySet;
use crate::services::calculator;
use crate::storage::ExpenseStore;

/// Add a new expense
///
/// The amount is given as calculator text, so `12.50` and `4+3.25+5.25`
/// are both accepted. The date defaults to today and must strict-parse;
/// the category must belong to the configured set.
pub fn handle_add(
    store: &mut ExpenseStore,
    categories: &CategorySet,
    amount_expr: &str,
    category: &str,
    date: Option<&str>,
    description: &str,
) -> LedgerResult<()> {
    let amount = calculator::evaluate(amount_expr)
        .map_err(|_| LedgerError::Validation(format!("invalid calculation: {}", amount_expr)))?;

    if amount < 0.0 {
        return Err(LedgerError::Validation(format!(
            "amount must not be negative: {}",
            amount
        )));
    }

    if !categories.contains(category) {
        return Err(LedgerError::Validation(format!(
            "unknown category '{}' (expected one of: {})",
            category, categories
        )));
    }

    let date = match date {
        Some(text) => {
            dates::parse_date(text)?;
            text.to_string()
        }
        None => dates::today_text(),
    };

    let expense = store.insert(amount, category, date, description)?;
    println!("Added expense #{}: {}", expense.id, expense);
    Ok(())
}

/// List all expenses, or only those in one category
pub fn handle_list(store: &ExpenseStore, category: Option<&str>) -> LedgerResult<()> {
    match category {
        Some(cat) => {
            let filtered: Vec<_> = store.by_category(cat).into_iter().cloned().collect();
            print!("{}", display::format_expense_table(&filtered));
        }
        None => {
            print!("{}", display::format_expense_table(store.all()));
        }
    }
    Ok(())
}

/// Delete an expense by id
pub fn handle_delete(store: &mut ExpenseStore, id: u32) -> LedgerResult<()> {
    if store.delete(id)? {
        println!("Expense {} deleted.", id);
        Ok(())
    } else {
        Err(LedgerError::expense_not_found(id.to_string()))
    }
}
