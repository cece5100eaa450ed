//! Reporting CLI commands
//!
//! Handlers for totals, the category breakdown and the five time-based
//! period queries. These are thin wrappers: each one runs a core query
//! and prints the formatted result.

use clap::Subcommand;

use crate::dates;
use crate::display;
use crate::error::LedgerResult;
use crate::models::CategorySet;
use crate::services::{aggregate, period};
use crate::storage::ExpenseStore;

/// Time-based analytics subcommands
#[derive(Subcommand)]
pub enum PeriodCommands {
    /// Expenses for a single date (defaults to today)
    Day {
        /// Date (DD/MM/YYYY)
        date: Option<String>,
    },

    /// Expenses for the week starting at a date
    Week {
        /// Start date of the week (DD/MM/YYYY)
        start: String,
    },

    /// Expenses for a month
    Month {
        /// Month and year (MM/YYYY)
        month: String,
    },

    /// Expenses for a year
    Year {
        /// Year (YYYY)
        year: String,
    },

    /// Expenses in a custom date range
    Range {
        /// Start date (DD/MM/YYYY)
        start: String,
        /// End date (DD/MM/YYYY)
        end: String,
    },
}

/// Handle a period command
pub fn handle_period_command(store: &ExpenseStore, cmd: PeriodCommands) -> LedgerResult<()> {
    let expenses = store.all();

    let (heading, report) = match cmd {
        PeriodCommands::Day { date } => {
            let date = date.unwrap_or_else(dates::today_text);
            let report = period::daily(expenses, &date);
            (format!("DAILY EXPENSES: {}", date), report)
        }
        PeriodCommands::Week { start } => {
            let end = dates::week_end_text(&start);
            let report = period::weekly(expenses, &start);
            (format!("WEEKLY EXPENSES: {} to {}", start, end), report)
        }
        PeriodCommands::Month { month } => {
            let report = period::monthly(expenses, &month);
            (format!("MONTHLY EXPENSES: {}", month), report)
        }
        PeriodCommands::Year { year } => {
            let report = period::yearly(expenses, &year);
            (format!("YEARLY EXPENSES: {}", year), report)
        }
        PeriodCommands::Range { start, end } => {
            let report = period::range(expenses, &start, &end);
            (format!("CUSTOM RANGE: {} to {}", start, end), report)
        }
    };

    print!("{}", display::format_period_report(&heading, &report));
    Ok(())
}

/// Print total spending across the whole ledger
pub fn handle_total(store: &ExpenseStore) -> LedgerResult<()> {
    println!("Total Spending: ${:.2}", aggregate::total(store.all()));
    Ok(())
}

/// Print the per-category spending summary with percentages
pub fn handle_summary(store: &ExpenseStore, categories: &CategorySet) -> LedgerResult<()> {
    let expenses = store.all();
    let shares = aggregate::category_breakdown(expenses, categories);
    let overall = aggregate::total(expenses);

    print!("{}", display::format_breakdown(&shares, overall));
    Ok(())
}
