//! Period queries: records and totals for named time windows
//!
//! Five windows are supported: day, week, month, year and custom range.
//! Their date matching deliberately differs per window and the differences
//! are part of the observable contract:
//!
//! - daily: exact string equality against the stored date text;
//! - weekly and custom range: strict-parse calendar range, inclusive both
//!   ends, where any unparseable operand makes every record non-matching;
//! - monthly and yearly: raw text suffix match, independent of whether the
//!   stored date parses at all.

use crate::dates;
use crate::models::Expense;
use crate::services::aggregate;

/// Result of a period query: the matching records plus their total
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    /// Matching records, in insertion order
    pub expenses: Vec<Expense>,
    /// Sum of matching amounts
    pub total: f64,
    /// Number of matching records
    pub count: usize,
}

impl PeriodReport {
    fn from_matches(expenses: Vec<Expense>) -> Self {
        let total = aggregate::total(&expenses);
        let count = expenses.len();
        Self {
            expenses,
            total,
            count,
        }
    }

    /// Whether the window matched nothing
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

fn collect<F>(expenses: &[Expense], matches: F) -> PeriodReport
where
    F: Fn(&Expense) -> bool,
{
    PeriodReport::from_matches(expenses.iter().filter(|e| matches(e)).cloned().collect())
}

/// Records for an exact date, matched by string equality on the stored text
pub fn daily(expenses: &[Expense], date_text: &str) -> PeriodReport {
    collect(expenses, |e| e.date == date_text)
}

/// Records in the week starting at `start_text` (start + 6 days, inclusive)
///
/// An unparseable start date yields an empty report: the end date falls
/// back to the start text and the strict range match then rejects every
/// record.
pub fn weekly(expenses: &[Expense], start_text: &str) -> PeriodReport {
    let end_text = dates::week_end_text(start_text);
    range(expenses, start_text, &end_text)
}

/// Records whose stored date text ends with `MM/YYYY` (loose path)
pub fn monthly(expenses: &[Expense], month_year: &str) -> PeriodReport {
    collect(expenses, |e| dates::matches_month(&e.date, month_year))
}

/// Records whose stored date text ends with `YYYY` (loose path)
pub fn yearly(expenses: &[Expense], year: &str) -> PeriodReport {
    collect(expenses, |e| dates::matches_year(&e.date, year))
}

/// Records in an explicit inclusive date range (strict path)
///
/// If either bound fails to parse, the match evaluates false for every
/// record and the report is empty; no error is signalled.
pub fn range(expenses: &[Expense], start_text: &str, end_text: &str) -> PeriodReport {
    collect(expenses, |e| {
        dates::text_in_range(&e.date, start_text, end_text)
    })
}
