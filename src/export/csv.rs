//! CSV export functionality
//!
//! Exports the ledger to a spreadsheet-compatible CSV file. The format is
//! distinct from the persistence format: amounts are fixed to two decimal
//! places and commas in descriptions are replaced with semicolons instead
//! of quoting.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// CSV header line
pub const CSV_HEADER: &str = "ID,Amount,Category,Date,Description";

/// Write all records as CSV to the given writer, in store order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{:.2},{},{},{}",
            expense.id,
            expense.amount,
            expense.category,
            expense.date,
            expense.description.replace(',', ";")
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_header_only_when_empty() {
        let mut out = Vec::new();
        export_expenses_csv(&[], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID,Amount,Category,Date,Description\n"
        );
    }

    #[test]
    fn test_export_rows() {
        let expenses = vec![
            Expense::new(1, 120.0, "Food", "15/06/2024", "groceries"),
            Expense::new(2, 9.5, "Transport", "16/06/2024", "bus fare"),
        ];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,120.00,Food,15/06/2024,groceries");
        assert_eq!(lines[2], "2,9.50,Transport,16/06/2024,bus fare");
    }

    #[test]
    fn test_commas_in_description_become_semicolons() {
        let expenses = vec![Expense::new(
            1,
            30.0,
            "Food",
            "15/06/2024",
            "bread, milk, eggs",
        )];

        let mut out = Vec::new();
        export_expenses_csv(&expenses, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1,30.00,Food,15/06/2024,bread; milk; eggs"));
    }
}
