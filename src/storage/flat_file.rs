//! Flat-file persistence for the ledger
//!
//! One record per line, fields joined by `|` in the order
//! `id|amount|category|date|description`. The delimiter is never escaped,
//! so a `|` inside a field corrupts that line (known limitation of the
//! format).
//!
//! Loading is deliberately lenient: a line is accepted only if it splits
//! into exactly five fields and the numeric fields parse; anything else is
//! silently skipped. A missing or unreadable file reads as an empty
//! ledger. Saving overwrites the whole file in record order; there is no
//! append path and no atomic rename, so a crash mid-save can leave a
//! truncated file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LedgerError;
use crate::models::Expense;

/// Read all well-formed records from the ledger file
///
/// Malformed lines are skipped without reporting; a missing file yields an
/// empty vec, as does a file that cannot be read at all.
pub fn read_expenses<P: AsRef<Path>>(path: P) -> Vec<Expense> {
    let contents = match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(_) => return Vec::new(),
    };

    contents.lines().filter_map(parse_line).collect()
}

/// Parse a single `id|amount|category|date|description` line
fn parse_line(line: &str) -> Option<Expense> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 5 {
        return None;
    }

    let id: u32 = fields[0].parse().ok()?;
    let amount: f64 = fields[1].parse().ok()?;

    Some(Expense::new(id, amount, fields[2], fields[3], fields[4]))
}

/// Overwrite the ledger file with the full record set, one line per record
pub fn write_expenses<P: AsRef<Path>>(path: P, expenses: &[Expense]) -> Result<(), LedgerError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    for expense in expenses {
        writeln!(
            writer,
            "{}|{}|{}|{}|{}",
            expense.id, expense.amount, expense.category, expense.date, expense.description
        )
        .map_err(|e| LedgerError::Storage(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush ledger: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.txt");

        assert!(read_expenses(&path).is_empty());
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let expenses = vec![
            Expense::new(1, 120.0, "Food", "15/06/2024", "groceries"),
            Expense::new(2, 9.5, "Transport", "16/06/2024", "bus fare"),
            Expense::new(3, 42.25, "Other", "17/06/2024", ""),
        ];

        write_expenses(&path, &expenses).unwrap();
        let loaded = read_expenses(&path);

        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        std::fs::write(
            &path,
            "1|120|Food|15/06/2024|groceries\n\
             2|50|Transport|16/06/2024\n\
             not a record\n\
             x|50|Transport|16/06/2024|typo id\n\
             3|oops|Food|17/06/2024|typo amount\n\
             4|8.5|Food|18/06/2024|coffee\n",
        )
        .unwrap();

        let loaded = read_expenses(&path);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[1].id, 4);
    }

    #[test]
    fn test_delimiter_in_field_breaks_that_line_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let expenses = vec![
            Expense::new(1, 10.0, "Food", "15/06/2024", "lunch | with a pipe"),
            Expense::new(2, 20.0, "Food", "15/06/2024", "dinner"),
        ];
        write_expenses(&path, &expenses).unwrap();

        // The piped description yields a 6-field line, which is skipped
        let loaded = read_expenses(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn test_empty_description_survives() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let expenses = vec![Expense::new(1, 10.0, "Food", "15/06/2024", "")];
        write_expenses(&path, &expenses).unwrap();

        let loaded = read_expenses(&path);
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_expenses(
            &path,
            &[
                Expense::new(1, 10.0, "Food", "15/06/2024", "a"),
                Expense::new(2, 20.0, "Food", "15/06/2024", "b"),
            ],
        )
        .unwrap();

        write_expenses(&path, &[Expense::new(3, 30.0, "Food", "15/06/2024", "c")]).unwrap();

        let loaded = read_expenses(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("expenses.txt");

        write_expenses(&path, &[Expense::new(1, 1.0, "Food", "01/01/2024", "x")]).unwrap();
        assert!(path.exists());
    }
}
