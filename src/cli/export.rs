//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::export::export_expenses_csv;
use crate::storage::ExpenseStore;

/// Export the whole ledger to a CSV file
pub fn handle_export(store: &ExpenseStore, output: &Path) -> LedgerResult<()> {
    if store.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }

    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_expenses_csv(store.all(), &mut writer)?;

    println!(
        "Exported {} expenses to '{}'.",
        store.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::open(temp_dir.path().join("expenses.txt"));
        store.insert(120.0, "Food", "15/06/2024", "groceries").unwrap();

        let output = temp_dir.path().join("out.csv");
        handle_export(&store, &output).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("ID,Amount,Category,Date,Description\n"));
        assert!(contents.contains("1,120.00,Food,15/06/2024,groceries"));
    }

    #[test]
    fn test_export_empty_store_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::open(temp_dir.path().join("expenses.txt"));

        let output = temp_dir.path().join("out.csv");
        handle_export(&store, &output).unwrap();

        assert!(!output.exists());
    }
}
