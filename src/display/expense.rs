//! Expense display formatting
//!
//! Formats records and query results for terminal display. All functions
//! return strings; printing is left to the CLI handlers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::services::aggregate::CategoryShare;
use crate::services::budget::{BudgetAlert, BudgetStatus};
use crate::services::period::PeriodReport;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: format!("${:.2}", expense.amount),
            category: expense.category.clone(),
            date: expense.date.clone(),
            description: truncate(&expense.description, 35),
        }
    }
}

/// Format a list of records as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a period query result: the records plus total and count footer
pub fn format_period_report(heading: &str, report: &PeriodReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", heading));
    output.push_str(&"=".repeat(54));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No expenses found for this period.\n");
        return output;
    }

    output.push_str(&format_expense_table(&report.expenses));
    output.push_str(&format!("Total: ${:.2}\n", report.total));
    output.push_str(&format!("Expenses: {}\n", report.count));
    output
}

/// Format the category breakdown with percentages
pub fn format_breakdown(shares: &[CategoryShare], overall: f64) -> String {
    if shares.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Spending by category\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for share in shares {
        output.push_str(&format!(
            "{:<15} ${:<10.2} ({:5.1}%)\n",
            share.category, share.total, share.percentage
        ));
    }

    output.push_str(&"-".repeat(44));
    output.push('\n');
    output.push_str(&format!("{:<15} ${:<10.2} (100.0%)\n", "TOTAL", overall));
    output
}

/// Format budget alerts for the current month
pub fn format_budget_alerts(alerts: &[BudgetAlert]) -> String {
    if alerts.is_empty() {
        return "All budgets are under control.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        match alert.status {
            BudgetStatus::Exceeded { over } => {
                output.push_str(&format!("ALERT: {} budget exceeded!\n", alert.category));
                output.push_str(&format!(
                    "   Spent: ${:.2} | Budget: ${:.2} | Over by: ${:.2}\n",
                    alert.spent, alert.budget, over
                ));
            }
            BudgetStatus::Warning { left } => {
                output.push_str(&format!(
                    "WARNING: {} budget almost reached!\n",
                    alert.category
                ));
                output.push_str(&format!(
                    "   Spent: ${:.2} | Budget: ${:.2} | Left: ${:.2}\n",
                    alert.spent, alert.budget, left
                ));
            }
        }
    }
    output
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
