//! Budget evaluation against fixed monthly thresholds
//!
//! Compares per-category spending for one month against the budget table
//! and reports the categories that are over budget or closing in on it.
//! The month is an input, not wall-clock time, so evaluation stays a pure
//! function; the CLI passes `dates::current_month_text()`.

use crate::dates;
use crate::models::{BudgetTable, Expense};

/// Classification of one category against its monthly budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// Spending is over the threshold by `over`
    Exceeded { over: f64 },
    /// Spending is past 80% of the threshold, with `left` remaining
    Warning { left: f64 },
}

/// A category in exceeded or warning state
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    /// Category label
    pub category: String,
    /// Status classification
    pub status: BudgetStatus,
    /// Amount spent in the month
    pub spent: f64,
    /// Monthly threshold from the table
    pub budget: f64,
}

/// Evaluate all categories for the given `MM/YYYY` month
///
/// Spending per category sums the amounts whose stored date text
/// suffix-matches the month (the loose path, same as the monthly query).
/// Categories appear in table order; a zero-budget category is never
/// classified. An empty result means every budget is under control.
pub fn evaluate(expenses: &[Expense], table: &BudgetTable, month_text: &str) -> Vec<BudgetAlert> {
    let mut alerts = Vec::new();

    for (category, budget) in table.entries() {
        if *budget <= 0.0 {
            continue;
        }

        let spent: f64 = expenses
            .iter()
            .filter(|e| e.category == *category && dates::matches_month(&e.date, month_text))
            .map(|e| e.amount)
            .sum();

        let status = if spent > *budget {
            BudgetStatus::Exceeded {
                over: spent - budget,
            }
        } else if spent > budget * 0.8 {
            BudgetStatus::Warning {
                left: budget - spent,
            }
        } else {
            continue;
        };

        alerts.push(BudgetAlert {
            category: category.clone(),
            status,
            spent,
            budget: *budget,
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH: &str = "06/2024";

    fn spent(category: &str, amount: f64) -> Expense {
        Expense::new(0, amount, category, "15/06/2024", "")
    }

    #[test]
    fn test_all_under_control() {
        let expenses = vec![spent("Food", 50.0), spent("Transport", 10.0)];
        assert!(evaluate(&expenses, &BudgetTable::default(), MONTH).is_empty());
    }

    #[test]
    fn test_warning_band() {
        // Food budget 200, spend 180 -> warning with 20 left
        let expenses = vec![spent("Food", 180.0)];
        let alerts = evaluate(&expenses, &BudgetTable::default(), MONTH);

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.category, "Food");
        assert_eq!(alert.spent, 180.0);
        assert_eq!(alert.budget, 200.0);
        match alert.status {
            BudgetStatus::Warning { left } => assert!((left - 20.0).abs() < 1e-9),
            _ => panic!("expected warning"),
        }
    }

    #[test]
    fn test_exceeded() {
        // Food budget 200, spend 250 -> exceeded by 50
        let expenses = vec![spent("Food", 250.0)];
        let alerts = evaluate(&expenses, &BudgetTable::default(), MONTH);

        assert_eq!(alerts.len(), 1);
        match alerts[0].status {
            BudgetStatus::Exceeded { over } => assert!((over - 50.0).abs() < 1e-9),
            _ => panic!("expected exceeded"),
        }
    }

    #[test]
    fn test_exactly_at_budget_is_warning_not_exceeded() {
        let expenses = vec![spent("Food", 200.0)];
        let alerts = evaluate(&expenses, &BudgetTable::default(), MONTH);

        assert_eq!(alerts.len(), 1);
        assert!(matches!(alerts[0].status, BudgetStatus::Warning { .. }));
    }

    #[test]
    fn test_eighty_percent_boundary_is_ok() {
        // Exactly 0.8 * budget does not trip the warning (strict >)
        let expenses = vec![spent("Food", 160.0)];
        assert!(evaluate(&expenses, &BudgetTable::default(), MONTH).is_empty());
    }

    #[test]
    fn test_other_months_are_ignored() {
        let expenses = vec![
            spent("Food", 100.0),
            Expense::new(0, 500.0, "Food", "15/05/2024", ""),
        ];
        assert!(evaluate(&expenses, &BudgetTable::default(), MONTH).is_empty());
    }

    #[test]
    fn test_zero_budget_category_is_skipped() {
        let table = BudgetTable::new([("Food", 0.0), ("Other", 50.0)]);
        let expenses = vec![spent("Food", 1000.0), spent("Other", 60.0)];

        let alerts = evaluate(&expenses, &table, MONTH);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, "Other");
    }

    #[test]
    fn test_alerts_follow_table_order() {
        let expenses = vec![
            spent("Other", 60.0),
            spent("Food", 250.0),
            spent("Transport", 95.0),
        ];
        let alerts = evaluate(&expenses, &BudgetTable::default(), MONTH);

        let order: Vec<&str> = alerts.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(order, ["Food", "Transport", "Other"]);
    }
}
