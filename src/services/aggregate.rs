//! Aggregation over record subsets
//!
//! Sums and per-category breakdowns. These functions take plain slices so
//! they compose with any filtered view (period queries, category filters)
//! and never touch the store itself.

use std::collections::HashMap;

use crate::models::{CategorySet, Expense};

/// Per-category share of overall spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category label
    pub category: String,
    /// Total spent in this category
    pub total: f64,
    /// Share of overall spending, 0..=100
    pub percentage: f64,
}

/// Sum of amounts; empty input totals 0
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category totals for the categories present with a non-zero total
///
/// The sum of the values always equals [`total`] of the same records within
/// floating-point tolerance (a category summing to exactly zero contributes
/// nothing either way).
pub fn totals_by_category(expenses: &[Expense]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals.retain(|_, t| *t != 0.0);
    totals
}

/// Category totals with percentages, in category-set display order
///
/// Only categories with a positive total appear. When overall spending is
/// zero the breakdown is empty; the percentage division is never attempted
/// against a zero total.
pub fn category_breakdown(expenses: &[Expense], categories: &CategorySet) -> Vec<CategoryShare> {
    let overall = total(expenses);
    if overall == 0.0 {
        return Vec::new();
    }

    let totals = totals_by_category(expenses);

    categories
        .labels()
        .iter()
        .filter_map(|label| {
            let category_total = *totals.get(label)?;
            (category_total > 0.0).then(|| CategoryShare {
                category: label.clone(),
                total: category_total,
                percentage: category_total / overall * 100.0,
            })
        })
        .collect()
}
