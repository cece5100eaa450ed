//! Category set and budget table
//!
//! Both are fixed, process-wide configuration in the application, but they
//! are modeled as immutable value structs handed to the components that
//! need them (CLI validation, breakdown ordering, budget evaluation) so
//! those components stay testable with custom tables.

use std::fmt;

/// The closed set of category labels, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a category set from arbitrary labels (display order preserved)
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `label` is a member of the set (exact match)
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels in display order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new([
            "Food",
            "Transport",
            "Entertainment",
            "Utilities",
            "Shopping",
            "Healthcare",
            "Other",
        ])
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}

/// Fixed monthly budget thresholds per category, in evaluation order
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTable {
    entries: Vec<(String, f64)>,
}

impl BudgetTable {
    /// Build a budget table from (category, monthly threshold) pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(c, b)| (c.into(), b)).collect(),
        }
    }

    /// Monthly threshold for a category; 0.0 when the category is unknown
    pub fn budget_for(&self, category: &str) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, b)| *b)
            .unwrap_or(0.0)
    }

    /// Entries in evaluation order
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self::new([
            ("Food", 200.0),
            ("Transport", 100.0),
            ("Entertainment", 150.0),
            ("Utilities", 250.0),
            ("Shopping", 300.0),
            ("Healthcare", 100.0),
            ("Other", 50.0),
        ])
    }
}
