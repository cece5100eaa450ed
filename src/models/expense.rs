//! Expense record model
//!
//! An expense is a single spending event. Records are immutable once
//! created: correcting one means deleting it and inserting a replacement.

use std::fmt;

/// A single recorded spending event
///
/// The `date` field is kept as `DD/MM/YYYY` text rather than a parsed date.
/// The monthly/yearly query paths match on the raw text suffix, so a record
/// whose date would fail a strict parse must still be representable and
/// still match those queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Unique, monotonically assigned identifier (never reused)
    pub id: u32,

    /// Amount spent; non-negative by convention, enforced by callers
    pub amount: f64,

    /// Category label, conventionally from the fixed category set
    pub category: String,

    /// Calendar date as `DD/MM/YYYY` text
    pub date: String,

    /// Free-form description
    pub description: String,
}

impl Expense {
    /// Create an expense record with an already-assigned id
    pub fn new(
        id: u32,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Amount: ${:.2} | Category: {} | Date: {} | Desc: {}",
            self.id, self.amount, self.category, self.date, self.description
        )
    }
}
