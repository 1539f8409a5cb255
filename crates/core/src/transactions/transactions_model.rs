//! Transaction domain models.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction. The amount itself is always a positive
/// magnitude; this discriminant carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Advisory recurrence interval attached to a transaction by the editing
/// surface. The engine never expands recurrences into future instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    Weekly,
    Monthly,
    Yearly,
}

/// Advisory recurrence metadata (interval + optional end date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub interval: RecurrenceInterval,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Domain model representing a single dated transaction.
///
/// Owned by the persistence collaborator; the engine borrows read-only
/// snapshots and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    // Identity
    pub id: String,
    pub description: String,

    // Economics
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    // Classification
    /// Reference to `Category::id`. May be orphaned if the category was
    /// deleted after this transaction was recorded.
    pub category_id: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,

    // Timing
    pub date: NaiveDate,

    // Recurrence flags (advisory)
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Transaction {
    /// Check if this transaction carries income.
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Check if this transaction carries an expense.
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// The amount with its direction applied: positive for income, negative
    /// for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validates the stored-magnitude invariant: `amount` must never be
    /// negative. Direction is carried by `transaction_type` alone.
    ///
    /// Offered to the persistence/import collaborators; the analytics
    /// functions assume it holds.
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::zero() {
            return Err(Error::Validation(format!(
                "transaction '{}' has a negative amount: {}",
                self.id, self.amount
            )));
        }
        Ok(())
    }
}
