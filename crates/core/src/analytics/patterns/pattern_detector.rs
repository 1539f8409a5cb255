//! Behavioral pattern detection over transaction sets.
//!
//! Both detectors read the entire set they are handed, clone what they flag,
//! and leave the input untouched, so repeated runs over the same snapshot
//! return the same result.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::constants::{RECURRING_MIN_OCCURRENCES, UNUSUAL_EXPENSE_MULTIPLIER};
use crate::transactions::Transaction;

/// Finds transactions that look recurring without being marked as such.
///
/// Transactions are grouped by exact (description, amount); every member of
/// a group with at least [`RECURRING_MIN_OCCURRENCES`] members whose
/// `is_recurring` flag is not already set is returned, in input order.
pub fn detect_recurring(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut occurrences: HashMap<(&str, Decimal), usize> = HashMap::new();
    for transaction in transactions {
        *occurrences
            .entry((transaction.description.as_str(), transaction.amount))
            .or_insert(0) += 1;
    }

    transactions
        .iter()
        .filter(|t| !t.is_recurring)
        .filter(|t| {
            occurrences
                .get(&(t.description.as_str(), t.amount))
                .map_or(false, |&count| count >= RECURRING_MIN_OCCURRENCES)
        })
        .cloned()
        .collect()
}

/// Finds expenses that stand out against their category's history.
///
/// The mean expense amount is computed per category over the whole given
/// set; an expense is unusual when its amount exceeds
/// [`UNUSUAL_EXPENSE_MULTIPLIER`] times its category's mean. A category with
/// a single expense can never flag it (an amount is never greater than three
/// times itself), and a zero mean only arises from all-zero amounts, which
/// never exceed a zero threshold.
pub fn detect_unusual_expenses(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sums: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let entry = sums
            .entry(transaction.category_id.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += transaction.amount;
        entry.1 += 1;
    }

    transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| match sums.get(t.category_id.as_str()) {
            Some(&(total, count)) if count > 0 => {
                let mean = total / Decimal::from(count as u64);
                t.amount > UNUSUAL_EXPENSE_MULTIPLIER * mean
            }
            _ => false,
        })
        .cloned()
        .collect()
}
