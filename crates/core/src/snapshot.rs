//! Immutable input snapshot and date-range filtering.
//!
//! Every analytics call receives an explicitly passed, read-only snapshot of
//! the records owned by the persistence collaborator. The engine holds no
//! state between calls and never mutates a snapshot; all outputs are freshly
//! allocated structures.

use crate::categories::{Category, CategoryIndex};
use crate::errors::{Error, Result};
use crate::goals::Goal;
use crate::transactions::Transaction;
use chrono::NaiveDate;

/// Inclusive calendar-date range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidDateRange { from, to });
        }
        Ok(DateRange { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Read-only borrow of one consistent set of records for the duration of a
/// single computation pass.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub transactions: &'a [Transaction],
    pub categories: &'a [Category],
    pub goals: &'a [Goal],
}

impl<'a> LedgerSnapshot<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        categories: &'a [Category],
        goals: &'a [Goal],
    ) -> Self {
        LedgerSnapshot {
            transactions,
            categories,
            goals,
        }
    }

    /// Category id → display name lookup for this snapshot.
    pub fn category_index(&self) -> CategoryIndex<'a> {
        CategoryIndex::new(self.categories)
    }

    /// Transactions inside the optional inclusive range, in input order.
    pub fn transactions_in(
        &self,
        range: Option<&DateRange>,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        let range = range.copied();
        let transactions = self.transactions;
        transactions
            .iter()
            .filter(move |t| range.map_or(true, |r| r.contains(t.date)))
    }
}
