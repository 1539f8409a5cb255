//! Finsight Core - personal finance analytics engine.
//!
//! This crate derives summary statistics, behavioral patterns, and
//! near-future projections from an immutable snapshot of transactions,
//! categories, and savings goals. Records are owned by the surrounding
//! application (persistence, editing, import/export live there); the engine
//! borrows a read-only snapshot per computation pass, mutates nothing, and
//! keeps no state between calls, so it is safe to call repeatedly and from
//! concurrent readers.

pub mod analytics;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod reports;
pub mod snapshot;
pub mod transactions;

// Re-export common types from the analytics and record modules
pub use analytics::*;
pub use categories::{Category, CategoryIndex, CategoryType};
pub use goals::Goal;
pub use reports::{FinancialReport, ReportsService};
pub use snapshot::{DateRange, LedgerSnapshot};
pub use transactions::{Recurrence, RecurrenceInterval, Transaction, TransactionType};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
