//! Core error types for the Finsight analytics engine.
//!
//! The analytics computations themselves are total functions over their input
//! snapshot and never fail. Errors exist only on the thin validation surface
//! the engine offers to the persistence/import collaborators that own the
//! records.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied date range with `from` after `to`.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// A record that violates a model invariant.
    #[error("Input validation failed: {0}")]
    Validation(String),
}
