//! Goals domain models.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
///
/// Progress is never stored on the goal; it is always derived live from the
/// income transactions linked to it (see `analytics::goal_progress`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
}

impl Goal {
    /// Validates that the target amount is strictly positive.
    ///
    /// Offered to the persistence collaborator. The progress evaluator also
    /// guards the zero target on its own, so un-validated goals degrade to
    /// zero progress rather than failing.
    pub fn validate(&self) -> Result<()> {
        if self.target_amount <= Decimal::zero() {
            return Err(Error::Validation(format!(
                "goal '{}' has a non-positive target amount: {}",
                self.id, self.target_amount
            )));
        }
        Ok(())
    }
}
