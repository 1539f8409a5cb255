//! Investment analysis domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate performance of one asset class inside the investment category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassReport {
    /// Sum of expense-typed amounts (money put in).
    pub total_invested: Decimal,
    /// Sum of income-typed amounts (money taken out / realized).
    pub total_value: Decimal,
    /// `total_value - total_invested`.
    pub performance: Decimal,
    /// `total_invested / matching transaction count`; `None` when no
    /// transaction matched, instead of a division-by-zero artifact.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<Decimal>,
}
