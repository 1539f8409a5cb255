//! Asset-class aggregation inside the investment category.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{
    DEFAULT_CRYPTO_MARKER, DEFAULT_INVESTMENT_CATEGORY, DISPLAY_DECIMAL_PRECISION,
};
use crate::transactions::Transaction;

use super::investments_model::AssetClassReport;

/// Aggregates the transactions of one asset class, identified by the
/// investment category plus a marker substring in the description.
pub struct InvestmentService {
    category: String,
    asset_marker: String,
}

impl Default for InvestmentService {
    fn default() -> Self {
        InvestmentService::new(DEFAULT_INVESTMENT_CATEGORY, DEFAULT_CRYPTO_MARKER)
    }
}

impl InvestmentService {
    pub fn new(category: impl Into<String>, asset_marker: impl Into<String>) -> Self {
        InvestmentService {
            category: category.into(),
            asset_marker: asset_marker.into(),
        }
    }

    /// Sums invested (expense) and realized (income) amounts over the
    /// matching subset. The average cost per operation is `None` when
    /// nothing matched.
    pub fn analyze(&self, transactions: &[Transaction]) -> AssetClassReport {
        debug!("Analyzing asset class '{}'...", self.asset_marker);

        let matching: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.category_id == self.category)
            .filter(|t| t.description.contains(&self.asset_marker))
            .collect();

        let total_invested: Decimal = matching
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        let total_value: Decimal = matching
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        let average_cost = if matching.is_empty() {
            None
        } else {
            Some(
                (total_invested / Decimal::from(matching.len() as u64))
                    .round_dp(DISPLAY_DECIMAL_PRECISION),
            )
        };

        AssetClassReport {
            total_invested,
            total_value,
            performance: total_value - total_invested,
            average_cost,
        }
    }
}
