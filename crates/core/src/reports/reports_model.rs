//! Report facade domain models.

use serde::{Deserialize, Serialize};

use crate::analytics::aggregation::{CashFlowReport, CategoryTotal, MonthlyCashFlow};
use crate::analytics::flow::FlowGraph;
use crate::analytics::goal_progress::GoalProgress;
use crate::analytics::investments::AssetClassReport;
use crate::transactions::Transaction;

/// Everything the engine derives from one snapshot, bundled for the
/// presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    /// Aggregates over the caller's range.
    pub cash_flow: CashFlowReport,
    /// Monthly history (inside the range) with the forecast appended.
    pub cash_flow_forecast: Vec<MonthlyCashFlow>,
    /// Largest expense categories inside the range, descending.
    pub top_expense_categories: Vec<CategoryTotal>,
    /// Unmarked recurring candidates, detected over the full snapshot.
    pub recurring_transactions: Vec<Transaction>,
    /// Category-relative outliers, detected over the full snapshot.
    pub unusual_expenses: Vec<Transaction>,
    /// Consecutive-day activity streak inside the range.
    pub streak_days: u32,
    pub goal_progress: Vec<GoalProgress>,
    pub transfer_flow: FlowGraph,
    pub investment: AssetClassReport,
}
