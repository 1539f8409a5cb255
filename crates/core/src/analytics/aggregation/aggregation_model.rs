//! Aggregation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Income and expense totals over one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
}

impl PeriodTotals {
    /// Income minus expenses.
    pub fn net_balance(&self) -> Decimal {
        self.total_income - self.total_expenses
    }
}

/// Income and expense sums for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCashFlow {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// A derived per-day percentage (savings rate, expense-to-income ratio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRatio {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Expense total partitioned into fixed and variable parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSplit {
    pub fixed: Decimal,
    pub variable: Decimal,
}

/// Income and expense sums for one (year, month) bucket. `month` is the
/// first day of the bucket's month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlow {
    pub month: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// One category's summed expense amount, keyed by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Decimal,
}

/// Everything the aggregator derives in one pass over a (range-filtered)
/// transaction snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    pub totals: PeriodTotals,
    /// Expense sums keyed by category display name (raw category id for
    /// orphaned references).
    pub category_distribution: HashMap<String, Decimal>,
    /// Per-day sums, ascending by date.
    pub daily_cash_flow: Vec<DailyCashFlow>,
    pub expense_split: ExpenseSplit,
    /// Per-day `(income - expenses) / income * 100`; 0 for days without
    /// income.
    pub savings_rate: Vec<DailyRatio>,
    /// Per-day `expenses / income * 100`; 0 for days without income.
    pub expense_to_income_ratio: Vec<DailyRatio>,
}
