//! Time-bucket and category aggregation over transaction snapshots.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DEFAULT_FIXED_EXPENSE_CATEGORIES, DISPLAY_DECIMAL_PRECISION};
use crate::snapshot::{DateRange, LedgerSnapshot};
use crate::transactions::Transaction;

use super::aggregation_model::{
    CashFlowReport, CategoryTotal, DailyCashFlow, DailyRatio, ExpenseSplit, MonthlyCashFlow,
    PeriodTotals,
};

/// Groups transactions by time bucket and category and derives sums, splits,
/// and per-day ratios. Holds only configuration; every computation is a pure
/// function of the snapshot it is handed.
pub struct AggregationService {
    fixed_categories: HashSet<String>,
}

impl Default for AggregationService {
    fn default() -> Self {
        AggregationService {
            fixed_categories: DEFAULT_FIXED_EXPENSE_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl AggregationService {
    /// Service with a custom fixed-cost category name set.
    pub fn new(fixed_categories: HashSet<String>) -> Self {
        AggregationService { fixed_categories }
    }

    /// Derives the full cash-flow report for the transactions inside the
    /// optional inclusive range.
    pub fn aggregate(&self, snapshot: &LedgerSnapshot, range: Option<&DateRange>) -> CashFlowReport {
        debug!("Aggregating cash flow report...");

        let index = snapshot.category_index();

        let mut totals = PeriodTotals::default();
        let mut category_distribution: HashMap<String, Decimal> = HashMap::new();
        let mut daily: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

        for transaction in snapshot.transactions_in(range) {
            let day = daily
                .entry(transaction.date)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            if transaction.is_income() {
                totals.total_income += transaction.amount;
                day.0 += transaction.amount;
            } else {
                totals.total_expenses += transaction.amount;
                day.1 += transaction.amount;

                let name = index.display_name(&transaction.category_id);
                *category_distribution
                    .entry(name.to_string())
                    .or_insert(Decimal::ZERO) += transaction.amount;
            }
        }

        let fixed: Decimal = category_distribution
            .iter()
            .filter(|(name, _)| self.fixed_categories.contains(*name))
            .map(|(_, amount)| *amount)
            .sum();
        let expense_split = ExpenseSplit {
            fixed,
            variable: totals.total_expenses - fixed,
        };

        let daily_cash_flow: Vec<DailyCashFlow> = daily
            .iter()
            .map(|(&date, &(income, expenses))| DailyCashFlow {
                date,
                income,
                expenses,
            })
            .collect();

        let savings_rate = daily_cash_flow
            .iter()
            .map(|day| DailyRatio {
                date: day.date,
                value: percentage_of_income(day.income - day.expenses, day.income),
            })
            .collect();
        let expense_to_income_ratio = daily_cash_flow
            .iter()
            .map(|day| DailyRatio {
                date: day.date,
                value: percentage_of_income(day.expenses, day.income),
            })
            .collect();

        CashFlowReport {
            totals,
            category_distribution,
            daily_cash_flow,
            expense_split,
            savings_rate,
            expense_to_income_ratio,
        }
    }

    /// Groups transactions by (year, month) and sums income and expenses per
    /// bucket, ascending by month. Consumed by the trend forecaster.
    pub fn monthly_series(
        &self,
        transactions: &[Transaction],
        range: Option<&DateRange>,
    ) -> Vec<MonthlyCashFlow> {
        let mut monthly: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

        for transaction in transactions
            .iter()
            .filter(|t| range.map_or(true, |r| r.contains(t.date)))
        {
            let bucket = monthly
                .entry(month_bucket(transaction.date))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            if transaction.is_income() {
                bucket.0 += transaction.amount;
            } else {
                bucket.1 += transaction.amount;
            }
        }

        monthly
            .iter()
            .map(|(&month, &(income, expenses))| MonthlyCashFlow {
                month,
                income,
                expenses,
            })
            .collect()
    }

    /// The `limit` largest expense categories by summed amount, descending.
    /// Name is the tie-breaker so the ordering is deterministic.
    pub fn top_expense_categories(
        &self,
        snapshot: &LedgerSnapshot,
        range: Option<&DateRange>,
        limit: usize,
    ) -> Vec<CategoryTotal> {
        let index = snapshot.category_index();

        let mut by_category: HashMap<String, Decimal> = HashMap::new();
        for transaction in snapshot.transactions_in(range).filter(|t| t.is_expense()) {
            let name = index.display_name(&transaction.category_id);
            *by_category.entry(name.to_string()).or_insert(Decimal::ZERO) += transaction.amount;
        }

        let mut totals: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(name, amount)| CategoryTotal { name, amount })
            .collect();
        totals.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        totals.truncate(limit);
        totals
    }
}

/// `part / income * 100` rounded to display precision; 0 when there is no
/// income, so a zero-income day never divides by zero.
fn percentage_of_income(part: Decimal, income: Decimal) -> Decimal {
    if income > Decimal::zero() {
        (part / income * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// First day of the month `date` falls in.
fn month_bucket(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so the fallback never fires.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
