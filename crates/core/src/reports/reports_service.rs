//! One-pass report generation for the presentation layer.

use log::debug;

use crate::analytics::aggregation::AggregationService;
use crate::analytics::flow::FlowGraphService;
use crate::analytics::forecast::project_cash_flow;
use crate::analytics::goal_progress::evaluate_goals;
use crate::analytics::investments::InvestmentService;
use crate::analytics::patterns::{detect_recurring, detect_unusual_expenses};
use crate::analytics::streaks::transaction_streak;
use crate::constants::{DEFAULT_FORECAST_HORIZON, DEFAULT_TOP_CATEGORY_LIMIT};
use crate::snapshot::{DateRange, LedgerSnapshot};

use super::reports_model::FinancialReport;

/// Composes the analytics components into a single report pass.
///
/// Range scoping follows the individual components: aggregates, forecast
/// input, top categories, streak, and goal progress respect the caller's
/// range, while pattern detection, the transfer graph, and the investment
/// report always read the full snapshot (category means and transfer
/// topology are defined over the whole history).
pub struct ReportsService {
    aggregation: AggregationService,
    flow: FlowGraphService,
    investments: InvestmentService,
    forecast_horizon: u32,
    top_category_limit: usize,
}

impl Default for ReportsService {
    fn default() -> Self {
        ReportsService::new(
            AggregationService::default(),
            FlowGraphService::default(),
            InvestmentService::default(),
        )
    }
}

impl ReportsService {
    pub fn new(
        aggregation: AggregationService,
        flow: FlowGraphService,
        investments: InvestmentService,
    ) -> Self {
        ReportsService {
            aggregation,
            flow,
            investments,
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            top_category_limit: DEFAULT_TOP_CATEGORY_LIMIT,
        }
    }

    /// Overrides the number of months projected past the historical series.
    pub fn with_forecast_horizon(mut self, horizon: u32) -> Self {
        self.forecast_horizon = horizon;
        self
    }

    /// Derives the full financial report from one snapshot.
    pub fn generate(&self, snapshot: &LedgerSnapshot, range: Option<&DateRange>) -> FinancialReport {
        debug!("Generating financial report...");

        let cash_flow = self.aggregation.aggregate(snapshot, range);
        let monthly = self.aggregation.monthly_series(snapshot.transactions, range);
        let cash_flow_forecast = project_cash_flow(&monthly, self.forecast_horizon);
        let top_expense_categories =
            self.aggregation
                .top_expense_categories(snapshot, range, self.top_category_limit);

        FinancialReport {
            cash_flow,
            cash_flow_forecast,
            top_expense_categories,
            recurring_transactions: detect_recurring(snapshot.transactions),
            unusual_expenses: detect_unusual_expenses(snapshot.transactions),
            streak_days: transaction_streak(snapshot.transactions_in(range)),
            goal_progress: evaluate_goals(snapshot, range),
            transfer_flow: self.flow.build(snapshot.transactions),
            investment: self.investments.analyze(snapshot.transactions),
        }
    }
}
