//! First-difference linear extrapolation of the monthly cash-flow series.

use chrono::Months;
use rust_decimal::Decimal;

use crate::analytics::aggregation::MonthlyCashFlow;

/// Projects the monthly series `horizon` months past its end.
///
/// `series` must be in chronological order (as emitted by
/// `AggregationService::monthly_series`). The slope is the difference
/// between the last two buckets, independently for income and expenses:
/// the projection reacts to the most recent trend only, not to a regression
/// over the whole history. Projected values are floored at zero; month
/// labels advance sequentially from the last historical month.
///
/// With fewer than two buckets there is no trend to extend and the
/// historical series is returned unchanged.
pub fn project_cash_flow(series: &[MonthlyCashFlow], horizon: u32) -> Vec<MonthlyCashFlow> {
    let mut projected = series.to_vec();
    if series.len() < 2 {
        return projected;
    }

    let last = &series[series.len() - 1];
    let previous = &series[series.len() - 2];
    let income_slope = last.income - previous.income;
    let expense_slope = last.expenses - previous.expenses;

    let mut month = last.month;
    for step in 1..=horizon {
        month = match month.checked_add_months(Months::new(1)) {
            Some(next) => next,
            // Out of calendar range; stop projecting.
            None => break,
        };
        let step = Decimal::from(step);
        projected.push(MonthlyCashFlow {
            month,
            income: (last.income + income_slope * step).max(Decimal::ZERO),
            expenses: (last.expenses + expense_slope * step).max(Decimal::ZERO),
        });
    }

    projected
}
