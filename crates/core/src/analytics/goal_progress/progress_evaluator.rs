//! Live goal-progress evaluation.

use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::goals::Goal;
use crate::snapshot::{DateRange, LedgerSnapshot};
use crate::transactions::Transaction;

use super::goal_progress_model::GoalProgress;

/// Evaluates one goal against its linked contributions.
///
/// Contributions are `income` transactions whose `goal_id` matches, inside
/// the optional inclusive range. Progress is the contributed share of the
/// target as a percentage clamped to `[0, 100]`; a goal with a non-positive
/// target reports 0 rather than dividing by zero.
pub fn evaluate_goal(
    goal: &Goal,
    transactions: &[Transaction],
    range: Option<&DateRange>,
) -> GoalProgress {
    let contributed: Decimal = transactions
        .iter()
        .filter(|t| t.is_income())
        .filter(|t| t.goal_id.as_deref() == Some(goal.id.as_str()))
        .filter(|t| range.map_or(true, |r| r.contains(t.date)))
        .map(|t| t.amount)
        .sum();

    let progress = if goal.target_amount <= Decimal::zero() {
        Decimal::ZERO
    } else {
        (contributed / goal.target_amount * dec!(100))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
            .clamp(Decimal::ZERO, dec!(100))
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        name: goal.name.clone(),
        contributed,
        progress,
    }
}

/// Evaluates every goal in the snapshot, in goal input order.
pub fn evaluate_goals(snapshot: &LedgerSnapshot, range: Option<&DateRange>) -> Vec<GoalProgress> {
    snapshot
        .goals
        .iter()
        .map(|goal| evaluate_goal(goal, snapshot.transactions, range))
        .collect()
}
