//! Goal progress module - live completion percentages for savings goals.

mod goal_progress_model;
mod progress_evaluator;

pub use goal_progress_model::GoalProgress;
pub use progress_evaluator::{evaluate_goal, evaluate_goals};
