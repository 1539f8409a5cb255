//! Streaks module - consecutive-day activity runs.

mod streak_calculator;

pub use streak_calculator::transaction_streak;
