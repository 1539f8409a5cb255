//! Goal progress domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived progress of one goal over the evaluated window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    /// Sum of linked income transactions inside the window.
    pub contributed: Decimal,
    /// `contributed / target * 100`, clamped to `[0, 100]`.
    pub progress: Decimal,
}
