use serde::{Deserialize, Serialize};

/// Rounded output of one successful calculation, in kcal/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Basal metabolic rate.
    pub bmr: i64,

    /// Total daily energy expenditure.
    pub tdee: i64,

    /// Daily intake for weight loss (TDEE - 500).
    pub weight_loss_target: i64,

    /// Daily intake for weight gain (TDEE + 500).
    pub weight_gain_target: i64,
}

impl CalculationResult {
    pub fn new(bmr: i64, tdee: i64, weight_loss_target: i64, weight_gain_target: i64) -> Self {
        Self {
            bmr,
            tdee,
            weight_loss_target,
            weight_gain_target,
        }
    }
}
