use tracing::debug;

use crate::engine::constants::*;
use crate::models::{ActivityLevel, CalculationResult, UserMetrics};

/// Basal metabolic rate via the Mifflin-St Jeor equation, unrounded.
///
/// Formula: 10 * weight(kg) + 6.25 * height(cm) - 5 * age(years) + sex offset
pub fn calculate_bmr(metrics: &UserMetrics) -> f64 {
    MSJ_WEIGHT_COEF * metrics.weight + MSJ_HEIGHT_COEF * metrics.height
        - MSJ_AGE_COEF * f64::from(metrics.age)
        + sex_offset(metrics.gender)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

pub fn weight_loss_calories(tdee: f64) -> f64 {
    tdee - WEIGHT_CHANGE_DELTA
}

pub fn weight_gain_calories(tdee: f64) -> f64 {
    tdee + WEIGHT_CHANGE_DELTA
}

/// Compute the full result for a set of metrics.
///
/// Rounding happens only here; TDEE and the targets are derived from the
/// unrounded BMR. Callers are expected to run validation first, but the
/// function is total over any input.
pub fn compute(metrics: &UserMetrics) -> CalculationResult {
    let bmr = calculate_bmr(metrics);
    let tdee = calculate_tdee(bmr, metrics.activity_level);

    let result = CalculationResult::new(
        round_kcal(bmr),
        round_kcal(tdee),
        round_kcal(weight_loss_calories(tdee)),
        round_kcal(weight_gain_calories(tdee)),
    );

    debug!(bmr, tdee, ?result, "computed energy expenditure");
    result
}

/// Round half away from zero to whole kcal.
fn round_kcal(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn metrics(age: u32, gender: Gender, weight: f64, height: f64, level: ActivityLevel) -> UserMetrics {
        UserMetrics {
            age,
            gender,
            weight,
            height,
            activity_level: level,
        }
    }

    #[test]
    fn test_bmr_male() {
        let m = metrics(30, Gender::Male, 70.0, 175.0, ActivityLevel::Moderate);
        assert!((calculate_bmr(&m) - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        let m = metrics(25, Gender::Female, 60.0, 165.0, ActivityLevel::Sedentary);
        assert!((calculate_bmr(&m) - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_sex_offset_difference() {
        // Same body, only sex differs: 5 - (-161) = 166 kcal
        let male = metrics(40, Gender::Male, 80.0, 180.0, ActivityLevel::Light);
        let female = metrics(40, Gender::Female, 80.0, 180.0, ActivityLevel::Light);
        assert!((calculate_bmr(&male) - calculate_bmr(&female) - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_uses_unrounded_bmr() {
        let m = metrics(30, Gender::Male, 70.0, 175.0, ActivityLevel::Moderate);
        let result = compute(&m);

        // 1648.75 * 1.55 = 2555.5625
        assert_eq!(result.bmr, 1649);
        assert_eq!(result.tdee, 2556);
        assert_eq!(result.weight_loss_target, 2056);
        assert_eq!(result.weight_gain_target, 3056);
    }

    #[test]
    fn test_rounded_bmr_not_fed_into_tdee() {
        // bmr = 1642.5; 1642.5 * 1.9 = 3120.75, whereas 1643 * 1.9 = 3121.7
        let m = metrics(30, Gender::Male, 70.0, 174.0, ActivityLevel::VeryActive);
        let result = compute(&m);
        assert_eq!(result.bmr, 1643);
        assert_eq!(result.tdee, 3121);
    }

    #[test]
    fn test_targets_offset_from_tdee() {
        assert!((weight_loss_calories(2000.0) - 1500.0).abs() < 1e-9);
        assert!((weight_gain_calories(2000.0) - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let m = metrics(52, Gender::Female, 68.3, 161.7, ActivityLevel::Active);
        assert_eq!(compute(&m), compute(&m));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_kcal(1344.5), 1345);
        assert_eq!(round_kcal(-10.5), -11);
        assert_eq!(round_kcal(1614.3), 1614);
    }
}
