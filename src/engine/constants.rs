use crate::models::{ActivityLevel, Gender};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kilogram of body weight.
pub const MSJ_WEIGHT_COEF: f64 = 10.0;

/// kcal per centimeter of height.
pub const MSJ_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const MSJ_AGE_COEF: f64 = 5.0;

pub const MSJ_MALE_OFFSET: f64 = 5.0;
pub const MSJ_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Daily calorie adjustment applied to TDEE for weight loss/gain targets.
pub const WEIGHT_CHANGE_DELTA: f64 = 500.0;

/// Sex-dependent constant added to the Mifflin-St Jeor sum.
pub fn sex_offset(gender: Gender) -> f64 {
    match gender {
        Gender::Male => MSJ_MALE_OFFSET,
        Gender::Female => MSJ_FEMALE_OFFSET,
    }
}

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::Light => LIGHT_MULT,
        ActivityLevel::Moderate => MODERATE_MULT,
        ActivityLevel::Active => ACTIVE_MULT,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
    }
}
