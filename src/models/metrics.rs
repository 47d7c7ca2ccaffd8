use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::suggest::closest_match;

/// Biological sex used to pick the Mifflin-St Jeor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(input))
            .ok_or_else(|| CalcError::UnknownGender {
                input: input.to_string(),
                suggestion: closest_match(input, Gender::ALL.iter().map(|g| g.code())),
            })
    }
}

/// Activity level; each maps to exactly one TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Light exercise 1-3 days/week.
    Light,
    /// Moderate exercise 3-5 days/week.
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week.
    Active,
    /// Very hard exercise, physical job.
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        ActivityLevel::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(input))
            .ok_or_else(|| CalcError::UnknownActivityLevel {
                input: input.to_string(),
                suggestion: closest_match(input, ActivityLevel::ALL.iter().map(|a| a.code())),
            })
    }
}

/// The numeric form fields that go through text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Weight,
    Height,
}

impl NumericField {
    pub const ALL: [NumericField; 3] = [NumericField::Age, NumericField::Weight, NumericField::Height];

    /// Advisory input range (inclusive). Values outside it are accepted but flagged.
    pub fn expected_range(self) -> (f64, f64) {
        match self {
            NumericField::Age => (1.0, 120.0),
            NumericField::Weight => (20.0, 300.0),
            NumericField::Height => (100.0, 250.0),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            NumericField::Age => "age",
            NumericField::Weight => "weight",
            NumericField::Height => "height",
        }
    }
}

/// Biometric input collected by the form.
///
/// All numeric fields are non-negative; zero means "unset".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Age in whole years.
    pub age: u32,

    pub gender: Gender,

    /// Weight in kilograms.
    pub weight: f64,

    /// Height in centimeters.
    pub height: f64,

    pub activity_level: ActivityLevel,
}

impl UserMetrics {
    /// Apply a single field edit.
    pub fn apply(&mut self, update: MetricUpdate) {
        match update {
            MetricUpdate::Age(age) => self.age = age,
            MetricUpdate::Gender(gender) => self.gender = gender,
            MetricUpdate::Weight(weight) => self.weight = non_negative(weight),
            MetricUpdate::Height(height) => self.height = non_negative(height),
            MetricUpdate::ActivityLevel(level) => self.activity_level = level,
        }
    }

    /// Current value of a numeric field.
    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Age => f64::from(self.age),
            NumericField::Weight => self.weight,
            NumericField::Height => self.height,
        }
    }

    /// Set (non-zero) fields whose value lies outside the expected range.
    pub fn out_of_range_fields(&self) -> Vec<NumericField> {
        NumericField::ALL
            .into_iter()
            .filter(|&field| {
                let value = self.numeric(field);
                let (min, max) = field.expected_range();
                value != 0.0 && !(min..=max).contains(&value)
            })
            .collect()
    }
}

/// A single typed edit to [`UserMetrics`].
///
/// Numeric variants are produced from raw text by [`MetricUpdate::from_raw`];
/// enum variants never pass through numeric normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricUpdate {
    Age(u32),
    Gender(Gender),
    Weight(f64),
    Height(f64),
    ActivityLevel(ActivityLevel),
}

impl MetricUpdate {
    /// Normalize raw text into an update for a numeric field.
    pub fn from_raw(field: NumericField, raw: &str) -> Self {
        use crate::input::normalize::{normalize_age, normalize_decimal};

        match field {
            NumericField::Age => MetricUpdate::Age(normalize_age(raw)),
            NumericField::Weight => MetricUpdate::Weight(normalize_decimal(raw)),
            NumericField::Height => MetricUpdate::Height(normalize_decimal(raw)),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_form() {
        let metrics = UserMetrics::default();
        assert_eq!(metrics.age, 0);
        assert_eq!(metrics.weight, 0.0);
        assert_eq!(metrics.height, 0.0);
        assert_eq!(metrics.gender, Gender::Male);
        assert_eq!(metrics.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_apply_updates() {
        let mut metrics = UserMetrics::default();
        metrics.apply(MetricUpdate::from_raw(NumericField::Age, "007"));
        metrics.apply(MetricUpdate::from_raw(NumericField::Weight, "70.5"));
        metrics.apply(MetricUpdate::Gender(Gender::Female));
        metrics.apply(MetricUpdate::ActivityLevel(ActivityLevel::VeryActive));

        assert_eq!(metrics.age, 7);
        assert_eq!(metrics.weight, 70.5);
        assert_eq!(metrics.gender, Gender::Female);
        assert_eq!(metrics.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_apply_never_stores_negative() {
        let mut metrics = UserMetrics::default();
        metrics.apply(MetricUpdate::Weight(-5.0));
        metrics.apply(MetricUpdate::Height(f64::NAN));
        assert_eq!(metrics.weight, 0.0);
        assert_eq!(metrics.height, 0.0);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            " very_active ".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert!("extreme".parse::<ActivityLevel>().is_err());
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_out_of_range_fields() {
        let metrics = UserMetrics {
            age: 150,
            weight: 70.0,
            height: 0.0,
            ..Default::default()
        };
        assert_eq!(metrics.out_of_range_fields(), vec![NumericField::Age]);
    }
}
