mod language;
mod tables;

pub use language::Language;
pub use tables::Translations;

use crate::input::FieldLabels;
use crate::models::{ActivityLevel, Gender, NumericField};

impl Translations {
    /// Descriptive label for an activity level.
    pub fn activity_label(&self, level: ActivityLevel) -> &'static str {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    pub fn placeholder(&self, field: NumericField) -> &'static str {
        match field {
            NumericField::Age => self.age_placeholder,
            NumericField::Weight => self.weight_placeholder,
            NumericField::Height => self.height_placeholder,
        }
    }
}

impl FieldLabels for Translations {
    fn field_label(&self, field: NumericField) -> &str {
        match field {
            NumericField::Age => self.age,
            NumericField::Weight => self.weight,
            NumericField::Height => self.height,
        }
    }
}

impl FieldLabels for Language {
    fn field_label(&self, field: NumericField) -> &str {
        self.translations().field_label(field)
    }
}

/// Gender option labels. The string tables carry no entry for these,
/// so every language shows the same text.
pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{validate, Validation};
    use crate::models::UserMetrics;

    #[test]
    fn test_parse_language() {
        assert_eq!("zh-TW".parse::<Language>().unwrap(), Language::TraditionalChinese);
        assert_eq!("zh_cn".parse::<Language>().unwrap(), Language::SimplifiedChinese);
        assert_eq!("日本語".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_localized_missing_labels() {
        let metrics = UserMetrics {
            age: 30,
            ..Default::default()
        };

        assert_eq!(
            validate(&metrics, &Language::English),
            Validation::Invalid(vec!["Weight (kg)".to_string(), "Height (cm)".to_string()])
        );
        assert_eq!(
            validate(&metrics, &Language::Japanese),
            Validation::Invalid(vec!["体重 (kg)".to_string(), "身長 (cm)".to_string()])
        );
        assert_eq!(
            validate(&metrics, &Language::TraditionalChinese),
            Validation::Invalid(vec!["體重 (公斤)".to_string(), "身高 (公分)".to_string()])
        );
    }

    #[test]
    fn test_every_language_labels_every_level() {
        for lang in Language::ALL {
            let t = lang.translations();
            for level in ActivityLevel::ALL {
                assert!(!t.activity_label(level).is_empty());
            }
        }
    }
}
