use tracing::{info, warn};

use crate::engine::compute;
use crate::i18n::{Language, Translations};
use crate::input::{validate, Validation};
use crate::models::{CalculationResult, MetricUpdate, UserMetrics};

/// In-memory state of one calculator form.
///
/// Owns the metrics being edited, the last result and the active language.
/// The missing-fields message is never stored; it is derived from the
/// current metrics and language whenever it is asked for.
#[derive(Debug, Default)]
pub struct CalculatorForm {
    metrics: UserMetrics,
    result: Option<CalculationResult>,
    language: Language,
    /// Set when the last calculate attempt failed validation.
    failed_attempt: bool,
}

impl CalculatorForm {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn metrics(&self) -> &UserMetrics {
        &self.metrics
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Apply a field edit.
    ///
    /// A result computed for earlier inputs is dropped when the edit changes
    /// anything.
    pub fn apply(&mut self, update: MetricUpdate) {
        let before = self.metrics.clone();
        self.metrics.apply(update);

        for field in self.metrics.out_of_range_fields() {
            let (min, max) = field.expected_range();
            warn!(
                field = field.key(),
                value = self.metrics.numeric(field),
                min,
                max,
                "value outside expected range"
            );
        }

        if self.metrics != before {
            self.result = None;
        }
    }

    /// Validate the current metrics in the active language.
    pub fn validate(&self) -> Validation {
        validate(&self.metrics, self.translations())
    }

    /// Run validation and, if it passes, the formula.
    ///
    /// On failure the previous result is cleared and the validation verdict
    /// is returned.
    pub fn calculate(&mut self) -> Result<CalculationResult, Validation> {
        let validation = self.validate();
        if !validation.is_valid() {
            info!(?validation, "calculation skipped, input incomplete");
            self.failed_attempt = true;
            self.result = None;
            return Err(validation);
        }

        let result = compute(&self.metrics);
        self.failed_attempt = false;
        self.result = Some(result);
        Ok(result)
    }

    /// Message naming the missing fields, in the active language.
    ///
    /// Only shown after a failed calculate attempt, and only while fields
    /// are still missing.
    pub fn validation_message(&self) -> Option<String> {
        if !self.failed_attempt {
            return None;
        }
        self.validate().message(self.translations().please_fill_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, NumericField};

    fn filled_form() -> CalculatorForm {
        let mut form = CalculatorForm::new(Language::English);
        form.apply(MetricUpdate::from_raw(NumericField::Age, "30"));
        form.apply(MetricUpdate::from_raw(NumericField::Weight, "70"));
        form.apply(MetricUpdate::from_raw(NumericField::Height, "175"));
        form.apply(MetricUpdate::Gender(Gender::Male));
        form.apply(MetricUpdate::ActivityLevel(ActivityLevel::Moderate));
        form
    }

    #[test]
    fn test_calculate_success() {
        let mut form = filled_form();
        let result = form.calculate().unwrap();
        assert_eq!(result.bmr, 1649);
        assert_eq!(form.result(), Some(&result));
        assert_eq!(form.validation_message(), None);
    }

    #[test]
    fn test_no_message_before_first_attempt() {
        let form = CalculatorForm::new(Language::English);
        assert_eq!(form.validation_message(), None);
    }

    #[test]
    fn test_failed_calculate_clears_result() {
        let mut form = filled_form();
        form.calculate().unwrap();

        form.apply(MetricUpdate::from_raw(NumericField::Weight, "abc"));
        assert!(form.calculate().is_err());
        assert_eq!(form.result(), None);
        assert_eq!(
            form.validation_message(),
            Some("Please fill in the following fields: Weight (kg)".to_string())
        );
    }

    #[test]
    fn test_edit_invalidates_result() {
        let mut form = filled_form();
        form.calculate().unwrap();

        // Same value: result stays
        form.apply(MetricUpdate::Age(30));
        assert!(form.result().is_some());

        form.apply(MetricUpdate::Age(31));
        assert!(form.result().is_none());
    }

    #[test]
    fn test_message_follows_language_and_state() {
        let mut form = CalculatorForm::new(Language::English);
        form.apply(MetricUpdate::Age(30));
        assert!(form.calculate().is_err());

        form.set_language(Language::SimplifiedChinese);
        assert_eq!(
            form.validation_message(),
            Some("请填写以下字段: 体重 (公斤), 身高 (厘米)".to_string())
        );

        form.apply(MetricUpdate::Weight(60.0));
        form.apply(MetricUpdate::Height(165.0));
        assert_eq!(form.validation_message(), None);
    }
}
