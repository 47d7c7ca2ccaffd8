use crate::models::{NumericField, UserMetrics};

/// Fields that must be non-zero before a calculation, in reporting order.
pub const REQUIRED_FIELDS: [NumericField; 3] =
    [NumericField::Age, NumericField::Weight, NumericField::Height];

/// Lookup of display labels for form fields.
pub trait FieldLabels {
    fn field_label(&self, field: NumericField) -> &str;
}

/// Outcome of the completeness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Labels of the missing fields, age -> weight -> height.
    Invalid(Vec<String>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// User-facing message, e.g. "Please fill in the following fields: Age (years)".
    ///
    /// Returns `None` when valid.
    pub fn message(&self, prefix: &str) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(labels) => Some(format!("{}: {}", prefix, labels.join(", "))),
        }
    }
}

/// Required fields that are still zero.
pub fn missing_fields(metrics: &UserMetrics) -> Vec<NumericField> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|&field| metrics.numeric(field) == 0.0)
        .collect()
}

/// Check that age, weight and height are all set.
pub fn validate<L: FieldLabels + ?Sized>(metrics: &UserMetrics, labels: &L) -> Validation {
    let missing = missing_fields(metrics);
    if missing.is_empty() {
        return Validation::Valid;
    }

    Validation::Invalid(
        missing
            .into_iter()
            .map(|field| labels.field_label(field).to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys;

    impl FieldLabels for Keys {
        fn field_label(&self, field: NumericField) -> &str {
            field.key()
        }
    }

    fn metrics(age: u32, weight: f64, height: f64) -> UserMetrics {
        UserMetrics {
            age,
            weight,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_is_valid() {
        assert_eq!(validate(&metrics(30, 70.0, 175.0), &Keys), Validation::Valid);
    }

    #[test]
    fn test_missing_age_only() {
        assert_eq!(
            validate(&metrics(0, 70.0, 170.0), &Keys),
            Validation::Invalid(vec!["age".to_string()])
        );
    }

    #[test]
    fn test_missing_fields_keep_order() {
        assert_eq!(
            validate(&metrics(30, 0.0, 0.0), &Keys),
            Validation::Invalid(vec!["weight".to_string(), "height".to_string()])
        );
        assert_eq!(
            missing_fields(&UserMetrics::default()),
            REQUIRED_FIELDS.to_vec()
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let m = metrics(0, 70.0, 0.0);
        let first = validate(&m, &Keys);
        for _ in 0..5 {
            assert_eq!(validate(&m, &Keys), first);
        }
    }

    #[test]
    fn test_message_format() {
        let v = validate(&metrics(0, 0.0, 170.0), &Keys);
        assert_eq!(
            v.message("Please fill in the following fields"),
            Some("Please fill in the following fields: age, weight".to_string())
        );
        assert_eq!(Validation::Valid.message("unused"), None);
    }
}
