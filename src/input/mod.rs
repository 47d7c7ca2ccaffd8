pub mod normalize;
pub mod validation;

pub use normalize::{normalize, normalize_age, normalize_decimal, strip_leading_zeros};
pub use validation::{missing_fields, validate, FieldLabels, Validation, REQUIRED_FIELDS};
