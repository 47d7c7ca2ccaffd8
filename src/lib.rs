pub mod cli;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod input;
pub mod interface;
pub mod models;
pub mod state;
pub mod suggest;

pub use engine::compute;
pub use error::{CalcError, Result};
pub use i18n::Language;
pub use input::{normalize, validate, Validation};
pub use models::{ActivityLevel, CalculationResult, Gender, MetricUpdate, NumericField, UserMetrics};
pub use state::CalculatorForm;
