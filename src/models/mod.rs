mod metrics;
mod result;

pub use metrics::{ActivityLevel, Gender, MetricUpdate, NumericField, UserMetrics};
pub use result::CalculationResult;
