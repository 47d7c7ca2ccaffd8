pub mod constants;
pub mod formula;

pub use constants::*;
pub use formula::{
    calculate_bmr, calculate_tdee, compute, weight_gain_calories, weight_loss_calories,
};
