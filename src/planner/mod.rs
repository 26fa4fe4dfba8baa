pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate_bmi, calculate_bmr, daily_calorie_target, progress, round1, round2, slot_target,
    water_goal_litres,
};
pub use constants::*;
