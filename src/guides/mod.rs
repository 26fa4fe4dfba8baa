pub mod tips;
pub mod workouts;

pub use tips::{HEALTH_TIPS, tip_of_the_day};
pub use workouts::{CHECKLIST_BLOCKS, WorkoutChecklist, WorkoutLevel, WorkoutPlan, workout_plan};
