mod food;
mod plan;
mod profile;

pub use food::FoodEntry;
pub use plan::{DietPlan, MealRow, MealSlot};
pub use profile::{ActivityLevel, DietPreference, Gender, Profile};
