pub mod cli;
pub mod config;
pub mod error;
pub mod guides;
pub mod interface;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod planner;
pub mod session;
pub mod state;

pub use error::{PlannerError, Result};
pub use lookup::{LookupMiss, NutritionLookup};
pub use models::{DietPlan, FoodEntry, MealRow, MealSlot, Profile};
pub use session::{Notice, NoticeLevel, Session};
pub use state::DietPlanStore;
