use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::error::PlannerError;
use crate::lookup::NutritionLookup;
use crate::models::{DietPreference, MealSlot, Profile};
use crate::planner::calculations::{calculate_bmi, water_goal_litres};
use crate::state::{DietPlanStore, WaterLog, export_plan_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

/// User-facing outcome of a session action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.level == NoticeLevel::Warning
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Header figures shown once a plan exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSummary {
    pub name: String,
    pub bmi: f64,
    pub daily_target: u32,
    pub water_goal_litres: f64,
}

pub const NO_PLAN_MESSAGE: &str = "Generate your diet plan first.";
pub const UNRECOGNIZED_FOOD_MESSAGE: &str =
    "Couldn't recognize that food. Please try a simpler description.";

/// One interactive session: the day's plan, water log and lookup service.
///
/// Every action leaves state either fully updated or untouched and reports
/// what happened as a `Notice`. Nothing here is fatal.
pub struct Session<L> {
    store: DietPlanStore,
    water: WaterLog,
    lookup: L,
    name: String,
    profile: Option<Profile>,
}

impl<L: NutritionLookup> Session<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            store: DietPlanStore::new(),
            water: WaterLog::new(),
            lookup,
            name: "User".to_string(),
            profile: None,
        }
    }

    pub fn store(&self) -> &DietPlanStore {
        &self.store
    }

    pub fn water(&self) -> &WaterLog {
        &self.water
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Build a fresh plan from biometrics, replacing any existing one.
    pub fn generate(&mut self, name: &str, profile: Profile, preference: DietPreference) -> Notice {
        match self.store.generate_for(&profile, preference) {
            Ok(plan) => {
                let target = plan.daily_target();
                self.name = if name.trim().is_empty() {
                    "User".to_string()
                } else {
                    name.trim().to_string()
                };
                self.profile = Some(profile);
                Notice::success(format!("Plan generated: {} kcal/day ({})", target, preference))
            }
            Err(e) => {
                warn!(error = %e, "plan generation rejected");
                Notice::warning(e.to_string())
            }
        }
    }

    /// Name, BMI, target and water goal. `None` until a plan exists.
    pub fn health_summary(&self) -> Option<HealthSummary> {
        let daily_target = self.store.daily_target()?;
        let profile = self.profile.as_ref()?;
        Some(HealthSummary {
            name: self.name.clone(),
            bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
            daily_target,
            water_goal_litres: water_goal_litres(profile.weight_kg),
        })
    }

    /// Resolve `description` and log it under `slot`.
    ///
    /// The lookup only runs once a plan exists, and the plan is only touched
    /// after a complete result.
    pub fn add_food(&mut self, slot: MealSlot, description: &str) -> Notice {
        if !self.store.is_generated() {
            return Notice::warning(NO_PLAN_MESSAGE);
        }

        let entry = match self.lookup.lookup(description) {
            Ok(entry) => entry,
            Err(miss) => {
                info!(%miss, description, "food not added");
                return Notice::warning(UNRECOGNIZED_FOOD_MESSAGE);
            }
        };

        let name = entry.name.clone();
        let calories = entry.calories;
        match self.store.add_food(slot, entry) {
            Ok(_) => Notice::success(format!("Added to {}: {} ({} kcal)", slot, name, calories)),
            Err(PlannerError::PlanNotGenerated) => Notice::warning(NO_PLAN_MESSAGE),
            Err(e) => Notice::warning(e.to_string()),
        }
    }

    /// Undo the newest food of a slot.
    pub fn remove_last_food(&mut self, slot: MealSlot) -> Notice {
        match self.store.remove_last_food(slot) {
            Ok(Some(removed)) => Notice::info(format!("Removed {} from {}", removed.name, slot)),
            Ok(None) => Notice::info(format!("{} has no foods to remove.", slot)),
            Err(_) => Notice::warning(NO_PLAN_MESSAGE),
        }
    }

    /// Clear today's plan. Profile inputs and water log are kept.
    pub fn reset(&mut self) -> Notice {
        self.store.reset();
        Notice::success("Cleared today's diet data.")
    }

    pub fn log_water(&mut self, litres: f64) -> Notice {
        match self.water.log(litres) {
            Ok(total) => Notice::success(format!("Logged {:.2} L (total {:.2} L)", litres, total)),
            Err(e) => Notice::warning(e.to_string()),
        }
    }

    /// Write the current plan table to `path` as CSV.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Notice {
        let Some(plan) = self.store.plan() else {
            return Notice::warning(NO_PLAN_MESSAGE);
        };
        match export_plan_csv(path.as_ref(), plan) {
            Ok(()) => Notice::success(format!("Plan exported to {}", path.as_ref().display())),
            Err(e) => {
                warn!(error = %e, "plan export failed");
                Notice::warning(e.to_string())
            }
        }
    }
}
