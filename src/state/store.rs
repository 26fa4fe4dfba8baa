use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::models::{DietPlan, DietPreference, FoodEntry, MealRow, MealSlot, Profile};
use crate::planner::calculations;

/// Owns the day's diet plan for one session.
///
/// Lifecycle: uninitialized -> generated -> (add/remove)* -> reset. A plan only
/// comes into existence through `generate` and only disappears through `reset`
/// or a later `generate`, which replaces it wholesale.
#[derive(Debug, Default)]
pub struct DietPlanStore {
    plan: Option<DietPlan>,
}

impl DietPlanStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current plan with a fresh one for `daily_target`.
    ///
    /// On error the previous plan, if any, is kept.
    pub fn generate(&mut self, daily_target: u32, preference: DietPreference) -> Result<&DietPlan> {
        let plan = DietPlan::initialize(daily_target, preference)?;
        info!(daily_target, %preference, "diet plan generated");
        Ok(self.plan.insert(plan))
    }

    /// Derive the daily target from a profile and generate a plan for it.
    pub fn generate_for(&mut self, profile: &Profile, preference: DietPreference) -> Result<&DietPlan> {
        profile.validate()?;
        let target = calculations::daily_calorie_target(profile);
        self.generate(target, preference)
    }

    pub fn plan(&self) -> Option<&DietPlan> {
        self.plan.as_ref()
    }

    pub fn daily_target(&self) -> Option<u32> {
        self.plan.as_ref().map(DietPlan::daily_target)
    }

    pub fn is_generated(&self) -> bool {
        self.plan.is_some()
    }

    /// Append an entry to a slot of the current plan.
    pub fn add_food(&mut self, slot: MealSlot, entry: FoodEntry) -> Result<&MealRow> {
        let plan = self.plan.as_mut().ok_or(PlannerError::PlanNotGenerated)?;
        debug!(%slot, entry = %entry.summary(), "adding food");
        let row = plan.add_food(slot, entry)?;
        info!(%slot, calories = row.calories(), items = row.foods().len(), "meal updated");
        Ok(row)
    }

    /// Pop the newest entry of a slot. `Ok(None)` when the slot is empty.
    pub fn remove_last_food(&mut self, slot: MealSlot) -> Result<Option<FoodEntry>> {
        let plan = self.plan.as_mut().ok_or(PlannerError::PlanNotGenerated)?;
        let removed = plan.remove_last_food(slot);
        match &removed {
            Some(entry) => info!(%slot, food = %entry.name, "removed last food"),
            None => debug!(%slot, "nothing to remove"),
        }
        Ok(removed)
    }

    /// Discard the plan and its daily target.
    pub fn reset(&mut self) {
        if self.plan.take().is_some() {
            info!("diet plan reset");
        }
    }
}
