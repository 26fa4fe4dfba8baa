use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{DietPreference, FoodEntry};
use crate::planner::calculations::{progress, round1, slot_target};
use crate::planner::constants::suggestion;

/// One of the four fixed times of day a plan allocates calories to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// All slots in plan order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        };
        write!(f, "{}", name)
    }
}

/// One meal slot of a plan: fixed target plus logged foods and their totals.
///
/// Totals are private and only ever written by `recompute`, which resums the
/// full food list. They always equal the sum of the entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    slot: MealSlot,
    suggested: &'static str,
    target_kcal: u32,
    foods: Vec<FoodEntry>,
    calories: u32,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

impl MealRow {
    fn new(slot: MealSlot, suggested: &'static str, target_kcal: u32) -> Self {
        Self {
            slot,
            suggested,
            target_kcal,
            foods: Vec::new(),
            calories: 0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
        }
    }

    fn recompute(&mut self) {
        self.calories = self.foods.iter().map(|f| f.calories).sum();
        self.protein_g = round1(self.foods.iter().map(|f| f.protein_g).sum());
        self.carbs_g = round1(self.foods.iter().map(|f| f.carbs_g).sum());
        self.fat_g = round1(self.foods.iter().map(|f| f.fat_g).sum());
    }

    pub fn slot(&self) -> MealSlot {
        self.slot
    }

    pub fn suggested(&self) -> &'static str {
        self.suggested
    }

    pub fn target_kcal(&self) -> u32 {
        self.target_kcal
    }

    /// Logged foods, oldest first.
    pub fn foods(&self) -> &[FoodEntry] {
        &self.foods
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn protein_g(&self) -> f64 {
        self.protein_g
    }

    pub fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    pub fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Names of the logged foods joined for display. Empty when nothing is logged.
    pub fn chosen_foods(&self) -> String {
        self.foods
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Consumed calories as a fraction of the target, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        progress(u64::from(self.calories), self.target_kcal)
    }
}

/// The day's plan: exactly one row per meal slot plus the daily target.
#[derive(Debug, Clone, PartialEq)]
pub struct DietPlan {
    daily_target: u32,
    preference: DietPreference,
    rows: [MealRow; 4],
}

impl DietPlan {
    /// Create a fresh plan with per-slot targets and empty food lists.
    pub fn initialize(daily_target: u32, preference: DietPreference) -> Result<Self> {
        if daily_target == 0 {
            return Err(PlannerError::InvalidInput(
                "daily target must be a positive number of kcal".to_string(),
            ));
        }

        let rows = MealSlot::ALL.map(|slot| {
            MealRow::new(
                slot,
                suggestion(slot, preference),
                slot_target(daily_target, slot),
            )
        });

        Ok(Self {
            daily_target,
            preference,
            rows,
        })
    }

    pub fn daily_target(&self) -> u32 {
        self.daily_target
    }

    pub fn preference(&self) -> DietPreference {
        self.preference
    }

    /// Rows in slot order.
    pub fn rows(&self) -> &[MealRow] {
        &self.rows
    }

    pub fn row(&self, slot: MealSlot) -> &MealRow {
        &self.rows[slot.index()]
    }

    /// Append an entry to a slot and resum that slot's totals.
    ///
    /// Other slots and all targets are untouched. Invalid entries, and entries
    /// that would push the slot's calories past `u32::MAX`, leave the plan
    /// unchanged.
    pub fn add_food(&mut self, slot: MealSlot, entry: FoodEntry) -> Result<&MealRow> {
        if !entry.is_valid() {
            return Err(PlannerError::InvalidInput(format!(
                "food entry '{}' has negative or non-finite macros",
                entry.name
            )));
        }

        let row = &mut self.rows[slot.index()];
        if row.calories.checked_add(entry.calories).is_none() {
            return Err(PlannerError::InvalidInput(format!(
                "adding '{}' would overflow the {} calorie total",
                entry.name, slot
            )));
        }
        row.foods.push(entry);
        row.recompute();
        Ok(row)
    }

    /// Pop the most recently added entry of a slot.
    ///
    /// Returns `None` and changes nothing when the slot is empty.
    pub fn remove_last_food(&mut self, slot: MealSlot) -> Option<FoodEntry> {
        let row = &mut self.rows[slot.index()];
        let removed = row.foods.pop()?;
        row.recompute();
        Some(removed)
    }

    /// Sum of calories across all slots.
    pub fn total_calories(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.calories)).sum()
    }

    /// Sum of the per-slot targets. May differ from the daily target by rounding.
    pub fn total_slot_targets(&self) -> u32 {
        self.rows.iter().map(|r| r.target_kcal).sum()
    }

    /// Consumed calories against the daily target, clamped to [0, 1].
    pub fn daily_progress(&self) -> f64 {
        progress(self.total_calories(), self.daily_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paneer() -> FoodEntry {
        FoodEntry::new("Paneer", 265, 18.0, 6.0, 20.0)
    }

    fn apple() -> FoodEntry {
        FoodEntry::new("Apple", 95, 0.5, 25.0, 0.3)
    }

    #[test]
    fn test_initialize_targets() {
        let plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        assert_eq!(plan.rows().len(), 4);
        assert_eq!(plan.row(MealSlot::Breakfast).target_kcal(), 495);
        assert_eq!(plan.row(MealSlot::Lunch).target_kcal(), 692);
        assert_eq!(plan.row(MealSlot::Snack).target_kcal(), 297);
        assert_eq!(plan.row(MealSlot::Dinner).target_kcal(), 495);
        for row in plan.rows() {
            assert!(row.foods().is_empty());
            assert_eq!(row.calories(), 0);
            assert_eq!(row.protein_g(), 0.0);
        }
    }

    #[test]
    fn test_initialize_rejects_zero_target() {
        let result = DietPlan::initialize(0, DietPreference::NonVeg);
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_rows_are_in_slot_order() {
        let plan = DietPlan::initialize(2000, DietPreference::NonVeg).unwrap();
        let slots: Vec<MealSlot> = plan.rows().iter().map(|r| r.slot()).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert_eq!(plan.row(MealSlot::Breakfast).suggested(), "Egg omelette + Bread + Milk");
    }

    #[test]
    fn test_add_food_resums_slot() {
        let mut plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        plan.add_food(MealSlot::Lunch, paneer()).unwrap();
        plan.add_food(MealSlot::Lunch, apple()).unwrap();

        let lunch = plan.row(MealSlot::Lunch);
        assert_eq!(lunch.calories(), 360);
        assert_eq!(lunch.protein_g(), 18.5);
        assert_eq!(lunch.carbs_g(), 31.0);
        assert_eq!(lunch.fat_g(), 20.3);
        assert_eq!(lunch.chosen_foods(), "Paneer, Apple");

        // Other slots untouched
        assert_eq!(plan.row(MealSlot::Dinner).calories(), 0);
        assert_eq!(plan.total_calories(), 360);
    }

    #[test]
    fn test_add_invalid_entry_leaves_plan_unchanged() {
        let mut plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        let before = plan.clone();
        let bad = FoodEntry::new("Broken", 10, -1.0, 0.0, 0.0);
        assert!(plan.add_food(MealSlot::Snack, bad).is_err());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_add_food_rejects_calorie_overflow() {
        let mut plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        plan.add_food(MealSlot::Snack, FoodEntry::new("Huge", u32::MAX, 0.0, 0.0, 0.0))
            .unwrap();
        let before = plan.clone();

        let result = plan.add_food(MealSlot::Snack, FoodEntry::new("Mint", 1, 0.0, 0.0, 0.0));
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
        assert_eq!(plan, before);

        // Other slots still accept food, and the daily total does not wrap
        plan.add_food(MealSlot::Dinner, FoodEntry::new("Rice", 500, 10.0, 100.0, 1.0))
            .unwrap();
        assert_eq!(plan.total_calories(), u64::from(u32::MAX) + 500);
        assert_eq!(plan.daily_progress(), 1.0);
    }

    #[test]
    fn test_slot_index_matches_plan_order() {
        for (i, slot) in MealSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_remove_last_food_is_lifo() {
        let mut plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        plan.add_food(MealSlot::Lunch, paneer()).unwrap();
        plan.add_food(MealSlot::Lunch, apple()).unwrap();

        assert_eq!(plan.remove_last_food(MealSlot::Lunch), Some(apple()));
        let lunch = plan.row(MealSlot::Lunch);
        assert_eq!(lunch.calories(), 265);
        assert_eq!(lunch.protein_g(), 18.0);

        assert_eq!(plan.remove_last_food(MealSlot::Lunch), Some(paneer()));
        assert_eq!(plan.row(MealSlot::Lunch).chosen_foods(), "");
    }

    #[test]
    fn test_remove_from_empty_slot_is_noop() {
        let mut plan = DietPlan::initialize(1978, DietPreference::Veg).unwrap();
        let before = plan.clone();
        assert_eq!(plan.remove_last_food(MealSlot::Breakfast), None);
        assert_eq!(plan, before);
    }

    #[test]
    fn test_daily_progress() {
        let mut plan = DietPlan::initialize(1000, DietPreference::Veg).unwrap();
        assert_eq!(plan.daily_progress(), 0.0);
        plan.add_food(MealSlot::Dinner, FoodEntry::new("Rice", 500, 10.0, 100.0, 1.0))
            .unwrap();
        assert_eq!(plan.daily_progress(), 0.5);
        plan.add_food(MealSlot::Dinner, FoodEntry::new("Cake", 900, 5.0, 90.0, 40.0))
            .unwrap();
        assert_eq!(plan.daily_progress(), 1.0);
        assert_eq!(plan.row(MealSlot::Dinner).progress(), 1.0);
    }
}
