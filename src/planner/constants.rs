use crate::models::{ActivityLevel, DietPreference, MealSlot};

/// Share of the daily target allocated to each meal slot, in slot order.
/// Shares sum to 1.0.
pub const MEAL_SPLIT: [(MealSlot, f64); 4] = [
    (MealSlot::Breakfast, 0.25),
    (MealSlot::Lunch, 0.35),
    (MealSlot::Snack, 0.15),
    (MealSlot::Dinner, 0.25),
];

/// Mifflin-St Jeor constant for men.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Mifflin-St Jeor constant for women.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Daily water goal in litres per kg of body weight.
pub const WATER_LITRES_PER_KG: f64 = 0.05;

/// Largest single water log entry accepted, in litres.
pub const MAX_WATER_LOG_LITRES: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Profile input bounds (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_RANGE: (u32, u32) = (12, 100);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);

/// Default HTTP timeout for the nutrition lookup.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Nutritionix natural-language endpoint.
pub const NUTRITIONIX_ENDPOINT: &str = "https://trackapi.nutritionix.com/v2/natural/nutrients";

/// Energy expenditure multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Share of the daily target for a slot.
pub fn slot_share(slot: MealSlot) -> f64 {
    MEAL_SPLIT
        .iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, share)| *share)
        .unwrap_or(0.0)
}

/// Suggested meal text shown next to each slot. Informational only.
pub fn suggestion(slot: MealSlot, preference: DietPreference) -> &'static str {
    match (preference, slot) {
        (DietPreference::Veg, MealSlot::Breakfast) => "Oats with milk & fruits",
        (DietPreference::Veg, MealSlot::Lunch) => "2 Chapati + Dal + Veg Curry + Salad",
        (DietPreference::Veg, MealSlot::Snack) => "Sprouts / Fruit Salad",
        (DietPreference::Veg, MealSlot::Dinner) => "Rice + Paneer Curry + Veg Sabji",
        (DietPreference::NonVeg, MealSlot::Breakfast) => "Egg omelette + Bread + Milk",
        (DietPreference::NonVeg, MealSlot::Lunch) => "Chicken Curry + Rice/Chapati + Salad",
        (DietPreference::NonVeg, MealSlot::Snack) => "Boiled Eggs / Fruit Salad",
        (DietPreference::NonVeg, MealSlot::Dinner) => "Fish Curry/Chicken + Rice + Veg Sabji",
    }
}
