use serde::{Deserialize, Serialize};

/// A logged food with its resolved nutrition.
///
/// Created once from a lookup result and never modified afterwards; a meal row
/// only ever appends or pops whole entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories: u32, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Macros must be finite and non-negative. Calories are unsigned already.
    pub fn is_valid(&self) -> bool {
        [self.protein_g, self.carbs_g, self.fat_g]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Short one-line description for notices and logs.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} kcal, P:{} C:{} F:{})",
            self.name, self.calories, self.protein_g, self.carbs_g, self.fat_g
        )
    }
}
