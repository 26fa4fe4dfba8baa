use std::path::Path;

use crate::error::Result;
use crate::models::DietPlan;

const HEADER: [&str; 8] = [
    "Meal",
    "Suggested",
    "Chosen Foods",
    "Calories",
    "Protein (g)",
    "Carbs (g)",
    "Fat (g)",
    "Target (kcal)",
];

/// Write a snapshot of the plan table to a CSV file.
///
/// Write-only: the file is never read back into a session.
pub fn export_plan_csv<P: AsRef<Path>>(path: P, plan: &DietPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for row in plan.rows() {
        let chosen = row.chosen_foods();
        wtr.write_record([
            row.slot().to_string(),
            row.suggested().to_string(),
            if chosen.is_empty() { "—".to_string() } else { chosen },
            row.calories().to_string(),
            format!("{:.1}", row.protein_g()),
            format!("{:.1}", row.carbs_g()),
            format!("{:.1}", row.fat_g()),
            row.target_kcal().to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietPreference, FoodEntry, MealSlot};
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_one_row_per_slot() {
        let mut plan = DietPlan::initialize(2000, DietPreference::Veg).unwrap();
        plan.add_food(MealSlot::Lunch, FoodEntry::new("Paneer", 265, 18.0, 6.0, 20.0))
            .unwrap();
        plan.add_food(MealSlot::Lunch, FoodEntry::new("Apple", 95, 0.5, 25.0, 0.3))
            .unwrap();

        let file = NamedTempFile::new().unwrap();
        export_plan_csv(file.path(), &plan).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), 8);
        assert_eq!(&headers[0], "Meal");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][2], "—");
        assert_eq!(&rows[1][0], "Lunch");
        assert_eq!(&rows[1][2], "Paneer, Apple");
        assert_eq!(&rows[1][3], "360");
        assert_eq!(&rows[1][4], "18.5");
        assert_eq!(&rows[1][7], "700");
    }
}
