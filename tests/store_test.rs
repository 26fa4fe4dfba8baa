use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use smart_diet_planner_rs::models::{DietPreference, FoodEntry, MealRow, MealSlot};
use smart_diet_planner_rs::planner::round1;
use smart_diet_planner_rs::{DietPlanStore, PlannerError};

fn random_entry(rng: &mut StdRng, n: usize) -> FoodEntry {
    FoodEntry::new(
        format!("Food {}", n),
        rng.gen_range(0..900),
        rng.gen_range(0.0..60.0),
        rng.gen_range(0.0..120.0),
        rng.gen_range(0.0..50.0),
    )
}

fn assert_row_consistent(row: &MealRow) {
    let calories: u32 = row.foods().iter().map(|f| f.calories).sum();
    let protein: f64 = row.foods().iter().map(|f| f.protein_g).sum();
    let carbs: f64 = row.foods().iter().map(|f| f.carbs_g).sum();
    let fat: f64 = row.foods().iter().map(|f| f.fat_g).sum();

    assert_eq!(row.calories(), calories);
    assert_eq!(row.protein_g(), round1(protein));
    assert_eq!(row.carbs_g(), round1(carbs));
    assert_eq!(row.fat_g(), round1(fat));
}

#[test]
fn test_lunch_example() {
    let mut store = DietPlanStore::new();
    store.generate(1978, DietPreference::Veg).unwrap();

    store
        .add_food(MealSlot::Lunch, FoodEntry::new("Paneer", 265, 18.0, 6.0, 20.0))
        .unwrap();
    let lunch = store
        .add_food(MealSlot::Lunch, FoodEntry::new("Apple", 95, 0.5, 25.0, 0.3))
        .unwrap();

    assert_eq!(lunch.calories(), 360);
    assert_eq!(lunch.protein_g(), 18.5);
    assert_eq!(lunch.target_kcal(), 692);
}

#[test]
fn test_totals_match_entries_after_random_mutations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = DietPlanStore::new();
    store.generate(2400, DietPreference::NonVeg).unwrap();

    let targets: Vec<u32> = store
        .plan()
        .unwrap()
        .rows()
        .iter()
        .map(|r| r.target_kcal())
        .collect();

    for step in 0..2000 {
        let slot = MealSlot::ALL[rng.gen_range(0..4)];
        if rng.gen_bool(0.6) {
            let entry = random_entry(&mut rng, step);
            store.add_food(slot, entry).unwrap();
        } else {
            store.remove_last_food(slot).unwrap();
        }

        let plan = store.plan().unwrap();
        for row in plan.rows() {
            assert_row_consistent(row);
        }
        let current: Vec<u32> = plan.rows().iter().map(|r| r.target_kcal()).collect();
        assert_eq!(current, targets);
    }
}

#[test]
fn test_remove_undoes_add() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = DietPlanStore::new();
    store.generate(2000, DietPreference::Veg).unwrap();

    for step in 0..200 {
        let slot = MealSlot::ALL[step % 4];
        let before = store.plan().unwrap().row(slot).clone();

        let entry = random_entry(&mut rng, step);
        store.add_food(slot, entry.clone()).unwrap();
        let removed = store.remove_last_food(slot).unwrap();

        assert_eq!(removed, Some(entry.clone()));
        assert_eq!(store.plan().unwrap().row(slot), &before);

        // Keep the entry so later iterations start from non-empty rows
        store.add_food(slot, entry).unwrap();
    }
}

#[test]
fn test_remove_from_empty_slot_leaves_plan_unchanged() {
    let mut store = DietPlanStore::new();
    store.generate(2000, DietPreference::Veg).unwrap();
    store
        .add_food(MealSlot::Dinner, FoodEntry::new("Fish Curry", 320, 28.0, 8.0, 18.0))
        .unwrap();

    let before = store.plan().unwrap().clone();
    assert_eq!(store.remove_last_food(MealSlot::Snack).unwrap(), None);
    assert_eq!(store.plan().unwrap(), &before);
}

#[test]
fn test_lifecycle() {
    let mut store = DietPlanStore::new();
    assert!(matches!(
        store.add_food(MealSlot::Breakfast, FoodEntry::new("Oats", 150, 5.0, 27.0, 2.5)),
        Err(PlannerError::PlanNotGenerated)
    ));

    store.generate(1800, DietPreference::Veg).unwrap();
    store
        .add_food(MealSlot::Breakfast, FoodEntry::new("Oats", 150, 5.0, 27.0, 2.5))
        .unwrap();
    assert_eq!(store.plan().unwrap().total_calories(), 150);

    store.reset();
    assert!(store.plan().is_none());
    assert!(matches!(
        store.remove_last_food(MealSlot::Breakfast),
        Err(PlannerError::PlanNotGenerated)
    ));

    let plan = store.generate(1800, DietPreference::Veg).unwrap();
    assert_eq!(plan.total_calories(), 0);
}
