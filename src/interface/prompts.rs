use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::Result;
use crate::guides::{CHECKLIST_BLOCKS, WorkoutChecklist};
use crate::models::{ActivityLevel, DietPreference, Gender, MealSlot, Profile};
use crate::planner::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Actions offered by the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    GeneratePlan,
    AddFood,
    RemoveLastFood,
    ShowPlan,
    LogWater,
    ExportPlan,
    ResetToday,
    Quit,
}

impl SessionAction {
    pub const ALL: [SessionAction; 8] = [
        SessionAction::GeneratePlan,
        SessionAction::AddFood,
        SessionAction::RemoveLastFood,
        SessionAction::ShowPlan,
        SessionAction::LogWater,
        SessionAction::ExportPlan,
        SessionAction::ResetToday,
        SessionAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionAction::GeneratePlan => "Generate plan",
            SessionAction::AddFood => "Add food",
            SessionAction::RemoveLastFood => "Remove last food from a meal",
            SessionAction::ShowPlan => "Show plan & progress",
            SessionAction::LogWater => "Log water",
            SessionAction::ExportPlan => "Export plan to CSV",
            SessionAction::ResetToday => "Reset today's log",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next session action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(SessionAction::ALL[selection])
}

fn prompt_number<T>(prompt: &str, default: T, (min, max): (T, T)) -> Result<T>
where
    T: Clone + PartialOrd + ToString + std::str::FromStr + 'static,
    <T as std::str::FromStr>::Err: ToString,
{
    let min_label = min.to_string();
    let max_label = max.to_string();
    let value = Input::<T>::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(move |v: &T| -> std::result::Result<(), String> {
            if *v < min || *v > max {
                Err(format!("Enter a value between {} and {}", min_label, max_label))
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_choice<T: Copy + ToString>(prompt: &str, options: &[T]) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection])
}

/// Collect name, biometrics and diet preference.
pub fn prompt_profile() -> Result<(String, Profile, DietPreference)> {
    let name: String = Input::new()
        .with_prompt("Name")
        .default("User".to_string())
        .interact_text()?;

    let age = prompt_number("Age", 25, AGE_RANGE)?;
    let weight = prompt_number("Weight (kg)", 70.0, WEIGHT_RANGE_KG)?;
    let height = prompt_number("Height (cm)", 170.0, HEIGHT_RANGE_CM)?;
    let gender = prompt_choice("Gender", &Gender::ALL)?;
    let activity = prompt_choice("Activity level", &ActivityLevel::ALL)?;
    let preference = prompt_choice("Diet preference", &DietPreference::ALL)?;

    let profile = Profile::new(weight, height, age, gender, activity)?;
    Ok((name, profile, preference))
}

/// Prompt for a meal slot.
pub fn prompt_meal_slot(prompt: &str) -> Result<MealSlot> {
    prompt_choice(prompt, &MealSlot::ALL)
}

/// Prompt for a free-text food description.
pub fn prompt_food_description() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("What did you eat? (e.g. 150g paneer and 1 apple)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a water intake amount.
pub fn prompt_water_litres() -> Result<f64> {
    const AMOUNTS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
    let labels: Vec<String> = AMOUNTS.iter().map(|a| format!("{:.2} L", a)).collect();
    let selection = Select::new()
        .with_prompt("How much water?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(AMOUNTS[selection])
}

/// Prompt for the CSV export path.
pub fn prompt_export_path() -> Result<String> {
    let path: String = Input::new()
        .with_prompt("Export to file")
        .default("diet_plan.csv".to_string())
        .interact_text()?;
    Ok(path)
}

/// Tick off today's workout blocks.
pub fn prompt_checklist(checklist: &WorkoutChecklist) -> Result<Vec<usize>> {
    let defaults: Vec<bool> = (0..CHECKLIST_BLOCKS.len())
        .map(|i| checklist.is_done(i))
        .collect();
    let selected = MultiSelect::new()
        .with_prompt("Which blocks did you complete today? (space to toggle)")
        .items(&CHECKLIST_BLOCKS)
        .defaults(&defaults)
        .interact()?;
    Ok(selected)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
