use clap::Parser;

use smart_diet_planner_rs::cli::{Cli, Command};
use smart_diet_planner_rs::config::AppConfig;
use smart_diet_planner_rs::error::{PlannerError, Result};
use smart_diet_planner_rs::guides::{WorkoutChecklist, WorkoutLevel, tip_of_the_day, workout_plan};
use smart_diet_planner_rs::interface::{
    SessionAction, display_checklist, display_health_summary, display_notice, display_plan,
    display_slot_targets, display_tips, display_water_goal, display_water_progress,
    display_workout, prompt_action, prompt_checklist, prompt_export_path, prompt_food_description,
    prompt_meal_slot, prompt_profile, prompt_water_litres, prompt_yes_no,
};
use smart_diet_planner_rs::logging;
use smart_diet_planner_rs::lookup::{LookupConfig, NutritionLookup, NutritionixClient};
use smart_diet_planner_rs::models::{ActivityLevel, DietPlan, DietPreference, Gender, Profile};
use smart_diet_planner_rs::planner::{calculate_bmi, daily_calorie_target, water_goal_litres};
use smart_diet_planner_rs::session::{HealthSummary, NO_PLAN_MESSAGE, Notice, Session};

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(&cli.lookup);
    logging::init(&config.log);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(config.lookup),
        Command::Target {
            age,
            weight,
            height,
            gender,
            activity,
            diet,
        } => cmd_target(age, weight, height, gender, activity, diet),
        Command::Workout { level } => cmd_workout(level),
        Command::Tips => {
            display_tips();
            Ok(())
        }
        Command::Water { weight } => cmd_water(weight),
    }
}

/// Run the interactive planner until the user quits.
fn cmd_session(lookup_config: LookupConfig) -> Result<()> {
    if !lookup_config.has_credentials() {
        eprintln!(
            "Nutrition lookup credentials are not set (NUTRITIONIX_APP_ID / NUTRITIONIX_APP_KEY); \
             adding foods will not work."
        );
    }
    let client = NutritionixClient::new(lookup_config)?;
    let mut session = Session::new(client);

    println!("Smart Diet Planner");
    println!("Tip of the day: {}", tip_of_the_day(&mut rand::thread_rng()));
    println!();

    loop {
        match prompt_action()? {
            SessionAction::GeneratePlan => {
                let (name, profile, preference) = prompt_profile()?;
                display_notice(&session.generate(&name, profile, preference));
                if let Some(summary) = session.health_summary() {
                    display_health_summary(&summary);
                }
                if let Some(plan) = session.store().plan() {
                    display_plan(plan);
                }
            }
            SessionAction::AddFood => add_food(&mut session)?,
            SessionAction::RemoveLastFood => {
                let slot = prompt_meal_slot("Remove the last food from which meal?")?;
                display_notice(&session.remove_last_food(slot));
                show_plan(&session);
            }
            SessionAction::ShowPlan => {
                if let Some(summary) = session.health_summary() {
                    display_health_summary(&summary);
                }
                show_plan(&session);
            }
            SessionAction::LogWater => {
                let litres = prompt_water_litres()?;
                display_notice(&session.log_water(litres));
                if let Some(profile) = session.profile() {
                    let water = session.water();
                    display_water_progress(
                        water.logged_litres(),
                        profile.weight_kg,
                        water.progress(profile.weight_kg),
                    );
                }
            }
            SessionAction::ExportPlan => {
                let path = prompt_export_path()?;
                display_notice(&session.export_csv(&path));
            }
            SessionAction::ResetToday => {
                if prompt_yes_no("Clear today's diet data?", false)? {
                    display_notice(&session.reset());
                }
            }
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

fn add_food<L: NutritionLookup>(session: &mut Session<L>) -> Result<()> {
    if !session.store().is_generated() {
        display_notice(&Notice::warning(NO_PLAN_MESSAGE));
        return Ok(());
    }
    let description = prompt_food_description()?;
    let slot = prompt_meal_slot("For which meal?")?;
    display_notice(&session.add_food(slot, &description));
    show_plan(session);
    Ok(())
}

fn show_plan<L: NutritionLookup>(session: &Session<L>) {
    match session.store().plan() {
        Some(plan) => display_plan(plan),
        None => println!("No plan yet. Choose 'Generate plan' first."),
    }
}

/// Print the health summary and meal targets for a profile.
fn cmd_target(
    age: u32,
    weight: f64,
    height: f64,
    gender: Gender,
    activity: ActivityLevel,
    diet: DietPreference,
) -> Result<()> {
    let profile = Profile::new(weight, height, age, gender, activity)?;
    let daily_target = daily_calorie_target(&profile);
    let plan = DietPlan::initialize(daily_target, diet)?;

    display_health_summary(&HealthSummary {
        name: "User".to_string(),
        bmi: calculate_bmi(weight, height),
        daily_target,
        water_goal_litres: water_goal_litres(weight),
    });
    display_slot_targets(&plan);
    Ok(())
}

/// Show a workout plan, then run the checklist.
fn cmd_workout(level: WorkoutLevel) -> Result<()> {
    display_workout(level, &workout_plan(level));

    let mut checklist = WorkoutChecklist::new();
    let completed = prompt_checklist(&checklist)?;
    checklist.set_completed(&completed);
    display_checklist(&checklist);
    Ok(())
}

fn cmd_water(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "weight must be a positive number of kg".to_string(),
        ));
    }
    display_water_goal(weight);
    Ok(())
}
