use crate::guides::{CHECKLIST_BLOCKS, HEALTH_TIPS, WorkoutChecklist, WorkoutLevel, WorkoutPlan};
use crate::models::DietPlan;
use crate::planner::calculations::water_goal_litres;
use crate::session::{HealthSummary, Notice};

const BAR_WIDTH: usize = 30;

/// Text progress bar for a fraction in [0, 1], e.g. `[#######-------]  50%`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        fraction * 100.0
    )
}

pub fn display_notice(notice: &Notice) {
    println!("{}", notice);
}

pub fn display_health_summary(summary: &HealthSummary) {
    println!();
    println!("=== Health Summary ===");
    println!("Name:                {}", summary.name);
    println!("BMI:                 {:.2}", summary.bmi);
    println!("Daily Target (kcal): {}", summary.daily_target);
    println!("Water Goal (L/day):  {:.2}", summary.water_goal_litres);
    println!();
}

/// Plan table, per-meal progress and daily progress.
pub fn display_plan(plan: &DietPlan) {
    let chosen: Vec<String> = plan
        .rows()
        .iter()
        .map(|r| {
            let foods = r.chosen_foods();
            if foods.is_empty() { "—".to_string() } else { foods }
        })
        .collect();
    let suggested_width = plan
        .rows()
        .iter()
        .map(|r| r.suggested().chars().count())
        .max()
        .unwrap_or(10);
    let chosen_width = chosen.iter().map(|c| c.chars().count()).max().unwrap_or(10).max(12);

    println!();
    println!("=== Your Diet Plan ===");
    println!();
    println!(
        "{:<9}  {:<sw$}  {:<cw$}  {:>5}  {:>7}  {:>7}  {:>7}  {:>6}",
        "Meal",
        "Suggested",
        "Chosen Foods",
        "kcal",
        "Prot(g)",
        "Carb(g)",
        "Fat(g)",
        "Target",
        sw = suggested_width,
        cw = chosen_width
    );

    for (row, chosen) in plan.rows().iter().zip(&chosen) {
        println!(
            "{:<9}  {:<sw$}  {:<cw$}  {:>5}  {:>7.1}  {:>7.1}  {:>7.1}  {:>6}",
            row.slot().to_string(),
            row.suggested(),
            chosen,
            row.calories(),
            row.protein_g(),
            row.carbs_g(),
            row.fat_g(),
            row.target_kcal(),
            sw = suggested_width,
            cw = chosen_width
        );
    }

    println!();
    println!("--- Per-meal progress ---");
    for row in plan.rows() {
        println!(
            "{:<9} {:>5} / {:<5} kcal {}",
            row.slot().to_string(),
            row.calories(),
            row.target_kcal().max(1),
            progress_bar(row.progress(), BAR_WIDTH)
        );
    }

    println!();
    println!("--- Daily progress ---");
    println!(
        "Total consumed: {} / {} kcal {}",
        plan.total_calories(),
        plan.daily_target(),
        progress_bar(plan.daily_progress(), BAR_WIDTH)
    );
    println!();
}

/// Per-slot targets without consumption, for the `target` command.
pub fn display_slot_targets(plan: &DietPlan) {
    println!("=== Meal Targets ({}) ===", plan.preference());
    for row in plan.rows() {
        println!(
            "{:<9} {:>5} kcal  {}",
            row.slot().to_string(),
            row.target_kcal(),
            row.suggested()
        );
    }
    println!();
}

pub fn display_workout(level: WorkoutLevel, plan: &WorkoutPlan) {
    println!();
    println!("=== Workout Plan: {} ===", level);
    println!();
    println!("--- Daily Template ---");
    for (block, detail) in &plan.daily_template {
        println!("  {}: {}", block, detail);
    }
    println!();
    println!("--- Weekly Split ---");
    for (day, session) in &plan.weekly_split {
        println!("  {}: {}", day, session);
    }
    println!();
}

pub fn display_checklist(checklist: &WorkoutChecklist) {
    for (i, block) in CHECKLIST_BLOCKS.iter().enumerate() {
        let mark = if checklist.is_done(i) { "x" } else { " " };
        println!("  [{}] {}", mark, block);
    }
    println!(
        "Completed {}/{} blocks today {}",
        checklist.completed(),
        CHECKLIST_BLOCKS.len(),
        progress_bar(checklist.fraction(), BAR_WIDTH)
    );
}

pub fn display_tips() {
    println!();
    println!("=== Daily Health Tips ===");
    for tip in HEALTH_TIPS {
        println!("  - {}", tip);
    }
    println!();
}

pub fn display_water_goal(weight_kg: f64) {
    println!(
        "You should drink about {:.2} liters of water daily.",
        water_goal_litres(weight_kg)
    );
}

pub fn display_water_progress(logged_litres: f64, weight_kg: f64, fraction: f64) {
    println!(
        "Water today: {:.2} / {:.2} L {}",
        logged_litres,
        water_goal_litres(weight_kg),
        progress_bar(fraction, BAR_WIDTH)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 4), "[----]   0%");
        assert_eq!(progress_bar(0.5, 4), "[##--]  50%");
        assert_eq!(progress_bar(1.0, 4), "[####] 100%");
    }

    #[test]
    fn test_progress_bar_clamps() {
        assert_eq!(progress_bar(3.0, 2), "[##] 100%");
        assert_eq!(progress_bar(-1.0, 2), "[--]   0%");
        assert_eq!(progress_bar(f64::NAN, 2), "[--]   0%");
    }
}
