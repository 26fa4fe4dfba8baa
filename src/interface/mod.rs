pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_action, prompt_checklist, prompt_export_path, prompt_food_description,
    prompt_meal_slot, prompt_profile, prompt_water_litres, prompt_yes_no,
};
pub use render::{
    display_checklist, display_health_summary, display_notice, display_plan, display_slot_targets,
    display_tips, display_water_goal, display_water_progress, display_workout, progress_bar,
};
