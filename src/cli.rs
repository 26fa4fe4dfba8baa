use clap::{Args, Parser, Subcommand};

use crate::guides::WorkoutLevel;
use crate::models::{ActivityLevel, DietPreference, Gender};
use crate::planner::constants::{DEFAULT_LOOKUP_TIMEOUT_SECS, NUTRITIONIX_ENDPOINT};

/// Smart Diet Planner — calorie targets, meal logging and daily progress.
#[derive(Parser, Debug)]
#[command(name = "smart-diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Nutrition service connection flags.
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Nutritionix application id.
    #[arg(long, env = "NUTRITIONIX_APP_ID", hide_env_values = true, global = true)]
    pub app_id: Option<String>,

    /// Nutritionix application key.
    #[arg(long, env = "NUTRITIONIX_APP_KEY", hide_env_values = true, global = true)]
    pub app_key: Option<String>,

    /// Natural-language nutrients endpoint.
    #[arg(long, default_value = NUTRITIONIX_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Lookup timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_LOOKUP_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: generate a plan, log foods, track progress.
    Session,

    /// Print the health summary and meal targets for a profile.
    Target {
        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,

        #[arg(long, value_enum)]
        gender: Gender,

        #[arg(long, value_enum, default_value_t = ActivityLevel::Sedentary)]
        activity: ActivityLevel,

        #[arg(long, value_enum, default_value_t = DietPreference::Veg)]
        diet: DietPreference,
    },

    /// Show a workout plan and tick off today's blocks.
    Workout {
        #[arg(long, value_enum, default_value_t = WorkoutLevel::Beginner)]
        level: WorkoutLevel,
    },

    /// Show daily health tips.
    Tips,

    /// Show the daily water goal for a body weight.
    Water {
        /// Weight in kg.
        #[arg(long)]
        weight: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}
