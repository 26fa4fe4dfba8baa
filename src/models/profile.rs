use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        };
        write!(f, "{}", name)
    }
}

/// Selects the suggested-meal text per slot. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DietPreference {
    Veg,
    NonVeg,
}

impl DietPreference {
    pub const ALL: [DietPreference; 2] = [DietPreference::Veg, DietPreference::NonVeg];
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietPreference::Veg => write!(f, "Veg"),
            DietPreference::NonVeg => write!(f, "Non-Veg"),
        }
    }
}

/// User biometrics supplied at plan-generation time.
///
/// Never stored by the plan; only the derived daily target is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl Profile {
    /// Build a profile, rejecting values outside the accepted input bounds.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
        activity: ActivityLevel,
    ) -> Result<Self> {
        let profile = Self {
            weight_kg,
            height_cm,
            age,
            gender,
            activity,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check every biometric against its inclusive bounds.
    pub fn validate(&self) -> Result<()> {
        let (min_age, max_age) = AGE_RANGE;
        if !(min_age..=max_age).contains(&self.age) {
            return Err(PlannerError::InvalidProfile(format!(
                "age must be between {} and {} years, got {}",
                min_age, max_age, self.age
            )));
        }

        let (min_w, max_w) = WEIGHT_RANGE_KG;
        if !self.weight_kg.is_finite() || !(min_w..=max_w).contains(&self.weight_kg) {
            return Err(PlannerError::InvalidProfile(format!(
                "weight must be between {} and {} kg, got {}",
                min_w, max_w, self.weight_kg
            )));
        }

        let (min_h, max_h) = HEIGHT_RANGE_CM;
        if !self.height_cm.is_finite() || !(min_h..=max_h).contains(&self.height_cm) {
            return Err(PlannerError::InvalidProfile(format!(
                "height must be between {} and {} cm, got {}",
                min_h, max_h, self.height_cm
            )));
        }

        Ok(())
    }
}
