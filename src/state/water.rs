use crate::error::{PlannerError, Result};
use crate::planner::calculations::{round2, water_goal_litres};
use crate::planner::constants::MAX_WATER_LOG_LITRES;

/// Litres of water logged during the session against a weight-based goal.
#[derive(Debug, Clone, Default)]
pub struct WaterLog {
    logged_litres: f64,
}

impl WaterLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an intake. Accepts (0, 1] litres per entry.
    pub fn log(&mut self, litres: f64) -> Result<f64> {
        if !litres.is_finite() || litres <= 0.0 || litres > MAX_WATER_LOG_LITRES {
            return Err(PlannerError::InvalidInput(format!(
                "water intake must be between 0 and {} litres",
                MAX_WATER_LOG_LITRES
            )));
        }
        self.logged_litres += litres;
        Ok(self.logged_litres)
    }

    pub fn logged_litres(&self) -> f64 {
        round2(self.logged_litres)
    }

    /// Fraction of the goal for `weight_kg` reached, clamped to [0, 1].
    pub fn progress(&self, weight_kg: f64) -> f64 {
        let goal = water_goal_litres(weight_kg);
        if goal <= 0.0 {
            return 0.0;
        }
        (self.logged_litres / goal).clamp(0.0, 1.0)
    }
}
