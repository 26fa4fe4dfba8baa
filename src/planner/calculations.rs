use crate::models::{Gender, MealSlot, Profile};
use crate::planner::constants::*;

/// Round to one decimal place, half away from zero.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn calculate_bmr(profile: &Profile) -> f64 {
    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64 + offset
}

/// Daily calorie target: BMR scaled by activity, truncated to whole kcal.
///
/// Negative products clamp to 0; validated profiles never produce one.
pub fn daily_calorie_target(profile: &Profile) -> u32 {
    let tdee = calculate_bmr(profile) * activity_multiplier(profile.activity);
    tdee.max(0.0).floor() as u32
}

/// Target kcal for one slot: the slot's share of the daily target, rounded.
pub fn slot_target(daily_target: u32, slot: MealSlot) -> u32 {
    (daily_target as f64 * slot_share(slot)).round() as u32
}

/// Body-mass index rounded to 2 decimals.
///
/// A zero height yields the 0.0 sentinel instead of infinity.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let denom = height_m * height_m;
    if denom == 0.0 {
        return 0.0;
    }
    round2(weight_kg / denom)
}

/// Daily water goal in litres, rounded to 2 decimals.
pub fn water_goal_litres(weight_kg: f64) -> f64 {
    round2(weight_kg * WATER_LITRES_PER_KG)
}

/// Fraction of a calorie target reached, clamped to [0, 1].
///
/// The target is floored at 1 so a zero target never divides by zero.
pub fn progress(current_kcal: u64, target_kcal: u32) -> f64 {
    let target = target_kcal.max(1) as f64;
    (current_kcal as f64 / target).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    #[test]
    fn test_round_helpers() {
        assert_eq!(round1(18.449), 18.4);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round2(24.221), 24.22);
    }

    #[test]
    fn test_bmi_zero_height_sentinel() {
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
        assert_eq!(calculate_bmi(70.0, 170.0), 24.22);
    }

    #[test]
    fn test_female_offset() {
        let profile = Profile {
            weight_kg: 60.0,
            height_cm: 165.0,
            age: 30,
            gender: Gender::Female,
            activity: ActivityLevel::ModeratelyActive,
        };
        // 600 + 1031.25 - 150 - 161 = 1320.25
        assert_eq!(calculate_bmr(&profile), 1320.25);
        // 1320.25 * 1.55 = 2046.3875
        assert_eq!(daily_calorie_target(&profile), 2046);
    }

    #[test]
    fn test_progress_zero_target_guard() {
        assert_eq!(progress(0, 0), 0.0);
        assert_eq!(progress(5, 0), 1.0);
    }

    #[test]
    fn test_water_goal() {
        assert_eq!(water_goal_litres(70.0), 3.5);
        assert_eq!(water_goal_litres(63.0), 3.15);
    }
}
