use rand::Rng;
use rand::seq::SliceRandom;

pub const HEALTH_TIPS: [&str; 8] = [
    "Eat more vegetables and fruits daily",
    "Drink at least 2-3 liters of water",
    "Avoid junk food & sugary drinks",
    "Sleep 7-8 hours daily",
    "Exercise at least 30 minutes daily",
    "Take short breaks when sitting long hours",
    "Practice meditation or breathing exercises",
    "Complete your protein intake daily without fail",
];

/// Pick one tip to show at session start.
pub fn tip_of_the_day<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HEALTH_TIPS.choose(rng).copied().unwrap_or(HEALTH_TIPS[0])
}
