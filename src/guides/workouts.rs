use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkoutLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl WorkoutLevel {
    pub const ALL: [WorkoutLevel; 3] = [
        WorkoutLevel::Beginner,
        WorkoutLevel::Intermediate,
        WorkoutLevel::Advanced,
    ];
}

impl fmt::Display for WorkoutLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkoutLevel::Beginner => "Beginner",
            WorkoutLevel::Intermediate => "Intermediate",
            WorkoutLevel::Advanced => "Advanced",
        };
        write!(f, "{}", name)
    }
}

/// A static training template: one day's blocks plus a Mon..Sun split.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutPlan {
    pub daily_template: [(&'static str, &'static str); 4],
    pub weekly_split: [(&'static str, &'static str); 7],
}

/// The template for a level.
pub fn workout_plan(level: WorkoutLevel) -> WorkoutPlan {
    match level {
        WorkoutLevel::Beginner => WorkoutPlan {
            daily_template: [
                ("Warm-up", "5–8 min brisk walk or easy cycle + dynamic stretches"),
                (
                    "Strength (3x/week)",
                    "Push-ups 3×8, Bodyweight Squats 3×12, Glute Bridge 3×12, Plank 3×30s",
                ),
                ("Cardio (2–3x/week)", "15–20 min brisk walking / cycling"),
                (
                    "Cool-down",
                    "5 min easy stretching (hamstrings, quads, calves, shoulders)",
                ),
            ],
            weekly_split: [
                ("Mon", "Full-body strength"),
                ("Tue", "Cardio + mobility"),
                ("Wed", "Rest / walk"),
                ("Thu", "Full-body strength"),
                ("Fri", "Cardio"),
                ("Sat", "Full-body strength (light)"),
                ("Sun", "Rest / stretching"),
            ],
        },
        WorkoutLevel::Intermediate => WorkoutPlan {
            daily_template: [
                ("Warm-up", "8–10 min jog + mobility (hips, shoulders)"),
                (
                    "Strength (4x/week)",
                    "Pull-ups 3×6–8, Lunges 3×12/leg, Bench/Push-ups 3×10, Plank 3×60s",
                ),
                (
                    "Cardio (2–3x/week)",
                    "20–30 min run/cycle or intervals (6×1 min fast/1 min easy)",
                ),
                ("Cool-down", "8–10 min stretching or yoga flow"),
            ],
            weekly_split: [
                ("Mon", "Upper Strength (push/pull)"),
                ("Tue", "Cardio (intervals)"),
                ("Wed", "Lower Strength"),
                ("Thu", "Active recovery / yoga"),
                ("Fri", "Full-body Strength"),
                ("Sat", "Cardio (steady)"),
                ("Sun", "Rest"),
            ],
        },
        WorkoutLevel::Advanced => WorkoutPlan {
            daily_template: [
                ("Warm-up", "10 min HIIT warm-up + activation"),
                (
                    "Strength (4–5x/week)",
                    "Deadlift 4×6, Bench 4×6–8, Row 4×8, Bulgarian Split Squat 3×10/leg",
                ),
                (
                    "Cardio (3x/week)",
                    "30–40 min run/cycle or swim; OR HIIT 10×1 min hard / 1 min easy",
                ),
                ("Cool-down", "10–12 min deep stretching + breathing"),
            ],
            weekly_split: [
                ("Mon", "Push (chest/shoulders/triceps)"),
                ("Tue", "Pull (back/biceps)"),
                ("Wed", "Legs"),
                ("Thu", "Cardio / conditioning"),
                ("Fri", "Full-body Strength"),
                ("Sat", "Endurance (long easy run/cycle)"),
                ("Sun", "Rest"),
            ],
        },
    }
}

/// Blocks tracked by the daily checklist.
pub const CHECKLIST_BLOCKS: [&str; 4] = ["Warm-up", "Strength", "Cardio", "Cool-down"];

/// Today's workout checklist.
#[derive(Debug, Clone, Default)]
pub struct WorkoutChecklist {
    done: [bool; 4],
}

impl WorkoutChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark exactly the blocks at `indices` as done. Out-of-range indices are ignored.
    pub fn set_completed(&mut self, indices: &[usize]) {
        self.done = [false; 4];
        for &i in indices {
            if let Some(slot) = self.done.get_mut(i) {
                *slot = true;
            }
        }
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.done.get(index).copied().unwrap_or(false)
    }

    pub fn completed(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    pub fn fraction(&self) -> f64 {
        self.completed() as f64 / CHECKLIST_BLOCKS.len() as f64
    }
}
