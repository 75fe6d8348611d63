use serde::{Deserialize, Serialize};

use crate::model::achievement::UnlockedAchievement;
use crate::model::ids::{ExerciseId, UserId};

/// Score reported for every finished exercise.
pub const COMPLETION_SCORE: u32 = 100;

/// Timed drawing exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub time_minutes: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Exercise {
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.time_minutes.saturating_mul(60)
    }
}

/// Request body reporting a finished exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseCompletion {
    pub user_id: UserId,
    pub exercise_id: ExerciseId,
    /// Whole minutes spent, rounded to the nearest minute.
    pub time_spent: u32,
    pub score: u32,
}

/// Server reply to an exercise completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCompletionResult {
    #[serde(default)]
    pub id: Option<u64>,
    pub xp_earned: u64,
    pub total_xp: u64,
    #[serde(default)]
    pub new_achievements: Vec<UnlockedAchievement>,
}
