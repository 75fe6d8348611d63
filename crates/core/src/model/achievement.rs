use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ids::AchievementId;
use crate::model::timestamp;

/// Achievement definition with the per-user unlock flag computed server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirement_type: Option<String>,
    #[serde(default)]
    pub requirement_value: Option<i64>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub unlocked_at: Option<NaiveDateTime>,
}

/// Achievement reported as newly unlocked by a completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub id: AchievementId,
    pub name: String,
}

/// Count of unlocked achievements in a list.
#[must_use]
pub fn unlocked_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.unlocked).count()
}
