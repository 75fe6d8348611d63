use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::achievement::UnlockedAchievement;
use crate::model::ids::{LessonId, UserId};
use crate::model::timestamp;

const SENTENCE_DELIMITER: &str = ". ";

/// Read-only lesson as served by the lessons service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// Suggested reading time in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order_index: i32,
}

impl Lesson {
    /// Display paragraphs derived from `content`.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<String> {
        segment_paragraphs(&self.content)
    }
}

/// Split a content blob into sentence paragraphs.
///
/// Segments are cut on `". "`, trimmed, and blank segments dropped. Each
/// paragraph ends with terminal punctuation; a period is appended when the
/// segment lost it to the split.
#[must_use]
pub fn segment_paragraphs(content: &str) -> Vec<String> {
    content
        .split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.ends_with(['.', '!', '?', '…']) {
                segment.to_string()
            } else {
                format!("{segment}.")
            }
        })
        .collect()
}

/// Per-lesson completion state for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub lesson_id: LessonId,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Request body marking a lesson as finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonCompletion {
    pub user_id: UserId,
    pub lesson_id: LessonId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Server reply to a lesson completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCompletionResult {
    #[serde(default)]
    pub id: Option<u64>,
    pub xp_earned: u64,
    #[serde(default)]
    pub new_achievements: Vec<UnlockedAchievement>,
}

/// Whether `lesson_id` appears as completed in a progress list.
#[must_use]
pub fn is_lesson_completed(progress: &[LessonProgress], lesson_id: LessonId) -> bool {
    progress
        .iter()
        .any(|entry| entry.lesson_id == lesson_id && entry.completed)
}
