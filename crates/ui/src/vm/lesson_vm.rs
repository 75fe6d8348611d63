use artlearn_core::model::{Lesson, LessonId, LessonProgress, is_lesson_completed};

use crate::vm::time_fmt::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: String,
    pub duration_label: String,
    pub completed: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn cta(&self) -> &'static str {
        if self.completed { "Repeat" } else { "Start" }
    }
}

#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson], progress: &[LessonProgress]) -> Vec<LessonCardVm> {
    lessons
        .iter()
        .map(|lesson| LessonCardVm {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            icon: lesson.icon.clone(),
            difficulty: lesson.difficulty.clone(),
            duration_label: format_minutes(lesson.duration),
            completed: is_lesson_completed(progress, lesson.id),
        })
        .collect()
}

/// Lesson page contents with the text already split into numbered paragraphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: String,
    pub duration_label: String,
    pub duration_minutes: u32,
    pub paragraphs: Vec<String>,
}

impl From<&Lesson> for LessonDetailVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            icon: lesson.icon.clone(),
            difficulty: lesson.difficulty.clone(),
            duration_label: format_minutes(lesson.duration),
            duration_minutes: lesson.duration,
            paragraphs: lesson.paragraphs(),
        }
    }
}
