mod achievement;
mod endpoints;
mod exercise;
mod gallery;
mod ids;
mod lesson;
pub mod timestamp;
mod user;

pub use ids::{AchievementId, ExerciseId, GalleryItemId, LessonId, ParseIdError, UserId};

pub use achievement::{Achievement, UnlockedAchievement, unlocked_count};
pub use endpoints::{Endpoints, EndpointsDraft, EndpointsError};
pub use exercise::{COMPLETION_SCORE, Exercise, ExerciseCompletion, ExerciseCompletionResult};
pub use gallery::{GalleryItem, GalleryUpload, UploadDraft, UploadError, UploadReceipt};
pub use lesson::{
    Lesson, LessonCompletion, LessonCompletionResult, LessonProgress, is_lesson_completed,
    segment_paragraphs,
};
pub use user::{NewProfile, ProfileDraft, ProfileError, User, author_initial};
