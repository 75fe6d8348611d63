mod exercise_vm;
mod gallery_vm;
mod lesson_vm;
mod progress_vm;
mod time_fmt;

pub use exercise_vm::{
    ExerciseCardVm, TimerControl, TimerVm, map_exercise_cards, timer_controls,
};
pub use gallery_vm::{GalleryCardVm, map_gallery_cards};
pub use lesson_vm::{LessonCardVm, LessonDetailVm, map_lesson_cards};
pub use progress_vm::{AchievementBadgeVm, ProgressVm, build_progress, map_achievement_badges};
pub use time_fmt::{format_date, format_minutes};
