use artlearn_core::model::{Exercise, ExerciseId};
use artlearn_core::{CountdownTimer, TimerState, format_clock};

use crate::vm::time_fmt::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseCardVm {
    pub id: ExerciseId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: String,
    pub points_label: String,
    pub time_label: String,
}

impl From<&Exercise> for ExerciseCardVm {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            title: exercise.title.clone(),
            description: exercise.description.clone(),
            icon: exercise.icon.clone(),
            difficulty: exercise.difficulty.clone(),
            points_label: format!("+{} XP", exercise.points),
            time_label: format_minutes(exercise.time_minutes),
        }
    }
}

#[must_use]
pub fn map_exercise_cards(exercises: &[Exercise]) -> Vec<ExerciseCardVm> {
    exercises.iter().map(ExerciseCardVm::from).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerControl {
    Start,
    Pause,
    Resume,
    Reset,
}

impl TimerControl {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Reset => "Reset",
        }
    }
}

/// Buttons shown for each timer state. Reset appears once any time has elapsed.
#[must_use]
pub fn timer_controls(state: TimerState, elapsed_secs: u32) -> &'static [TimerControl] {
    match state {
        TimerState::Idle => &[TimerControl::Start],
        TimerState::Running if elapsed_secs == 0 => &[TimerControl::Pause],
        TimerState::Running => &[TimerControl::Pause, TimerControl::Reset],
        TimerState::Paused => &[TimerControl::Resume, TimerControl::Reset],
        TimerState::Expired => &[TimerControl::Reset],
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimerVm {
    pub clock: String,
    pub percent: f64,
    pub state: TimerState,
    pub controls: &'static [TimerControl],
}

impl TimerVm {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }
}

impl From<&CountdownTimer> for TimerVm {
    fn from(timer: &CountdownTimer) -> Self {
        let state = timer.state();
        Self {
            clock: format_clock(timer.remaining_secs()),
            percent: timer.progress_percent(),
            state,
            controls: timer_controls(state, timer.elapsed_secs()),
        }
    }
}
