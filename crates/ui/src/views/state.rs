use dioxus::prelude::*;
use services::{
    AchievementServiceError, ExerciseServiceError, GalleryServiceError, GatewayError,
    LessonServiceError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    NotSignedIn,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::NotFound => "We couldn't find that.",
            Self::NotSignedIn => "Sign in to keep track of your progress.",
        }
    }
}

impl From<&GatewayError> for ViewError {
    fn from(err: &GatewayError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::Unknown
        }
    }
}

impl From<LessonServiceError> for ViewError {
    fn from(err: LessonServiceError) -> Self {
        match err {
            LessonServiceError::NotSignedIn => Self::NotSignedIn,
            LessonServiceError::Gateway(ref gateway) => Self::from(gateway),
            _ => Self::Unknown,
        }
    }
}

impl From<ExerciseServiceError> for ViewError {
    fn from(err: ExerciseServiceError) -> Self {
        match err {
            ExerciseServiceError::NotSignedIn => Self::NotSignedIn,
            ExerciseServiceError::Gateway(ref gateway) => Self::from(gateway),
            _ => Self::Unknown,
        }
    }
}

impl From<AchievementServiceError> for ViewError {
    fn from(err: AchievementServiceError) -> Self {
        match err {
            AchievementServiceError::NotSignedIn => Self::NotSignedIn,
            AchievementServiceError::Gateway(ref gateway) => Self::from(gateway),
            _ => Self::Unknown,
        }
    }
}

impl From<GalleryServiceError> for ViewError {
    fn from(err: GalleryServiceError) -> Self {
        match err {
            GalleryServiceError::NotSignedIn => Self::NotSignedIn,
            GalleryServiceError::Gateway(ref gateway) => Self::from(gateway),
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
