//! Remote Gateway: one async call per remote operation.
//!
//! Calls are single request/response exchanges with no retry. Any non-success
//! status, transport error or undecodable body surfaces as `GatewayError`.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use artlearn_core::model::{
    Achievement, EndpointsDraft, EndpointsError, Endpoints, Exercise, ExerciseCompletion,
    ExerciseCompletionResult, GalleryItem, Lesson, LessonCompletion, LessonCompletionResult,
    LessonId, LessonProgress, NewProfile, UploadReceipt, User, UserId,
};

use crate::error::GatewayError;

mod http;
mod memory;

pub use http::HttpGateway;
pub use memory::{GatewayOp, InMemoryGateway};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Wire body of a gallery upload. `image` is the base64-encoded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryUploadRequest {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// `POST /user {username, email}`.
    async fn create_user(&self, profile: &NewProfile) -> Result<User, GatewayError>;

    /// `GET /user?id=`.
    async fn fetch_user(&self, id: UserId) -> Result<User, GatewayError>;

    /// `GET /lessons`, ordered by `order_index`.
    async fn list_lessons(&self) -> Result<Vec<Lesson>, GatewayError>;

    /// `GET /lessons?id=`.
    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, GatewayError>;

    /// `GET /exercises`.
    async fn list_exercises(&self) -> Result<Vec<Exercise>, GatewayError>;

    /// `POST /exercises`.
    async fn complete_exercise(
        &self,
        completion: &ExerciseCompletion,
    ) -> Result<ExerciseCompletionResult, GatewayError>;

    /// `GET /achievements?user_id=&action=achievements`.
    async fn list_achievements(&self, user_id: UserId) -> Result<Vec<Achievement>, GatewayError>;

    /// `GET /progress?user_id=`.
    async fn list_progress(&self, user_id: UserId) -> Result<Vec<LessonProgress>, GatewayError>;

    /// `POST /progress`.
    async fn complete_lesson(
        &self,
        completion: &LessonCompletion,
    ) -> Result<LessonCompletionResult, GatewayError>;

    /// `GET /gallery`, newest first.
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, GatewayError>;

    /// `POST /gallery`.
    async fn upload_gallery_item(
        &self,
        request: &GalleryUploadRequest,
    ) -> Result<UploadReceipt, GatewayError>;
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Derive every endpoint from a single base URL.
    ///
    /// # Errors
    ///
    /// Returns `EndpointsError` if the base URL is invalid.
    pub fn from_base(base_url: impl Into<String>) -> Result<Self, EndpointsError> {
        Ok(Self::new(EndpointsDraft::new(base_url).validate()?))
    }

    /// Read endpoints from `ARTLEARN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `EndpointsError` if any configured URL is invalid.
    pub fn from_env() -> Result<Self, EndpointsError> {
        Self::from_env_with_base(None)
    }

    /// Like `from_env`, with `base_override` winning over `ARTLEARN_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointsError` if any configured URL is invalid.
    pub fn from_env_with_base(base_override: Option<String>) -> Result<Self, EndpointsError> {
        let base_url = base_override
            .or_else(|| env::var("ARTLEARN_API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let draft = EndpointsDraft {
            base_url,
            users: env::var("ARTLEARN_USERS_URL").ok(),
            lessons: env::var("ARTLEARN_LESSONS_URL").ok(),
            exercises: env::var("ARTLEARN_EXERCISES_URL").ok(),
            achievements: env::var("ARTLEARN_ACHIEVEMENTS_URL").ok(),
            progress: env::var("ARTLEARN_PROGRESS_URL").ok(),
            gallery: env::var("ARTLEARN_GALLERY_URL").ok(),
        };
        let timeout = env::var("ARTLEARN_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Ok(Self {
            endpoints: draft.validate()?,
            timeout,
        })
    }
}
