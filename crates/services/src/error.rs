//! Shared error types for the services crate.

use thiserror::Error;

use artlearn_core::model::{EndpointsError, ProfileError, UploadError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Failure of a single request to a remote service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus(status) if *status == reqwest::StatusCode::NOT_FOUND)
    }
}

/// Errors emitted by `SessionStore` writes. Reads never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("no active profile")]
    NotSignedIn,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `ExerciseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExerciseServiceError {
    #[error("no active profile")]
    NotSignedIn,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `AchievementService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AchievementServiceError {
    #[error("no active profile")]
    NotSignedIn,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `GalleryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GalleryServiceError {
    #[error(transparent)]
    Validation(#[from] UploadError),
    #[error("no active profile")]
    NotSignedIn,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Endpoints(#[from] EndpointsError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
