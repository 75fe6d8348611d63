#![forbid(unsafe_code)]

pub mod achievement_service;
pub mod app_services;
pub mod error;
pub mod exercise_service;
pub mod gallery_service;
pub mod gateway;
pub mod lesson_service;
pub mod profile_service;
pub mod session_store;
pub mod tips_service;

pub use achievement_service::AchievementService;
pub use app_services::AppServices;
pub use error::{
    AchievementServiceError, AppServicesError, ExerciseServiceError, GalleryServiceError,
    GatewayError, LessonServiceError, ProfileServiceError, SessionStoreError,
};
pub use exercise_service::ExerciseService;
pub use gallery_service::GalleryService;
pub use gateway::{
    GalleryUploadRequest, GatewayConfig, GatewayOp, HttpGateway, InMemoryGateway, RemoteGateway,
};
pub use lesson_service::LessonService;
pub use profile_service::ProfileService;
pub use session_store::{SESSION_STORAGE_KEY, SessionStore};
pub use tips_service::TipsService;
