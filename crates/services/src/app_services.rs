use std::sync::Arc;

use storage::repository::Storage;

use crate::achievement_service::AchievementService;
use crate::error::AppServicesError;
use crate::exercise_service::ExerciseService;
use crate::gallery_service::GalleryService;
use crate::gateway::{GatewayConfig, HttpGateway, RemoteGateway};
use crate::lesson_service::LessonService;
use crate::profile_service::ProfileService;
use crate::session_store::SessionStore;
use crate::tips_service::TipsService;

/// Assembles app-facing services around one gateway and one session slot.
#[derive(Clone)]
pub struct AppServices {
    session: SessionStore,
    profiles: Arc<ProfileService>,
    lessons: Arc<LessonService>,
    exercises: Arc<ExerciseService>,
    achievements: Arc<AchievementService>,
    gallery: Arc<GalleryService>,
    tips: Arc<TipsService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, gateway: Arc<dyn RemoteGateway>) -> Self {
        let session = SessionStore::new(Arc::clone(&storage.local));
        let profiles = ProfileService::new(Arc::clone(&gateway), session.clone());
        let lessons = LessonService::new(Arc::clone(&gateway), session.clone());
        let exercises =
            ExerciseService::new(Arc::clone(&gateway), session.clone(), profiles.clone());
        let achievements = AchievementService::new(Arc::clone(&gateway), session.clone());
        let gallery = GalleryService::new(gateway, session.clone());

        Self {
            session,
            profiles: Arc::new(profiles),
            lessons: Arc::new(lessons),
            exercises: Arc::new(exercises),
            achievements: Arc::new(achievements),
            gallery: Arc::new(gallery),
            tips: Arc::new(TipsService::default()),
        }
    }

    /// Build services backed by `SQLite` storage and the HTTP gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or HTTP client setup fails.
    pub async fn new_sqlite(db_url: &str, config: GatewayConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let gateway: Arc<dyn RemoteGateway> = Arc::new(HttpGateway::new(config)?);
        Ok(Self::new(&storage, gateway))
    }

    #[must_use]
    pub fn session(&self) -> SessionStore {
        self.session.clone()
    }

    #[must_use]
    pub fn profiles(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profiles)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn exercises(&self) -> Arc<ExerciseService> {
        Arc::clone(&self.exercises)
    }

    #[must_use]
    pub fn achievements(&self) -> Arc<AchievementService> {
        Arc::clone(&self.achievements)
    }

    #[must_use]
    pub fn gallery(&self) -> Arc<GalleryService> {
        Arc::clone(&self.gallery)
    }

    #[must_use]
    pub fn tips(&self) -> Arc<TipsService> {
        Arc::clone(&self.tips)
    }
}
