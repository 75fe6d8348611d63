use std::sync::Arc;

use services::{
    AchievementService, AppServices, ExerciseService, GalleryService, LessonService,
    ProfileService, SessionStore, TipsService,
};

pub trait UiApp: Send + Sync {
    fn session(&self) -> SessionStore;
    fn profiles(&self) -> Arc<ProfileService>;
    fn lessons(&self) -> Arc<LessonService>;
    fn exercises(&self) -> Arc<ExerciseService>;
    fn achievements(&self) -> Arc<AchievementService>;
    fn gallery(&self) -> Arc<GalleryService>;
    fn tips(&self) -> Arc<TipsService>;
}

impl UiApp for AppServices {
    fn session(&self) -> SessionStore {
        AppServices::session(self)
    }

    fn profiles(&self) -> Arc<ProfileService> {
        AppServices::profiles(self)
    }

    fn lessons(&self) -> Arc<LessonService> {
        AppServices::lessons(self)
    }

    fn exercises(&self) -> Arc<ExerciseService> {
        AppServices::exercises(self)
    }

    fn achievements(&self) -> Arc<AchievementService> {
        AppServices::achievements(self)
    }

    fn gallery(&self) -> Arc<GalleryService> {
        AppServices::gallery(self)
    }

    fn tips(&self) -> Arc<TipsService> {
        AppServices::tips(self)
    }
}

/// Services handed to every view through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    session: SessionStore,
    profiles: Arc<ProfileService>,
    lessons: Arc<LessonService>,
    exercises: Arc<ExerciseService>,
    achievements: Arc<AchievementService>,
    gallery: Arc<GalleryService>,
    tips: Arc<TipsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            profiles: app.profiles(),
            lessons: app.lessons(),
            exercises: app.exercises(),
            achievements: app.achievements(),
            gallery: app.gallery(),
            tips: app.tips(),
        }
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

// Provided by the composition root (`crates/app`) or the view test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
