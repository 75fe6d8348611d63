use std::sync::Arc;

use artlearn_core::model::{Lesson, LessonCompletion, LessonCompletionResult, LessonId, LessonProgress};

use crate::error::LessonServiceError;
use crate::gateway::RemoteGateway;
use crate::session_store::SessionStore;

/// Lesson catalogue and per-user lesson progress.
#[derive(Clone)]
pub struct LessonService {
    gateway: Arc<dyn RemoteGateway>,
    session: SessionStore,
}

impl LessonService {
    #[must_use]
    pub fn new(gateway: Arc<dyn RemoteGateway>, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Gateway` if the lessons service fails.
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, LessonServiceError> {
        Ok(self.gateway.list_lessons().await?)
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Gateway` if the lesson cannot be fetched;
    /// an unknown id surfaces as a `404` status.
    pub async fn get_lesson(&self, id: LessonId) -> Result<Lesson, LessonServiceError> {
        Ok(self.gateway.get_lesson(id).await?)
    }

    /// Progress of the signed-in user; empty when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Gateway` if the progress service fails.
    pub async fn list_progress(&self) -> Result<Vec<LessonProgress>, LessonServiceError> {
        let Some(user) = self.session.get().await else {
            return Ok(Vec::new());
        };
        Ok(self.gateway.list_progress(user.id).await?)
    }

    /// Mark `lesson_id` as finished for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::NotSignedIn` without calling out when no session exists.
    /// Returns `LessonServiceError::Gateway` if the progress service rejects the call.
    pub async fn complete_lesson(
        &self,
        lesson_id: LessonId,
        rating: Option<u8>,
    ) -> Result<LessonCompletionResult, LessonServiceError> {
        let user = self
            .session
            .get()
            .await
            .ok_or(LessonServiceError::NotSignedIn)?;
        let completion = LessonCompletion {
            user_id: user.id,
            lesson_id,
            rating,
        };
        let result = self.gateway.complete_lesson(&completion).await?;
        tracing::info!(
            %lesson_id,
            xp_earned = result.xp_earned,
            unlocked = result.new_achievements.len(),
            "lesson completed"
        );
        Ok(result)
    }
}
