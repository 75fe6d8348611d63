use std::sync::Arc;

use artlearn_core::ElapsedReport;
use artlearn_core::model::{
    COMPLETION_SCORE, Exercise, ExerciseCompletion, ExerciseCompletionResult, ExerciseId,
};

use crate::error::ExerciseServiceError;
use crate::gateway::RemoteGateway;
use crate::profile_service::ProfileService;
use crate::session_store::SessionStore;

/// Exercise catalogue and completion reporting.
#[derive(Clone)]
pub struct ExerciseService {
    gateway: Arc<dyn RemoteGateway>,
    session: SessionStore,
    profiles: ProfileService,
}

impl ExerciseService {
    #[must_use]
    pub fn new(
        gateway: Arc<dyn RemoteGateway>,
        session: SessionStore,
        profiles: ProfileService,
    ) -> Self {
        Self {
            gateway,
            session,
            profiles,
        }
    }

    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Gateway` if the exercises service fails.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, ExerciseServiceError> {
        Ok(self.gateway.list_exercises().await?)
    }

    /// Look up one exercise from the catalogue. There is no per-id endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Gateway` if the exercises service fails.
    pub async fn find_exercise(
        &self,
        id: ExerciseId,
    ) -> Result<Option<Exercise>, ExerciseServiceError> {
        let exercises = self.gateway.list_exercises().await?;
        Ok(exercises.into_iter().find(|exercise| exercise.id == id))
    }

    /// Report a finished exercise, then refresh the stored profile.
    ///
    /// A failed profile refresh is logged and does not fail the completion.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::NotSignedIn` without calling out when no session exists.
    /// Returns `ExerciseServiceError::Gateway` if the exercises service rejects the report.
    pub async fn complete_exercise(
        &self,
        exercise_id: ExerciseId,
        report: ElapsedReport,
    ) -> Result<ExerciseCompletionResult, ExerciseServiceError> {
        let user = self
            .session
            .get()
            .await
            .ok_or(ExerciseServiceError::NotSignedIn)?;
        let completion = ExerciseCompletion {
            user_id: user.id,
            exercise_id,
            time_spent: report.minutes_rounded(),
            score: COMPLETION_SCORE,
        };
        let result = self.gateway.complete_exercise(&completion).await?;
        tracing::info!(
            %exercise_id,
            time_spent = completion.time_spent,
            xp_earned = result.xp_earned,
            "exercise completed"
        );

        if let Err(err) = self.profiles.refresh().await {
            tracing::warn!(error = %err, "profile refresh after exercise failed");
        }
        Ok(result)
    }
}
