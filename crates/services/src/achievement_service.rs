use std::sync::Arc;

use artlearn_core::model::Achievement;

use crate::error::AchievementServiceError;
use crate::gateway::RemoteGateway;
use crate::session_store::SessionStore;

#[derive(Clone)]
pub struct AchievementService {
    gateway: Arc<dyn RemoteGateway>,
    session: SessionStore,
}

impl AchievementService {
    #[must_use]
    pub fn new(gateway: Arc<dyn RemoteGateway>, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// Achievements with unlock flags for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AchievementServiceError::NotSignedIn` when no session exists.
    /// Returns `AchievementServiceError::Gateway` if the achievements service fails.
    pub async fn list_achievements(&self) -> Result<Vec<Achievement>, AchievementServiceError> {
        let user = self
            .session
            .get()
            .await
            .ok_or(AchievementServiceError::NotSignedIn)?;
        Ok(self.gateway.list_achievements(user.id).await?)
    }
}
