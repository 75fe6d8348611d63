use std::sync::Arc;

use artlearn_core::model::{ProfileDraft, User};

use crate::error::ProfileServiceError;
use crate::gateway::RemoteGateway;
use crate::session_store::SessionStore;

/// Creates, refreshes and forgets the active profile.
#[derive(Clone)]
pub struct ProfileService {
    gateway: Arc<dyn RemoteGateway>,
    session: SessionStore,
}

impl ProfileService {
    #[must_use]
    pub fn new(gateway: Arc<dyn RemoteGateway>, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// Validate the form, create the profile remotely and store it as the session.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Validation` before any request when a field is blank.
    /// Returns `ProfileServiceError::Gateway` if the users service rejects the call;
    /// the session is left untouched.
    /// Returns `ProfileServiceError::Session` if the new profile cannot be stored.
    pub async fn create_profile(&self, draft: ProfileDraft) -> Result<User, ProfileServiceError> {
        let profile = draft.validate()?;
        let user = self.gateway.create_user(&profile).await?;
        self.session.set(&user).await?;
        Ok(user)
    }

    /// Re-fetch the stored profile and replace the session with the result.
    ///
    /// Returns `Ok(None)` when no session exists.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Gateway` if the fetch fails; the stored
    /// session is kept as it was.
    /// Returns `ProfileServiceError::Session` if the refreshed record cannot be stored.
    pub async fn refresh(&self) -> Result<Option<User>, ProfileServiceError> {
        let Some(current) = self.session.get().await else {
            return Ok(None);
        };
        let user = self.gateway.fetch_user(current.id).await?;
        self.session.set(&user).await?;
        Ok(Some(user))
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.get().await
    }

    /// # Errors
    ///
    /// Returns `ProfileServiceError::Session` if the slot cannot be cleared.
    pub async fn logout(&self) -> Result<(), ProfileServiceError> {
        self.session.clear().await?;
        Ok(())
    }
}
