use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::UserId;

/// Profile snapshot returned by the users service.
///
/// The record is always replaced wholesale; the client never patches fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub total_xp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_lessons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_exercises: Option<u32>,
}

impl User {
    /// Single uppercase letter used as an avatar fallback.
    #[must_use]
    pub fn initial(&self) -> String {
        author_initial(&self.username)
    }
}

/// First character of a display name, uppercased, or `?` for empty names.
#[must_use]
pub fn author_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().collect())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("username is required")]
    MissingUsername,
    #[error("email is required")]
    MissingEmail,
}

/// Unvalidated sign-up form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub username: String,
    pub email: String,
}

/// Validated request body for profile creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    username: String,
    email: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` naming the first missing field.
    pub fn validate(self) -> Result<NewProfile, ProfileError> {
        let username = self.username.trim().to_string();
        if username.is_empty() {
            return Err(ProfileError::MissingUsername);
        }
        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ProfileError::MissingEmail);
        }
        Ok(NewProfile { username, email })
    }
}

impl NewProfile {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
