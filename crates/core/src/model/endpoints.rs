use thiserror::Error;
use url::Url;

/// Resolved URLs of the remote services the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    users: Url,
    lessons: Url,
    exercises: Url,
    achievements: Url,
    progress: Url,
    gallery: Url,
}

/// Raw endpoint configuration as read from flags or the environment.
///
/// Every resource defaults to `{base_url}/{resource}` unless overridden.
#[derive(Clone, Debug, Default)]
pub struct EndpointsDraft {
    pub base_url: String,
    pub users: Option<String>,
    pub lessons: Option<String>,
    pub exercises: Option<String>,
    pub achievements: Option<String>,
    pub progress: Option<String>,
    pub gallery: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndpointsError {
    #[error("invalid {resource} URL: {raw}")]
    InvalidUrl { resource: &'static str, raw: String },
}

impl EndpointsDraft {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validate and normalize the draft into usable endpoints.
    ///
    /// # Errors
    ///
    /// Returns `EndpointsError::InvalidUrl` if the base URL or any override cannot be parsed.
    pub fn validate(self) -> Result<Endpoints, EndpointsError> {
        let base = self.base_url.trim().trim_end_matches('/').to_string();
        let resolve = |resource: &'static str, path: &str, value: Option<String>| {
            let raw = normalize_optional(value).unwrap_or_else(|| format!("{base}/{path}"));
            Url::parse(&raw).map_err(|_| EndpointsError::InvalidUrl { resource, raw })
        };

        Ok(Endpoints {
            users: resolve("users", "user", self.users)?,
            lessons: resolve("lessons", "lessons", self.lessons)?,
            exercises: resolve("exercises", "exercises", self.exercises)?,
            achievements: resolve("achievements", "achievements", self.achievements)?,
            progress: resolve("progress", "progress", self.progress)?,
            gallery: resolve("gallery", "gallery", self.gallery)?,
        })
    }
}

impl Endpoints {
    #[must_use]
    pub fn users(&self) -> &Url {
        &self.users
    }

    #[must_use]
    pub fn lessons(&self) -> &Url {
        &self.lessons
    }

    #[must_use]
    pub fn exercises(&self) -> &Url {
        &self.exercises
    }

    #[must_use]
    pub fn achievements(&self) -> &Url {
        &self.achievements
    }

    #[must_use]
    pub fn progress(&self) -> &Url {
        &self.progress
    }

    #[must_use]
    pub fn gallery(&self) -> &Url {
        &self.gallery
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
