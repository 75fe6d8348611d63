use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use artlearn_core::model::{
    Achievement, Endpoints, Exercise, ExerciseCompletion, ExerciseCompletionResult, GalleryItem,
    Lesson, LessonCompletion, LessonCompletionResult, LessonId, LessonProgress, NewProfile,
    UploadReceipt, User, UserId,
};

use super::{GalleryUploadRequest, GatewayConfig, RemoteGateway};
use crate::error::GatewayError;

/// `reqwest`-backed gateway talking JSON to the configured endpoints.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    endpoints: Endpoints,
}

impl HttpGateway {
    /// # Errors
    ///
    /// Returns `GatewayError::Http` if the HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoints: config.endpoints,
        })
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        tracing::debug!(method = "GET", %url, "gateway request");
        let response = self.client.get(url.clone()).send().await.map_err(|err| {
            tracing::warn!(method = "GET", %url, error = %err, "gateway transport error");
            GatewayError::from(err)
        })?;
        read_json(response, "GET", &url).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(method = "POST", %url, "gateway request");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(method = "POST", %url, error = %err, "gateway transport error");
                GatewayError::from(err)
            })?;
        read_json(response, "POST", &url).await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    method: &'static str,
    url: &Url,
) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(method, %url, %status, "gateway request rejected");
        return Err(GatewayError::HttpStatus(status));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| {
        tracing::warn!(method, %url, error = %err, "gateway response did not decode");
        GatewayError::Decode(err)
    })
}

fn with_query(base: &Url, pairs: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    url
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn create_user(&self, profile: &NewProfile) -> Result<User, GatewayError> {
        self.post_json(self.endpoints.users().clone(), profile).await
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, GatewayError> {
        let url = with_query(self.endpoints.users(), &[("id", id.to_string())]);
        self.get_json(url).await
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>, GatewayError> {
        self.get_json(self.endpoints.lessons().clone()).await
    }

    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, GatewayError> {
        let url = with_query(self.endpoints.lessons(), &[("id", id.to_string())]);
        self.get_json(url).await
    }

    async fn list_exercises(&self) -> Result<Vec<Exercise>, GatewayError> {
        self.get_json(self.endpoints.exercises().clone()).await
    }

    async fn complete_exercise(
        &self,
        completion: &ExerciseCompletion,
    ) -> Result<ExerciseCompletionResult, GatewayError> {
        self.post_json(self.endpoints.exercises().clone(), completion)
            .await
    }

    async fn list_achievements(&self, user_id: UserId) -> Result<Vec<Achievement>, GatewayError> {
        let url = with_query(
            self.endpoints.achievements(),
            &[
                ("user_id", user_id.to_string()),
                ("action", "achievements".to_string()),
            ],
        );
        self.get_json(url).await
    }

    async fn list_progress(&self, user_id: UserId) -> Result<Vec<LessonProgress>, GatewayError> {
        let url = with_query(self.endpoints.progress(), &[("user_id", user_id.to_string())]);
        self.get_json(url).await
    }

    async fn complete_lesson(
        &self,
        completion: &LessonCompletion,
    ) -> Result<LessonCompletionResult, GatewayError> {
        self.post_json(self.endpoints.progress().clone(), completion)
            .await
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, GatewayError> {
        self.get_json(self.endpoints.gallery().clone()).await
    }

    async fn upload_gallery_item(
        &self,
        request: &GalleryUploadRequest,
    ) -> Result<UploadReceipt, GatewayError> {
        self.post_json(self.endpoints.gallery().clone(), request)
            .await
    }
}
