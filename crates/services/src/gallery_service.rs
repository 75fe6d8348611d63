use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use artlearn_core::model::{GalleryItem, UploadDraft, UploadReceipt};

use crate::error::GalleryServiceError;
use crate::gateway::{GalleryUploadRequest, RemoteGateway};
use crate::session_store::SessionStore;

/// Community gallery feed and uploads.
#[derive(Clone)]
pub struct GalleryService {
    gateway: Arc<dyn RemoteGateway>,
    session: SessionStore,
}

impl GalleryService {
    #[must_use]
    pub fn new(gateway: Arc<dyn RemoteGateway>, session: SessionStore) -> Self {
        Self { gateway, session }
    }

    /// # Errors
    ///
    /// Returns `GalleryServiceError::Gateway` if the gallery service fails.
    pub async fn list_gallery(&self) -> Result<Vec<GalleryItem>, GalleryServiceError> {
        Ok(self.gateway.list_gallery().await?)
    }

    /// Validate the upload form, encode the image and post it.
    ///
    /// The image bytes must already be read; encoding happens before the
    /// request body is assembled.
    ///
    /// # Errors
    ///
    /// Returns `GalleryServiceError::Validation` when the title or image is missing.
    /// Returns `GalleryServiceError::NotSignedIn` when no session exists.
    /// Returns `GalleryServiceError::Gateway` if the gallery service rejects the upload.
    pub async fn upload(&self, draft: UploadDraft) -> Result<UploadReceipt, GalleryServiceError> {
        let upload = draft.validate()?;
        let user = self
            .session
            .get()
            .await
            .ok_or(GalleryServiceError::NotSignedIn)?;
        let request = GalleryUploadRequest {
            user_id: user.id,
            title: upload.title().to_owned(),
            description: upload.description().to_owned(),
            image: STANDARD.encode(upload.image()),
        };
        let receipt = self.gateway.upload_gallery_item(&request).await?;
        tracing::info!(item_id = %receipt.id, bytes = upload.image().len(), "gallery item uploaded");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayOp, InMemoryGateway};
    use artlearn_core::model::{ProfileDraft, UploadError};
    use storage::repository::InMemoryRepository;

    async fn signed_in() -> (GalleryService, InMemoryGateway) {
        let gateway = InMemoryGateway::new();
        let session = SessionStore::new(Arc::new(InMemoryRepository::new()));
        let user = gateway
            .create_user(&ProfileDraft::new("Ana", "ana@x.com").validate().unwrap())
            .await
            .unwrap();
        session.set(&user).await.unwrap();
        (GalleryService::new(Arc::new(gateway.clone()), session), gateway)
    }

    #[tokio::test]
    async fn missing_title_is_rejected_locally() {
        let (service, gateway) = signed_in().await;
        let err = service
            .upload(UploadDraft {
                title: "   ".into(),
                description: String::new(),
                image: vec![1, 2, 3],
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GalleryServiceError::Validation(UploadError::MissingTitle)
        ));
        assert_eq!(gateway.call_count(GatewayOp::UploadGalleryItem), 0);
    }

    #[tokio::test]
    async fn upload_appears_first_in_feed() {
        let (service, _gateway) = signed_in().await;
        let receipt = service
            .upload(UploadDraft {
                title: "Sunset".into(),
                description: String::new(),
                image: b"\x89PNG".to_vec(),
            })
            .await
            .unwrap();
        let feed = service.list_gallery().await.unwrap();
        assert_eq!(feed[0].id, receipt.id);
        assert_eq!(feed[0].title.as_deref(), Some("Sunset"));
        assert_eq!(feed[0].author, "Ana");
    }

    #[tokio::test]
    async fn upload_without_session_is_rejected() {
        let gateway = InMemoryGateway::new();
        let session = SessionStore::new(Arc::new(InMemoryRepository::new()));
        let service = GalleryService::new(Arc::new(gateway), session);
        let err = service
            .upload(UploadDraft {
                title: "Sunset".into(),
                description: String::new(),
                image: vec![1],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GalleryServiceError::NotSignedIn));
    }
}
