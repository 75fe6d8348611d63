use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{GalleryItemId, UserId};
use crate::model::timestamp;

/// Community post in the gallery feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: GalleryItemId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub author: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<NaiveDateTime>,
}

/// Reply to a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub id: GalleryItemId,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("title is required")]
    MissingTitle,
    #[error("an image file is required")]
    MissingImage,
}

/// Unvalidated upload form contents. `image` holds the raw file bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub image: Vec<u8>,
}

/// Upload ready to be encoded and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryUpload {
    title: String,
    description: String,
    image: Vec<u8>,
}

impl UploadDraft {
    /// # Errors
    ///
    /// Returns `UploadError` when the title is blank or no image bytes were read.
    pub fn validate(self) -> Result<GalleryUpload, UploadError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(UploadError::MissingTitle);
        }
        if self.image.is_empty() {
            return Err(UploadError::MissingImage);
        }
        Ok(GalleryUpload {
            title,
            description: self.description.trim().to_string(),
            image: self.image,
        })
    }
}

impl GalleryUpload {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image(&self) -> &[u8] {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_title_and_image() {
        let missing_title = UploadDraft {
            title: "  ".into(),
            description: String::new(),
            image: vec![1, 2, 3],
        };
        assert_eq!(missing_title.validate(), Err(UploadError::MissingTitle));

        let missing_image = UploadDraft {
            title: "Sunset".into(),
            description: String::new(),
            image: Vec::new(),
        };
        assert_eq!(missing_image.validate(), Err(UploadError::MissingImage));
    }

    #[test]
    fn validate_keeps_bytes() {
        let upload = UploadDraft {
            title: " Sunset ".into(),
            description: " warm tones ".into(),
            image: vec![0x89, 0x50],
        }
        .validate()
        .unwrap();
        assert_eq!(upload.title(), "Sunset");
        assert_eq!(upload.description(), "warm tones");
        assert_eq!(upload.image(), &[0x89, 0x50]);
    }

    #[test]
    fn gallery_item_parses_feed_entry() {
        let json = r#"{"id":4,"user_id":2,"author":"Maria","level":"Intermediate","title":"Eyes",
            "description":null,"image_url":"https://cdn.example/1.png","likes":312,"comments":24,
            "created_at":"2024-06-01T09:30:00.000001"}"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.likes, 312);
        assert!(item.created_at.is_some());
        assert_eq!(item.description, None);
    }
}
