use artlearn_core::model::{GalleryItem, GalleryItemId, author_initial};

use crate::vm::time_fmt::format_date;

const UNTITLED: &str = "Untitled";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryCardVm {
    pub id: GalleryItemId,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub author_initial: String,
    pub level: String,
    pub likes: u32,
    pub comments: u32,
    pub image_url: Option<String>,
    pub posted: Option<String>,
}

impl From<&GalleryItem> for GalleryCardVm {
    fn from(item: &GalleryItem) -> Self {
        Self {
            id: item.id,
            title: item
                .title
                .clone()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            description: item.description.clone().filter(|text| !text.is_empty()),
            author: item.author.clone(),
            author_initial: author_initial(&item.author),
            level: item.level.clone(),
            likes: item.likes,
            comments: item.comments,
            image_url: item.image_url.clone(),
            posted: item.created_at.map(format_date),
        }
    }
}

#[must_use]
pub fn map_gallery_cards(items: &[GalleryItem]) -> Vec<GalleryCardVm> {
    items.iter().map(GalleryCardVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_title_and_initial() {
        let card = GalleryCardVm::from(&GalleryItem {
            id: GalleryItemId::new(2),
            user_id: None,
            author: "ivan K.".into(),
            level: "Advanced".into(),
            title: None,
            description: Some(String::new()),
            image_url: None,
            likes: 189,
            comments: 8,
            created_at: None,
        });
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.author_initial, "I");
        assert_eq!(card.description, None);
        assert_eq!(card.posted, None);
    }
}
