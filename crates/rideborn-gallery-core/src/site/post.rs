use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::gallery::CardId;

/// Thumbnail image attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A CMS post. Each post renders as one gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    /// Rich-editor HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    pub fn card_id(&self) -> CardId {
        CardId::new(self.id.as_str())
    }
}

/// Paginated list response from the CMS API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostList<T> {
    pub contents: Vec<T>,
    pub total_count: u32,
    pub offset: u32,
    pub limit: u32,
}

/// The cards a gallery currently renders, in page order.
///
/// Deserializes from either a plain array of ids or a CMS list response:
///
/// ```json
/// ["post-1", "post-2"]
/// { "contents": [{ "id": "post-1", "title": "...", "slug": "..." }], "totalCount": 1, "offset": 0, "limit": 10 }
/// ```
///
/// Repeated ids keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSource {
    pub cards: Vec<CardId>,
}

impl CardSource {
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text).map_err(|e| CoreError::card_source(None, e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| CoreError::card_source(Some(path), e.to_string()))
    }

    pub fn into_cards(self) -> Vec<CardId> {
        self.cards
    }
}

impl<'de> Deserialize<'de> for CardSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Ids(Vec<CardId>),
            Posts(PostList<Post>),
        }
        let ids = match Raw::deserialize(deserializer)? {
            Raw::Ids(ids) => ids,
            Raw::Posts(list) => list.contents.iter().map(Post::card_id).collect(),
        };
        let mut seen = HashSet::with_capacity(ids.len());
        let cards = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        Ok(CardSource { cards })
    }
}
