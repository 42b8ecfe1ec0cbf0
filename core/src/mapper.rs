//! Maps raw HTTP responses into feed items.
//!
//! # Design
//! The wire payload is an object with a single recognized key, `items`,
//! holding an ordered list of entries:
//!
//! ```json
//! {"items": [{"id": "…", "description": null, "location": "…", "image": "https://…"}]}
//! ```
//!
//! Decoding is fail-closed. One malformed entry (missing or unparseable `id`
//! or `image`) rejects the whole payload rather than being skipped. Unknown
//! keys are ignored at every level.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::LoadError;
use crate::types::FeedItem;

const OK_200: u16 = 200;

#[derive(Serialize, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Serialize, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

impl From<&FeedItem> for RemoteFeedItem {
    fn from(item: &FeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description.clone(),
            location: item.location.clone(),
            image: item.image_url.clone(),
        }
    }
}

/// Turn a status code and body into feed items.
///
/// Any status other than 200 is rejected before the body is looked at.
pub fn map(status: u16, body: &[u8]) -> Result<Vec<FeedItem>, LoadError> {
    if status != OK_200 {
        tracing::warn!(status, "unexpected status from feed server");
        return Err(LoadError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "feed payload failed to decode");
        LoadError::InvalidData
    })?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}

/// Encode feed items into the wire payload accepted by [`map`].
///
/// Fallible only because `serde_json::to_vec` is; these DTOs always serialize.
pub fn encode(items: &[FeedItem]) -> Result<Vec<u8>, serde_json::Error> {
    let root = Root {
        items: items.iter().map(RemoteFeedItem::from).collect(),
    };
    serde_json::to_vec(&root)
}
