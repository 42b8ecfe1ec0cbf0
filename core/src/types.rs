//! Domain types for the feed.
//!
//! # Design
//! `FeedItem` is the value handed to callers. It is deliberately free of
//! serde attributes: the wire shape (`image` instead of `image_url`, the
//! `items` envelope) lives in the mapper's private DTOs, so renaming a JSON
//! key never ripples into caller code.

use url::Url;
use uuid::Uuid;

/// A single entry of the remote feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
