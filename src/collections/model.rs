//! Domain entities for channels, collections and videos.

/// Base URL videos are addressed under; item ids are appended verbatim.
pub const VIDEO_URL_BASE: &str = "https://www.twitch.tv/videos/";

/// A channel, resolved once per run via search-by-name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

/// A video collection owned by a channel. Enumerated read-only from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub owner_name: String,
    /// Item count as reported by the API. Advisory only; never reconciled
    /// against the actually fetched item list.
    pub items_count: u64,
}

/// A member item of a collection, as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub item_id: String,
}

/// A single video inside a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub item_id: String,
    /// 1-based position within the parent collection's API-returned order.
    pub ordinal: usize,
    pub url: String,
}

/// One page of a paginated collections listing.
#[derive(Debug, Clone)]
pub struct CollectionsPage {
    pub collections: Vec<Collection>,
    /// Opaque continuation token. `None` signals the end of results.
    pub cursor: Option<String>,
}

/// Derive the canonical URL for a video item id.
pub fn video_url(item_id: &str) -> String {
    format!("{}{}", VIDEO_URL_BASE, item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_url_concatenation() {
        assert_eq!(video_url("86190762"), "https://www.twitch.tv/videos/86190762");
    }
}
