//! Collection discovery and expansion.
//!
//! This module provides:
//! - The `CollectionsApi` seam over the discovery API
//! - Cursor-driven enumeration of a channel's collections
//! - Expansion of collections into ordered video URL lists

pub mod enumerate;
pub mod expand;
pub mod index;
pub mod model;

use async_trait::async_trait;

use crate::error::Result;

pub use enumerate::enumerate_collections;
pub use expand::expand_collections;
pub use index::{CollectionEntry, CollectionsIndex};
pub use model::{video_url, Channel, Collection, CollectionItem, CollectionsPage, Video, VIDEO_URL_BASE};

/// Discovery API surface the pipeline depends on.
///
/// Implemented by `TwitchApi`; tests substitute mock implementations.
#[async_trait]
pub trait CollectionsApi {
    /// Resolve a channel by name via the search endpoint.
    async fn search_channel(&self, query: &str) -> Result<Channel>;

    /// Fetch one page of a channel's collections listing.
    async fn collections_page(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<CollectionsPage>;

    /// Fetch a single collection's metadata by id.
    async fn collection(&self, collection_id: &str) -> Result<Collection>;

    /// Fetch a collection's complete member item list, in order.
    async fn collection_items(&self, collection_id: &str) -> Result<Vec<CollectionItem>>;
}
