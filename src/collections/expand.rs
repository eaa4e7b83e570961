//! Expansion of collections into ordered video URL lists.

use crate::collections::index::CollectionsIndex;
use crate::collections::model::{video_url, Collection, Video};
use crate::collections::CollectionsApi;
use crate::error::Result;
use crate::output::print_info;

/// Expand collections into a `CollectionsIndex`.
///
/// For each collection the complete member item list is fetched; every item
/// gets its 1-based ordinal from the returned order and a canonical video
/// URL derived from its item id. The reported total video count is advisory
/// and not reconciled against the fetched lists; with `verify_item_counts`
/// a mismatch is logged as a warning, never an error.
pub async fn expand_collections<A>(
    api: &A,
    collections: Vec<Collection>,
    verify_item_counts: bool,
) -> Result<CollectionsIndex>
where
    A: CollectionsApi + ?Sized,
{
    let mut index = CollectionsIndex::new();
    let mut video_count: u64 = 0;

    for collection in collections {
        let items = api.collection_items(&collection.id).await?;

        if verify_item_counts && items.len() as u64 != collection.items_count {
            tracing::warn!(
                "Collection '{}' reports {} items but returned {}",
                collection.title,
                collection.items_count,
                items.len()
            );
        }

        let videos: Vec<Video> = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Video {
                url: video_url(&item.item_id),
                item_id: item.item_id,
                ordinal: i + 1,
            })
            .collect();

        video_count += collection.items_count;
        index.push(collection, videos);
    }

    print_info(&format!("Found a total of {} videos", video_count));

    Ok(index)
}
