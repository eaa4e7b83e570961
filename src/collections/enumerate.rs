//! Cursor-driven enumeration of a channel's collections.

use crate::collections::model::Collection;
use crate::collections::CollectionsApi;
use crate::error::Result;

/// Enumerate the complete ordered collection list for a channel.
///
/// Keeps requesting pages while the API returns a continuation cursor. Any
/// non-null cursor means more pages remain, regardless of how many items the
/// page itself carried. The result preserves API return order; zero
/// collections is a valid empty result.
pub async fn enumerate_collections<A>(api: &A, channel_id: &str) -> Result<Vec<Collection>>
where
    A: CollectionsApi + ?Sized,
{
    let mut page = api.collections_page(channel_id, None).await?;
    let mut collections = page.collections;

    while let Some(cursor) = page.cursor {
        page = api.collections_page(channel_id, Some(&cursor)).await?;
        collections.extend(page.collections);
    }

    Ok(collections)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::collections::model::{Channel, CollectionItem, CollectionsPage};

    /// Serves a fixed sequence of pages and counts fetch calls.
    struct PagedApi {
        pages: Vec<CollectionsPage>,
        calls: AtomicUsize,
    }

    impl PagedApi {
        fn new(pages: Vec<CollectionsPage>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CollectionsApi for PagedApi {
        async fn search_channel(&self, _query: &str) -> Result<Channel> {
            unimplemented!("not used by enumeration")
        }

        async fn collections_page(
            &self,
            _channel_id: &str,
            cursor: Option<&str>,
        ) -> Result<CollectionsPage> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n > 0 {
                assert_eq!(cursor, self.pages[n - 1].cursor.as_deref());
            } else {
                assert!(cursor.is_none());
            }
            Ok(self.pages[n].clone())
        }

        async fn collection(&self, _collection_id: &str) -> Result<Collection> {
            unimplemented!("not used by enumeration")
        }

        async fn collection_items(&self, _collection_id: &str) -> Result<Vec<CollectionItem>> {
            unimplemented!("not used by enumeration")
        }
    }

    fn collection(id: &str) -> Collection {
        Collection {
            id: id.to_string(),
            title: format!("collection {}", id),
            owner_name: "someone".to_string(),
            items_count: 0,
        }
    }

    fn page(ids: &[&str], cursor: Option<&str>) -> CollectionsPage {
        CollectionsPage {
            collections: ids.iter().map(|id| collection(id)).collect(),
            cursor: cursor.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_single_page_terminates() {
        let api = PagedApi::new(vec![page(&["a", "b"], None)]);

        let collections = enumerate_collections(&api, "123").await.unwrap();

        assert_eq!(api.call_count(), 1);
        let ids: Vec<&str> = collections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_chained_pages_concatenate_in_order() {
        let api = PagedApi::new(vec![
            page(&["a", "b"], Some("cur1")),
            page(&["c"], Some("cur2")),
            page(&["d", "e"], None),
        ]);

        let collections = enumerate_collections(&api, "123").await.unwrap();

        assert_eq!(api.call_count(), 3);
        let ids: Vec<&str> = collections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_empty_page_with_cursor_continues() {
        // A cursor means more pages remain even when the page itself is empty.
        let api = PagedApi::new(vec![
            page(&["a"], Some("cur1")),
            page(&[], Some("cur2")),
            page(&["b"], None),
        ]);

        let collections = enumerate_collections(&api, "123").await.unwrap();

        assert_eq!(api.call_count(), 3);
        assert_eq!(collections.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_collections_is_valid() {
        let api = PagedApi::new(vec![page(&[], None)]);

        let collections = enumerate_collections(&api, "123").await.unwrap();

        assert_eq!(api.call_count(), 1);
        assert!(collections.is_empty());
    }
}
