//! The collections index built by expansion and handed to the orchestrator.

use crate::collections::model::{Collection, Video};

/// One expanded collection with its ordered videos.
#[derive(Debug, Clone)]
pub struct CollectionEntry {
    pub collection: Collection,
    /// Videos in API-returned order. This order determines the numeric
    /// prefix used in output filenames and must not be re-sorted.
    pub videos: Vec<Video>,
}

/// Insertion-ordered mapping from collection to its expanded video list.
///
/// Built once per run and read-only afterwards; consumed by exactly one of
/// the save-urls or download paths.
#[derive(Debug, Clone, Default)]
pub struct CollectionsIndex {
    entries: Vec<CollectionEntry>,
}

impl CollectionsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expanded collection, keeping insertion order.
    pub fn push(&mut self, collection: Collection, videos: Vec<Video>) {
        self.entries.push(CollectionEntry { collection, videos });
    }

    /// Append another index's entries after this one's.
    pub fn extend(&mut self, other: CollectionsIndex) {
        self.entries.extend(other.entries);
    }

    /// Look up an entry by collection id.
    pub fn get(&self, collection_id: &str) -> Option<&CollectionEntry> {
        self.entries.iter().find(|e| e.collection.id == collection_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollectionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of videos across all entries.
    pub fn video_count(&self) -> usize {
        self.entries.iter().map(|e| e.videos.len()).sum()
    }
}

impl<'a> IntoIterator for &'a CollectionsIndex {
    type Item = &'a CollectionEntry;
    type IntoIter = std::slice::Iter<'a, CollectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::model::video_url;

    fn collection(id: &str, title: &str) -> Collection {
        Collection {
            id: id.to_string(),
            title: title.to_string(),
            owner_name: "someone".to_string(),
            items_count: 0,
        }
    }

    fn videos(ids: &[&str]) -> Vec<Video> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Video {
                item_id: id.to_string(),
                ordinal: i + 1,
                url: video_url(id),
            })
            .collect()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut index = CollectionsIndex::new();
        index.push(collection("c", "third"), videos(&["3"]));
        index.push(collection("a", "first"), videos(&["1"]));
        index.push(collection("b", "second"), videos(&["2"]));

        let titles: Vec<&str> = index.iter().map(|e| e.collection.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut index = CollectionsIndex::new();
        index.push(collection("abc", "Highlights"), videos(&["1", "2"]));

        assert_eq!(index.get("abc").unwrap().collection.title, "Highlights");
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut first = CollectionsIndex::new();
        first.push(collection("a", "first"), videos(&["1"]));

        let mut second = CollectionsIndex::new();
        second.push(collection("b", "second"), videos(&["2", "3"]));

        first.extend(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.video_count(), 3);
        assert_eq!(first.iter().last().unwrap().collection.id, "b");
    }

    #[test]
    fn test_empty_index() {
        let index = CollectionsIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.video_count(), 0);
    }
}
