//! Discovery API wire types.
//!
//! Explicit record shapes for everything crossing the API boundary,
//! converted to the domain entities immediately after fetch.

use serde::{Deserialize, Deserializer};

use crate::collections::{Channel, Collection, CollectionItem, CollectionsPage};

/// Channel search response: `GET search/channels`.
#[derive(Debug, Deserialize)]
pub struct ChannelSearchPayload {
    #[serde(default)]
    pub channels: Vec<ChannelPayload>,
}

/// A channel object as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelPayload {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

impl From<ChannelPayload> for Channel {
    fn from(payload: ChannelPayload) -> Self {
        Channel {
            id: payload.id,
            name: payload.name,
        }
    }
}

/// One page of a channel's collections listing.
#[derive(Debug, Deserialize)]
pub struct CollectionsPagePayload {
    #[serde(default)]
    pub collections: Vec<CollectionPayload>,
    #[serde(rename = "_cursor")]
    pub cursor: Option<String>,
}

impl From<CollectionsPagePayload> for CollectionsPage {
    fn from(payload: CollectionsPagePayload) -> Self {
        // An empty cursor signals the end of results, same as a null one.
        let cursor = payload.cursor.filter(|c| !c.is_empty());
        CollectionsPage {
            collections: payload.collections.into_iter().map(Into::into).collect(),
            cursor,
        }
    }
}

/// A collection object as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPayload {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub owner: CollectionOwnerPayload,
    #[serde(default)]
    pub items_count: u64,
}

/// The owning channel embedded in a collection object.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionOwnerPayload {
    pub name: String,
}

impl From<CollectionPayload> for Collection {
    fn from(payload: CollectionPayload) -> Self {
        Collection {
            id: payload.id,
            title: payload.title,
            owner_name: payload.owner.name,
            items_count: payload.items_count,
        }
    }
}

/// Collection items response: `GET collections/{id}/items`.
#[derive(Debug, Deserialize)]
pub struct CollectionItemsPayload {
    #[serde(default)]
    pub items: Vec<CollectionItemPayload>,
}

/// A collection member item.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionItemPayload {
    pub item_id: String,
}

impl From<CollectionItemPayload> for CollectionItem {
    fn from(payload: CollectionItemPayload) -> Self {
        CollectionItem {
            item_id: payload.item_id,
        }
    }
}

/// Ids arrive as either JSON strings or numbers depending on the endpoint.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => Ok(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_from_number() {
        let payload: ChannelPayload =
            serde_json::from_str(r#"{"_id": 44322889, "name": "somechannel"}"#).unwrap();
        assert_eq!(payload.id, "44322889");
    }

    #[test]
    fn test_channel_id_from_string() {
        let payload: ChannelPayload =
            serde_json::from_str(r#"{"_id": "44322889", "name": "somechannel"}"#).unwrap();
        assert_eq!(payload.id, "44322889");
    }

    #[test]
    fn test_collections_page_deserializes() {
        let json = r#"{
            "collections": [
                {
                    "_id": "myIbIFkZphQSbQ",
                    "title": "Highlights",
                    "owner": {"name": "somechannel"},
                    "items_count": 3
                }
            ],
            "_cursor": "MTU="
        }"#;

        let page: CollectionsPage =
            serde_json::from_str::<CollectionsPagePayload>(json).unwrap().into();

        assert_eq!(page.cursor.as_deref(), Some("MTU="));
        assert_eq!(page.collections.len(), 1);

        let collection = &page.collections[0];
        assert_eq!(collection.id, "myIbIFkZphQSbQ");
        assert_eq!(collection.title, "Highlights");
        assert_eq!(collection.owner_name, "somechannel");
        assert_eq!(collection.items_count, 3);
    }

    #[test]
    fn test_null_cursor_ends_listing() {
        let page: CollectionsPage =
            serde_json::from_str::<CollectionsPagePayload>(r#"{"collections": [], "_cursor": null}"#)
                .unwrap()
                .into();
        assert!(page.cursor.is_none());
    }

    #[test]
    fn test_empty_cursor_normalized_to_none() {
        let page: CollectionsPage =
            serde_json::from_str::<CollectionsPagePayload>(r#"{"collections": [], "_cursor": ""}"#)
                .unwrap()
                .into();
        assert!(page.cursor.is_none());
    }

    #[test]
    fn test_items_deserialize_in_order() {
        let json = r#"{"items": [{"item_id": "86190762"}, {"item_id": "86190763"}]}"#;
        let payload: CollectionItemsPayload = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = payload.items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(ids, vec!["86190762", "86190763"]);
    }
}
