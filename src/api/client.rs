//! Twitch discovery API HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response};

use crate::api::types::{
    ChannelSearchPayload, CollectionItemsPayload, CollectionPayload, CollectionsPagePayload,
};
use crate::collections::{Channel, Collection, CollectionItem, CollectionsApi, CollectionsPage};
use crate::error::{Error, Result};

/// Discovery API base URL.
const API_BASE: &str = "https://api.twitch.tv/kraken/";

/// Versioned accept header required by the API.
const ACCEPT_HEADER: &str = "application/vnd.twitchtv.v5+json";

/// Fixed page size for collection listing requests.
pub const PAGE_LIMIT: u32 = 100;

/// Twitch API client carrying the client-id and accept headers.
pub struct TwitchApi {
    client: Client,
}

impl TwitchApi {
    /// Create a new API client.
    pub fn new(client_id: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(
            "Client-ID",
            header::HeaderValue::from_str(client_id).map_err(|_| {
                Error::Config("client_id contains invalid header characters".into())
            })?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Make a GET request against the API.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", API_BASE, path);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("HTTP {} for {}: {}", status, path, body)));
        }

        Ok(response)
    }
}

#[async_trait]
impl CollectionsApi for TwitchApi {
    async fn search_channel(&self, query: &str) -> Result<Channel> {
        let response = self
            .get("search/channels", &[("query", query), ("limit", "1")])
            .await?;
        let text = response.text().await?;

        let payload: ChannelSearchPayload = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse channel search: {} - Response: {}",
                e, text
            ))
        })?;

        payload
            .channels
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| Error::ChannelNotFound(query.to_string()))
    }

    async fn collections_page(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<CollectionsPage> {
        let path = format!("channels/{}/collections", channel_id);
        let limit = PAGE_LIMIT.to_string();
        let mut query: Vec<(&str, &str)> = vec![("limit", limit.as_str())];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }

        let response = self.get(&path, &query).await?;
        let text = response.text().await?;

        let payload: CollectionsPagePayload = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse collections page: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(payload.into())
    }

    async fn collection(&self, collection_id: &str) -> Result<Collection> {
        let path = format!("collections/{}", collection_id);
        let response = self.get(&path, &[]).await?;
        let text = response.text().await?;

        let payload: CollectionPayload = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse collection: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(payload.into())
    }

    async fn collection_items(&self, collection_id: &str) -> Result<Vec<CollectionItem>> {
        let path = format!("collections/{}/items", collection_id);
        let response = self.get(&path, &[("include_all_items", "true")]).await?;
        let text = response.text().await?;

        let payload: CollectionItemsPayload = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse collection items: {} - Response: {}",
                e, text
            ))
        })?;

        Ok(payload.items.into_iter().map(Into::into).collect())
    }
}
