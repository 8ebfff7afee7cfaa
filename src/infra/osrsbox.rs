//! Typed async client for the osrsbox-db item dump.
//!
//! The dump is a single large JSON object keyed by item id. Item metadata
//! only changes with game updates, so the snapshot is memoized for an hour.

use std::{collections::HashMap, sync::Arc, time::Duration};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::Item;
use crate::infra::cache::Cached;

const DEFAULT_ITEMS_URL: &str =
    "https://raw.githubusercontent.com/osrsbox/osrsbox-db/master/docs/items-complete.json";
/// Item metadata TTL: 1 hour.
pub const METADATA_TTL: Duration = Duration::from_secs(60 * 60);
const USER_AGENT: &str = "alch-scanner/0.1.0";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct MetadataClient {
    http: Client,
    url: Url,
    cache: Arc<Mutex<Option<Cached<Vec<Item>>>>>,
    ttl: Duration,
}

impl MetadataClient {
    pub fn new() -> Result<Self, MetadataError> {
        Self::with_url(DEFAULT_ITEMS_URL)
    }

    pub fn with_url(url: &str) -> Result<Self, MetadataError> {
        let url = Url::parse(url)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            url,
            cache: Arc::new(Mutex::new(None)),
            ttl: METADATA_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the item snapshot, fetching only when the memo has expired.
    pub async fn get_items(&self) -> Result<Vec<Item>, MetadataError> {
        {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.as_ref() {
                if let Some(items) = entry.if_fresh(self.ttl) {
                    info!(
                        count = items.len(),
                        age_secs = entry.age().as_secs(),
                        "serving cached item metadata"
                    );
                    return Ok(items);
                }
            }
        }

        info!(url = %self.url, "fetching item metadata");
        let response = self.http.get(self.url.clone()).send().await?.error_for_status()?;
        let payload: HashMap<String, ItemDto> = response.json().await?;

        let items: Vec<Item> = payload
            .into_iter()
            .filter_map(|(id, dto)| {
                let id = id.parse::<u32>().ok()?;
                Some(dto.into_item(id))
            })
            .collect();

        info!(count = items.len(), "loaded item metadata");
        *self.cache.lock().await = Some(Cached::new(items.clone()));
        Ok(items)
    }
}

/// Raw osrsbox record. Only the consumed fields are declared; missing or
/// null numerics coerce to zero rather than failing the whole dump.
#[derive(Debug, Deserialize)]
struct ItemDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    members: Option<bool>,
    #[serde(default)]
    highalch: Option<i64>,
    #[serde(default)]
    category_id: Option<i64>,
}

impl ItemDto {
    fn into_item(self, id: u32) -> Item {
        Item {
            id,
            name: self.name.unwrap_or_default(),
            members: self.members.unwrap_or(false),
            highalch: self.highalch.unwrap_or(0),
            category_id: self
                .category_id
                .and_then(|raw| u16::try_from(raw).ok())
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "name": "Iron dagger",
            "members": false,
            "highalch": 50,
            "category_id": 8,
            "examine": "A dagger made of iron."
        }"#;
        let dto: ItemDto = serde_json::from_str(json).unwrap();
        let item = dto.into_item(100);
        assert_eq!(
            item,
            Item {
                id: 100,
                name: "Iron dagger".to_string(),
                members: false,
                highalch: 50,
                category_id: 8,
            }
        );
    }

    #[test]
    fn missing_fields_coerce_to_defaults() {
        let dto: ItemDto = serde_json::from_str(r#"{"name": "Mystery box"}"#).unwrap();
        let item = dto.into_item(1);
        assert_eq!(item.highalch, 0);
        assert_eq!(item.category_id, 0);
        assert!(!item.members);
    }

    #[test]
    fn null_numerics_coerce_to_zero() {
        let json = r#"{"name": "Odd item", "highalch": null, "category_id": null}"#;
        let dto: ItemDto = serde_json::from_str(json).unwrap();
        let item = dto.into_item(2);
        assert_eq!(item.highalch, 0);
        assert_eq!(item.category_id, 0);
    }

    #[test]
    fn out_of_range_category_id_coerces_to_zero() {
        let dto: ItemDto = serde_json::from_str(r#"{"category_id": -5}"#).unwrap();
        assert_eq!(dto.into_item(3).category_id, 0);
    }
}
