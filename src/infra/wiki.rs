//! Typed async client for the OSRS Wiki real-time price API.
//!
//! `/latest` returns instantaneous high/low quotes for every traded item.
//! Quotes move fast, so the snapshot is memoized for five minutes only.

use std::{collections::HashMap, sync::Arc, time::Duration};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::PriceQuote;
use crate::infra::cache::Cached;

const DEFAULT_LATEST_URL: &str = "https://prices.runescape.wiki/api/v1/osrs/latest";
/// Price TTL: 5 minutes.
pub const PRICES_TTL: Duration = Duration::from_secs(5 * 60);
// The wiki API rejects anonymous user agents.
const USER_AGENT: &str = "alch-scanner/0.1.0 (high alch profit scanner)";

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct PriceClient {
    http: Client,
    url: Url,
    cache: Arc<Mutex<Option<Cached<Vec<PriceQuote>>>>>,
    ttl: Duration,
}

impl PriceClient {
    pub fn new() -> Result<Self, PriceError> {
        Self::with_url(DEFAULT_LATEST_URL)
    }

    pub fn with_url(url: &str) -> Result<Self, PriceError> {
        let url = Url::parse(url)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            url,
            cache: Arc::new(Mutex::new(None)),
            ttl: PRICES_TTL,
        })
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the latest quote snapshot, fetching only when the memo has
    /// expired.
    pub async fn get_latest(&self) -> Result<Vec<PriceQuote>, PriceError> {
        {
            let cache = self.cache.lock().await;
            if let Some(entry) = cache.as_ref() {
                if let Some(quotes) = entry.if_fresh(self.ttl) {
                    info!(
                        count = quotes.len(),
                        age_secs = entry.age().as_secs(),
                        "serving cached price quotes"
                    );
                    return Ok(quotes);
                }
            }
        }

        info!(url = %self.url, "fetching live prices");
        let response = self.http.get(self.url.clone()).send().await?.error_for_status()?;
        let envelope: LatestEnvelope = response.json().await?;

        let quotes: Vec<PriceQuote> = envelope
            .data
            .into_iter()
            .filter_map(|(id, dto)| {
                let id = id.parse::<u32>().ok()?;
                Some(dto.into_quote(id))
            })
            .collect();

        info!(count = quotes.len(), "loaded live prices");
        *self.cache.lock().await = Some(Cached::new(quotes.clone()));
        Ok(quotes)
    }
}

#[derive(Debug, Deserialize)]
struct LatestEnvelope {
    data: HashMap<String, QuoteDto>,
}

/// Raw wiki quote. `high`/`low` are null for items with no recent trades;
/// both coerce to zero so illiquid items never fail the pass.
#[derive(Debug, Deserialize)]
struct QuoteDto {
    #[serde(default)]
    high: Option<i64>,
    #[serde(default)]
    low: Option<i64>,
}

impl QuoteDto {
    fn into_quote(self, id: u32) -> PriceQuote {
        PriceQuote {
            id,
            buy: self.high.unwrap_or(0),
            sell: self.low.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_latest_envelope() {
        let json = r#"{
            "data": {
                "2": {"high": 163, "highTime": 1700000000, "low": 155, "lowTime": 1700000050},
                "561": {"high": 180, "highTime": 1700000000, "low": 175, "lowTime": 1700000050}
            }
        }"#;
        let envelope: LatestEnvelope = serde_json::from_str(json).unwrap();
        let mut quotes: Vec<PriceQuote> = envelope
            .data
            .into_iter()
            .filter_map(|(id, dto)| Some(dto.into_quote(id.parse().ok()?)))
            .collect();
        quotes.sort_by_key(|q| q.id);

        assert_eq!(
            quotes,
            vec![
                PriceQuote { id: 2, buy: 163, sell: 155 },
                PriceQuote { id: 561, buy: 180, sell: 175 },
            ]
        );
    }

    #[test]
    fn null_quotes_coerce_to_zero() {
        let dto: QuoteDto = serde_json::from_str(r#"{"high": null, "low": null}"#).unwrap();
        let quote = dto.into_quote(99);
        assert_eq!(quote.buy, 0);
        assert_eq!(quote.sell, 0);
    }
}
