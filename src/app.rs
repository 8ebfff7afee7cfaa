//! One scan = one render pass: fetch both snapshots, resolve the reagent
//! cost, derive, filter.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::enrich::{self, DEFAULT_NATURE_RUNE_COST, NATURE_RUNE_ID};
use crate::domain::{filter, EnrichedItem, FilterCriteria};
use crate::infra::{MetadataClient, MetadataError, PriceClient, PriceError};

/// Terminal failures for a pass. Either source being unavailable aborts
/// the whole pass; there is no partial result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("item metadata unavailable: {0}")]
    Metadata(#[from] MetadataError),
    #[error("live prices unavailable: {0}")]
    Prices(#[from] PriceError),
}

/// Output of a pass: filtered rows plus the reagent cost they were priced
/// against.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub rows: Vec<EnrichedItem>,
    /// Nature rune buy price used for every row in this batch.
    pub reagent_cost: i64,
    /// True when the rune was missing from the snapshot and the default
    /// cost was substituted.
    pub reagent_fallback: bool,
}

pub struct Scanner {
    metadata: MetadataClient,
    prices: PriceClient,
}

impl Scanner {
    pub fn new(metadata: MetadataClient, prices: PriceClient) -> Self {
        Self { metadata, prices }
    }

    /// Runs one full recompute over the current snapshots. Fetches are
    /// memoized by their clients, so within a TTL window this is a pure
    /// in-memory transform.
    pub async fn scan(&self, criteria: &FilterCriteria) -> Result<ScanReport, ScanError> {
        let items = self.metadata.get_items().await?;
        let quotes = self.prices.get_latest().await?;

        let (reagent_cost, reagent_fallback) = match enrich::resolve_reagent_cost(&quotes) {
            Some(cost) => (cost, false),
            None => {
                warn!(
                    id = NATURE_RUNE_ID,
                    default = DEFAULT_NATURE_RUNE_COST,
                    "nature rune missing from price snapshot, using default cost"
                );
                (DEFAULT_NATURE_RUNE_COST, true)
            }
        };

        let enriched = enrich::enrich(&items, &quotes, reagent_cost);
        debug!(
            joined = enriched.len(),
            items = items.len(),
            quotes = quotes.len(),
            reagent_cost,
            "derived enriched rows"
        );

        let rows = filter::apply(&enriched, criteria);
        Ok(ScanReport {
            rows,
            reagent_cost,
            reagent_fallback,
        })
    }
}
