//! Joins item metadata with live quotes and derives per-item profit.

use std::collections::HashMap;

use super::classify::classify;
use super::entities::{EnrichedItem, Item, PriceQuote};

/// Nature rune, the single reagent consumed per High Alchemy cast.
pub const NATURE_RUNE_ID: u32 = 561;

/// Used when the nature rune is missing from the price snapshot.
pub const DEFAULT_NATURE_RUNE_COST: i64 = 200;

/// Looks up the nature rune's buy price in the snapshot. `None` when the
/// rune id is absent entirely; the caller substitutes
/// [`DEFAULT_NATURE_RUNE_COST`] and warns. Resolved once per pass, not per
/// item.
pub fn resolve_reagent_cost(quotes: &[PriceQuote]) -> Option<i64> {
    quotes
        .iter()
        .find(|q| q.id == NATURE_RUNE_ID)
        .map(|q| q.buy)
}

/// Inner-joins items and quotes on id and derives one [`EnrichedItem`] per
/// matched pair. Items without a quote (and quotes without an item) are
/// dropped silently; that is the expected state for illiquid or delisted
/// items. Output order is unspecified; consumers sort explicitly.
pub fn enrich(items: &[Item], quotes: &[PriceQuote], reagent_cost: i64) -> Vec<EnrichedItem> {
    let by_id: HashMap<u32, &PriceQuote> = quotes.iter().map(|q| (q.id, q)).collect();

    items
        .iter()
        .filter_map(|item| {
            let quote = by_id.get(&item.id)?;
            let category = classify(item.category_id, &item.name);
            Some(EnrichedItem::new(item, quote, reagent_cost, category))
        })
        .collect()
}
