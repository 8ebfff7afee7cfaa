//! User-facing filter pipeline over enriched rows.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use super::entities::{Category, EnrichedItem};

/// Membership gate. `All` is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MembershipFilter {
    #[default]
    All,
    F2pOnly,
    P2pOnly,
}

impl MembershipFilter {
    fn matches(self, f2p: bool) -> bool {
        match self {
            MembershipFilter::All => true,
            MembershipFilter::F2pOnly => f2p,
            MembershipFilter::P2pOnly => !f2p,
        }
    }
}

/// Resolved filter state. `categories` carries the full [`Category::ALL`]
/// set when no category filter is intended; an explicitly empty set means
/// "nothing selected" and yields an empty result.
#[derive(Clone, Debug)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub membership: MembershipFilter,
    pub min_profit: i64,
    pub categories: BTreeSet<Category>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: None,
            membership: MembershipFilter::All,
            min_profit: 0,
            categories: Category::ALL.into_iter().collect(),
        }
    }
}

/// Applies the criteria conjunctively and sorts by net profit descending.
///
/// The baseline gate (buy > 0, highalch > 0, profit floor) always applies:
/// rows with no market liquidity or no alch value are never actionable.
/// The sort is stable, so equal-profit rows keep their input order and
/// repeated runs over identical input are deterministic.
pub fn apply(rows: &[EnrichedItem], criteria: &FilterCriteria) -> Vec<EnrichedItem> {
    if criteria.categories.is_empty() {
        return Vec::new();
    }

    let search = criteria
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut out: Vec<EnrichedItem> = rows
        .iter()
        .filter(|row| row.buy > 0 && row.highalch > 0 && row.net_profit >= criteria.min_profit)
        .filter(|row| {
            search
                .as_deref()
                .map_or(true, |needle| row.name.to_lowercase().contains(needle))
        })
        .filter(|row| criteria.membership.matches(row.f2p))
        .filter(|row| criteria.categories.contains(&row.category))
        .cloned()
        .collect();

    out.sort_by_key(|row| Reverse(row.net_profit));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(id: u32, name: &str, highalch: i64, buy: i64, profit: i64, f2p: bool, category: Category) -> EnrichedItem {
        EnrichedItem {
            id,
            name: name.to_string(),
            members: !f2p,
            f2p,
            highalch,
            buy,
            sell: buy.saturating_sub(10),
            net_profit: profit,
            category,
        }
    }

    fn sample() -> Vec<EnrichedItem> {
        vec![
            row(1, "dragon scimitar", 60_000, 59_000, 800, false, Category::Weapons),
            row(2, "Dragon longsword", 60_000, 59_500, 500, false, Category::Weapons),
            row(3, "Iron sword", 50, 30, -160, true, Category::Weapons),
            row(4, "Yew logs", 192, 60, 100, true, Category::Logs),
            row(5, "Unbuyable relic", 500, 0, 400, true, Category::Other),
            row(6, "No alch trinket", 0, 100, 300, true, Category::Other),
        ]
    }

    #[test]
    fn baseline_drops_illiquid_and_unalchable() {
        let criteria = FilterCriteria {
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        let out = apply(&sample(), &criteria);
        assert!(out.iter().all(|r| r.buy > 0 && r.highalch > 0));
        assert!(!out.iter().any(|r| r.id == 5 || r.id == 6));
    }

    #[test]
    fn min_profit_floor() {
        let criteria = FilterCriteria {
            min_profit: 500,
            ..FilterCriteria::default()
        };
        let ids: Vec<u32> = apply(&sample(), &criteria).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = FilterCriteria {
            search: Some("Dragon".to_string()),
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        let out = apply(&sample(), &criteria);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dragon scimitar", "Dragon longsword"]);
    }

    #[test]
    fn empty_search_matches_all() {
        let base = FilterCriteria {
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        let with_empty = FilterCriteria {
            search: Some(String::new()),
            ..base.clone()
        };
        assert_eq!(apply(&sample(), &base), apply(&sample(), &with_empty));
    }

    #[test]
    fn membership_gates() {
        let f2p = FilterCriteria {
            membership: MembershipFilter::F2pOnly,
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        assert!(apply(&sample(), &f2p).iter().all(|r| r.f2p));

        let p2p = FilterCriteria {
            membership: MembershipFilter::P2pOnly,
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        assert!(apply(&sample(), &p2p).iter().all(|r| !r.f2p));
    }

    #[test]
    fn empty_category_set_yields_empty_result() {
        let criteria = FilterCriteria {
            categories: BTreeSet::new(),
            min_profit: i64::MIN,
            ..FilterCriteria::default()
        };
        assert!(apply(&sample(), &criteria).is_empty());
    }

    #[test]
    fn category_membership() {
        let criteria = FilterCriteria {
            categories: [Category::Logs].into_iter().collect(),
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        let out = apply(&sample(), &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 4);
    }

    #[test]
    fn sorted_by_profit_descending_and_stable() {
        let mut rows = sample();
        rows.push(row(7, "Tie A", 1_000, 500, 500, true, Category::Other));
        rows.push(row(8, "Tie B", 1_000, 500, 500, true, Category::Other));

        let criteria = FilterCriteria {
            min_profit: -10_000,
            ..FilterCriteria::default()
        };
        let first = apply(&rows, &criteria);
        let profits: Vec<i64> = first.iter().map(|r| r.net_profit).collect();
        let mut sorted = profits.clone();
        sorted.sort_by_key(|p| Reverse(*p));
        assert_eq!(profits, sorted);

        // Equal profits keep input order, and a rerun reproduces it.
        let tie_ids: Vec<u32> = first
            .iter()
            .filter(|r| r.net_profit == 500)
            .map(|r| r.id)
            .collect();
        assert_eq!(tie_ids, vec![2, 7, 8]);
        assert_eq!(first, apply(&rows, &criteria));
    }

    #[test]
    fn pipeline_is_idempotent() {
        let criteria = FilterCriteria {
            search: Some("dragon".to_string()),
            min_profit: 0,
            ..FilterCriteria::default()
        };
        let once = apply(&sample(), &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }
}
