//! First two Apriori passes over (product, user) records: frequent items and
//! frequent pairs, counted per duplicate-free basket.

use std::hash::Hash;

use itertools::Itertools;
use tracing::info;

pub mod basket;
pub mod combi;
pub mod config;
pub mod error;
pub mod itemsets;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

use crate::basket::basket_entry;

pub use crate::{
    basket::{build_baskets, build_baskets_par},
    combi::basket_pairs,
    config::{Grouping, MinSupport, MiningConfig},
    error::{MiningError, Result},
    itemsets::{
        candidates::CandidatePairs,
        count::{frequent_items, frequent_items_par},
        pairs::{frequent_pairs, frequent_pairs_par},
    },
    types::{Basket, Baskets, FrequentItemsets, ItemCounts, PairCounts, Record},
};

/// Baskets, then frequent items, then frequent pairs among all
/// 2-combinations of the frequent items.
///
/// Candidate pairs are oriented by the order in which their items first
/// appear in `records`, so a pair is always reported under the same key.
pub fn frequent_itemsets<T>(records: &[Record<T>], config: &MiningConfig) -> FrequentItemsets<T>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    let baskets = if config.parallel {
        build_baskets_par(records, config.grouping)
    } else {
        build_baskets(records, config.grouping)
    };

    let (items, _) = if config.parallel {
        frequent_items_par(&baskets, config.min_support_items)
    } else {
        frequent_items(&baskets, config.min_support_items)
    };

    let candidates = CandidatePairs::from_items(
        records
            .iter()
            .map(|record| basket_entry(record, config.grouping).1)
            .filter(|item| items.contains_key(item))
            .unique(),
    );

    let pairs = if config.parallel {
        frequent_pairs_par(&candidates, &baskets, config.min_support_pairs)
    } else {
        frequent_pairs(&candidates, &baskets, config.min_support_pairs)
    };

    info!(
        records = records.len(),
        baskets = baskets.len(),
        frequent_items = items.len(),
        frequent_pairs = pairs.len(),
        "mined frequent itemsets"
    );

    FrequentItemsets { items, pairs }
}
