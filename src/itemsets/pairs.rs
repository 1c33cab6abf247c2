use std::{collections::HashMap, hash::Hash};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    combi::basket_pairs,
    config::MinSupport,
    itemsets::{candidates::CandidatePairs, count::add_counts},
    types::{Baskets, PairCounts, Support},
};

type BorrowedPairCounts<'b, T> = HashMap<(&'b T, &'b T), Support>;

/// Frequent 2-itemsets among `candidates`.
///
/// A basket's local pair `(a, b)` counts under whichever orientation the
/// candidate set holds; pairs that are not candidates are skipped.
pub fn frequent_pairs<T>(
    candidates: &CandidatePairs<T>,
    baskets: &Baskets<T>,
    min_support: MinSupport,
) -> PairCounts<T>
where
    T: Eq + Hash + Clone,
{
    let mut pair_counts = HashMap::new();

    baskets
        .values()
        .filter(|items| items.len() >= 2)
        .for_each(|items| update_counts(candidates, items, &mut pair_counts));

    prune(pair_counts, candidates, min_support)
}

/// Same result as [`frequent_pairs`], counted on the rayon pool.
pub fn frequent_pairs_par<T>(
    candidates: &CandidatePairs<T>,
    baskets: &Baskets<T>,
    min_support: MinSupport,
) -> PairCounts<T>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    let pair_counts = baskets
        .par_iter()
        .filter(|(_, items)| items.len() >= 2)
        .fold(HashMap::new, |mut pair_counts, (_, items)| {
            update_counts(candidates, items, &mut pair_counts);
            pair_counts
        })
        .reduce(HashMap::new, add_counts);

    prune(pair_counts, candidates, min_support)
}

fn update_counts<'b, T: Eq + Hash>(
    candidates: &CandidatePairs<T>,
    items: &'b [T],
    pair_counts: &mut BorrowedPairCounts<'b, T>,
) {
    for (a, b) in basket_pairs(items) {
        if let Some(pair) = candidates.orientation(a, b) {
            *pair_counts.entry(pair).or_insert(0) += 1;
        }
    }
}

fn prune<T: Eq + Hash + Clone>(
    mut pair_counts: BorrowedPairCounts<'_, T>,
    candidates: &CandidatePairs<T>,
    min_support: MinSupport,
) -> PairCounts<T> {
    let num_seen = pair_counts.len();
    pair_counts.retain(|_, &mut support_count| min_support.is_met_by(support_count));

    debug!(
        candidates = candidates.len(),
        seen_pairs = num_seen,
        frequent_pairs = pair_counts.len(),
        min_support = min_support.get(),
        "counted 2-itemsets"
    );

    pair_counts
        .into_iter()
        .map(|((a, b), count)| ((a.clone(), b.clone()), count))
        .collect()
}
