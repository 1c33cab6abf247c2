use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::MinSupport,
    types::{Baskets, ItemCounts, Support},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Frequent 1-itemsets.
///
/// An item's count is the number of baskets holding it, which holds because
/// baskets are duplicate-free. Returns the pruned counts and their key set.
pub fn frequent_items<T>(
    baskets: &Baskets<T>,
    min_support: MinSupport,
) -> (ItemCounts<T>, HashSet<T>)
where
    T: Eq + Hash + Clone,
{
    let mut item_counts: HashMap<&T, Support> =
        HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

    for item in baskets.values().flatten() {
        *item_counts.entry(item).or_insert(0) += 1;
    }

    prune(item_counts, min_support)
}

/// Same result as [`frequent_items`], counted on the rayon pool.
pub fn frequent_items_par<T>(
    baskets: &Baskets<T>,
    min_support: MinSupport,
) -> (ItemCounts<T>, HashSet<T>)
where
    T: Eq + Hash + Clone + Send + Sync,
{
    let item_counts = baskets
        .par_iter()
        .fold(HashMap::new, |mut item_counts: HashMap<&T, Support>, (_, items)| {
            for item in items {
                *item_counts.entry(item).or_insert(0) += 1;
            }
            item_counts
        })
        .reduce(HashMap::new, add_counts);

    prune(item_counts, min_support)
}

pub(crate) fn add_counts<K: Eq + Hash>(
    mut left: HashMap<K, Support>,
    right: HashMap<K, Support>,
) -> HashMap<K, Support> {
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}

fn prune<T: Eq + Hash + Clone>(
    mut item_counts: HashMap<&T, Support>,
    min_support: MinSupport,
) -> (ItemCounts<T>, HashSet<T>) {
    let num_items = item_counts.len();
    item_counts.retain(|_, &mut support_count| min_support.is_met_by(support_count));

    let item_counts: ItemCounts<T> = item_counts
        .into_iter()
        .map(|(item, count)| (item.clone(), count))
        .collect();
    let frequent: HashSet<T> = item_counts.keys().cloned().collect();

    debug!(
        distinct_items = num_items,
        frequent_items = frequent.len(),
        min_support = min_support.get(),
        "counted 1-itemsets"
    );

    (item_counts, frequent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{basket::build_baskets, config::Grouping, types::Record};
    use maplit::{hashmap, hashset};

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";
    const D: &str = "Item D";

    fn support(count: i64) -> MinSupport {
        MinSupport::new(count).unwrap()
    }

    fn scenario_baskets() -> Baskets<&'static str> {
        let records: Vec<Record<&str>> = vec![
            ("p1", "u1").into(),
            ("p2", "u1").into(),
            ("p1", "u2").into(),
            ("p1", "u1").into(),
        ];
        build_baskets(&records, Grouping::ByUser)
    }

    #[test]
    fn counts_distinct_baskets() {
        let (item_counts, frequent) = frequent_items(&scenario_baskets(), support(1));

        assert_eq!(item_counts, hashmap! { "p1" => 2, "p2" => 1 });
        assert_eq!(frequent, hashset! { "p1", "p2" });
    }

    #[test]
    fn prunes_below_min_support() {
        let (item_counts, frequent) = frequent_items(&scenario_baskets(), support(2));

        assert_eq!(item_counts, hashmap! { "p1" => 2 });
        assert_eq!(frequent, hashset! { "p1" });
    }

    #[test]
    fn count_equals_baskets_containing_item() {
        let baskets = hashmap! {
            "k1" => vec![A, B, C],
            "k2" => vec![A],
            "k3" => vec![B],
            "k4" => vec![A, C],
        };
        let (item_counts, _) = frequent_items(&baskets, support(1));

        for (item, count) in &item_counts {
            let holding = baskets.values().filter(|items| items.contains(item)).count();
            assert_eq!(*count as usize, holding);
            assert!(holding <= baskets.len());
        }
        assert_eq!(item_counts, hashmap! { A => 3, B => 2, C => 2 });
    }

    #[test]
    fn raising_min_support_never_grows() {
        let baskets = hashmap! {
            "k1" => vec![A, B, C, D],
            "k2" => vec![A, B],
            "k3" => vec![A, C],
            "k4" => vec![A],
        };

        let sizes: Vec<usize> = (1..=5)
            .map(|min_support| frequent_items(&baskets, support(min_support)).0.len())
            .collect();

        assert_eq!(sizes, vec![4, 3, 1, 1, 0]);
    }

    #[test]
    fn huge_min_support_keeps_nothing() {
        let (item_counts, frequent) = frequent_items(&scenario_baskets(), support(i64::MAX));

        assert!(item_counts.is_empty());
        assert!(frequent.is_empty());
    }

    #[test]
    fn empty_baskets() {
        let baskets: Baskets<u32> = HashMap::new();
        let (item_counts, frequent) = frequent_items(&baskets, support(1));

        assert!(item_counts.is_empty());
        assert!(frequent.is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let baskets: Baskets<u32> = (0..200)
            .map(|key| (key, (0..(key % 17)).map(|item| item * 3).collect()))
            .collect();

        for min_support in 1..=4 {
            assert_eq!(
                frequent_items_par(&baskets, support(min_support)),
                frequent_items(&baskets, support(min_support))
            );
        }
    }

    #[test]
    fn test_add_counts() {
        let merged = add_counts(hashmap! { 1 => 2, 2 => 1 }, hashmap! { 2 => 3, 3 => 1 });
        assert_eq!(merged, hashmap! { 1 => 2, 2 => 4, 3 => 1 });
    }
}
