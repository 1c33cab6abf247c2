use std::{collections::hash_map::Entry, hash::Hash};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::Grouping,
    types::{Basket, Baskets, Record},
};

/// Map step: (key, item) of a record under the given grouping.
pub fn basket_entry<T: Clone>(record: &Record<T>, grouping: Grouping) -> (T, T) {
    match grouping {
        Grouping::ByUser => (record.user.clone(), record.product.clone()),
        Grouping::ByProduct => (record.product.clone(), record.user.clone()),
    }
}

/// Reduce step: append `item` unless the basket already holds it.
pub fn merge_item<T: PartialEq>(basket: &mut Basket<T>, item: T) {
    if !basket.contains(&item) {
        basket.push(item);
    }
}

fn add_to_baskets<T: Eq + Hash>(baskets: &mut Baskets<T>, key: T, item: T) {
    match baskets.entry(key) {
        Entry::Occupied(mut basket) => merge_item(basket.get_mut(), item),
        Entry::Vacant(slot) => {
            slot.insert(vec![item]);
        }
    }
}

/// Set union of two partial basket maps. `left` items keep their position,
/// unseen `right` items follow in their own order.
pub fn merge_baskets<T: Eq + Hash>(mut left: Baskets<T>, right: Baskets<T>) -> Baskets<T> {
    for (key, items) in right {
        match left.entry(key) {
            Entry::Occupied(mut basket) => {
                let basket = basket.get_mut();
                for item in items {
                    merge_item(basket, item);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(items);
            }
        }
    }
    left
}

/// Group records into duplicate-free baskets.
pub fn build_baskets<T>(records: &[Record<T>], grouping: Grouping) -> Baskets<T>
where
    T: Eq + Hash + Clone,
{
    let mut baskets = Baskets::new();
    for record in records {
        let (key, item) = basket_entry(record, grouping);
        add_to_baskets(&mut baskets, key, item);
    }

    debug!(
        records = records.len(),
        baskets = baskets.len(),
        ?grouping,
        "built baskets"
    );
    baskets
}

/// Same result as [`build_baskets`], folded on the rayon pool.
pub fn build_baskets_par<T>(records: &[Record<T>], grouping: Grouping) -> Baskets<T>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    let baskets = records
        .par_iter()
        .fold(Baskets::new, |mut baskets, record| {
            let (key, item) = basket_entry(record, grouping);
            add_to_baskets(&mut baskets, key, item);
            baskets
        })
        .reduce(Baskets::new, merge_baskets);

    debug!(
        records = records.len(),
        baskets = baskets.len(),
        ?grouping,
        "built baskets in parallel"
    );
    baskets
}
