use std::collections::HashMap;

/// A (product, user) observation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record<T> {
    pub product: T,
    pub user: T,
}

impl<T> Record<T> {
    pub fn new(product: T, user: T) -> Self {
        Record { product, user }
    }
}

impl<T> From<(T, T)> for Record<T> {
    fn from((product, user): (T, T)) -> Self {
        Record { product, user }
    }
}

/// Ordered, duplicate-free items of one basket.
pub type Basket<T> = Vec<T>;
pub type Baskets<T> = HashMap<T, Basket<T>>;

pub type Support = u32;
pub type Pair<T> = (T, T);

pub type ItemCounts<T> = HashMap<T, Support>;
pub type PairCounts<T> = HashMap<Pair<T>, Support>;

/// Frequent singles and pairs produced by one mining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets<T>
where
    T: Eq + std::hash::Hash,
{
    pub items: ItemCounts<T>,
    pub pairs: PairCounts<T>,
}
