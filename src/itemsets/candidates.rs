use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use itertools::Itertools;

use crate::{
    error::{MiningError, Result},
    types::Pair,
};

/// Oriented candidate pairs for the 2-itemset pass.
///
/// Each unordered pair is stored in exactly one orientation, and that
/// orientation is the one pair counts are reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePairs<T>
where
    T: Eq + Hash,
{
    partners: HashMap<T, HashSet<T>>,
    len: usize,
}

impl<T> CandidatePairs<T>
where
    T: Eq + Hash,
{
    /// Exact repeats are dropped. A pair given in both orientations or a
    /// self-pair is an error.
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
        T: Debug,
    {
        let mut candidates = CandidatePairs::empty();

        for (left, right) in pairs {
            if left == right {
                return Err(MiningError::SelfPair(format!("{:?}", left)));
            }
            if candidates.contains(&right, &left) {
                return Err(MiningError::ReversedCandidate {
                    left: format!("{:?}", left),
                    right: format!("{:?}", right),
                });
            }
            candidates.insert(left, right);
        }

        Ok(candidates)
    }

    /// Every 2-combination of the given items, oriented by iteration order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let mut candidates = CandidatePairs::empty();
        let items: Vec<T> = items.into_iter().unique().collect();

        for (left, right) in items.iter().tuple_combinations() {
            candidates.insert(left.clone(), right.clone());
        }

        candidates
    }

    fn empty() -> Self {
        CandidatePairs {
            partners: HashMap::new(),
            len: 0,
        }
    }

    fn insert(&mut self, left: T, right: T) {
        if self.partners.entry(left).or_default().insert(right) {
            self.len += 1;
        }
    }

    /// Whether `(left, right)` is a candidate in exactly this orientation.
    pub fn contains(&self, left: &T, right: &T) -> bool {
        self.partners
            .get(left)
            .map_or(false, |partners| partners.contains(right))
    }

    /// The candidate orientation of the unordered pair {a, b}, if any.
    pub fn orientation<'a>(&self, a: &'a T, b: &'a T) -> Option<(&'a T, &'a T)> {
        if self.contains(a, b) {
            Some((a, b))
        } else if self.contains(b, a) {
            Some((b, a))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.partners
            .iter()
            .flat_map(|(left, partners)| partners.iter().map(move |right| (left, right)))
    }
}
