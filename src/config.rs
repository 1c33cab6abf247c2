use std::{convert::TryFrom, str::FromStr};

use crate::{
    error::{MiningError, Result},
    types::Support,
};

/// Which record field keys a basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// key = user, items = products
    ByUser,
    /// key = product, items = users
    ByProduct,
}

impl Default for Grouping {
    fn default() -> Self {
        Grouping::ByUser
    }
}

impl FromStr for Grouping {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "by_user" => Ok(Grouping::ByUser),
            "product" | "by_product" => Ok(Grouping::ByProduct),
            _ => Err(MiningError::UnknownGrouping(s.to_owned())),
        }
    }
}

/// Minimum number of baskets an itemset must appear in. Always >= 1.
///
/// Thresholds above any reachable count are valid and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinSupport(u64);

impl MinSupport {
    pub fn new(count: i64) -> Result<Self> {
        match u64::try_from(count) {
            Ok(count) if count >= 1 => Ok(MinSupport(count)),
            _ => Err(MiningError::InvalidMinSupport(count)),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_met_by(self, count: Support) -> bool {
        u64::from(count) >= self.0
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport(1)
    }
}

impl TryFrom<i64> for MinSupport {
    type Error = MiningError;

    fn try_from(count: i64) -> Result<Self> {
        MinSupport::new(count)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningConfig {
    pub grouping: Grouping,
    pub min_support_items: MinSupport,
    pub min_support_pairs: MinSupport,
    /// Run the counting stages on the rayon pool.
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(grouping: Grouping, min_support_items: i64, min_support_pairs: i64) -> Result<Self> {
        Ok(MiningConfig {
            grouping,
            min_support_items: MinSupport::new(min_support_items)?,
            min_support_pairs: MinSupport::new(min_support_pairs)?,
            parallel: false,
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
