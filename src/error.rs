//! Error types for market_basket.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MiningError {
    /// Minimum support must be a positive count.
    #[error("minimum support must be at least 1, got {0}")]
    InvalidMinSupport(i64),

    #[error("unknown grouping {0:?}, expected \"user\" or \"product\"")]
    UnknownGrouping(String),

    /// A candidate pair was supplied in both orientations.
    #[error("candidate pair ({left}, {right}) also present as ({right}, {left})")]
    ReversedCandidate { left: String, right: String },

    #[error("candidate pair pairs {0} with itself")]
    SelfPair(String),
}

pub type Result<T> = std::result::Result<T, MiningError>;
