//! Error types for optimal BST construction.

use std::fmt;

use thiserror::Error;

/// Which input series a weight came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSeries {
    /// Per-key access weights (`p`).
    Keys,
    /// Weights of searches that fall between keys (`q`).
    Gaps,
}

impl fmt::Display for WeightSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSeries::Keys => f.write_str("key weights"),
            WeightSeries::Gaps => f.write_str("gap weights"),
        }
    }
}

/// Errors raised while validating input or reconstructing a tree.
///
/// Every variant is a contract violation by the caller; nothing is clamped or
/// recovered internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObstError {
    /// Two sequences that must line up have incompatible lengths.
    #[error("length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A weight was negative (or NaN / infinite for floating point weights).
    #[error("inadmissible {series} entry at index {index}: {value}")]
    InadmissibleWeight {
        series: WeightSeries,
        index: usize,
        value: String,
    },

    /// Keys must be strictly increasing; `index` is the first offending position.
    #[error("keys are not strictly increasing at index {index}")]
    KeysNotIncreasing { index: usize },

    /// A key interval `lo..hi` that does not fit `0..=n`.
    #[error("invalid key interval {lo}..{hi} for {n} keys")]
    InvalidInterval { lo: usize, hi: usize, n: usize },

    /// The tree holds a key that is absent from the supplied key sequence.
    #[error("tree key not present in the key sequence")]
    UnknownKey,

    /// The reconstructed tree does not reproduce the table's optimum.
    #[error("tree cost {tree} disagrees with table cost {table}")]
    CostMismatch { tree: String, table: String },

    /// A weight sum or cost does not fit the weight type.
    #[error("weight arithmetic overflowed while computing {what}")]
    Overflow { what: &'static str },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ObstError>;
