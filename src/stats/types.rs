//! Type definitions for block statistics

use serde::{Deserialize, Serialize};

/// Rule for rounding the average block length to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 1.5 -> 2, 2.5 -> 3
    #[default]
    HalfAwayFromZero,
    /// 1.5 -> 2, 2.5 -> 2
    HalfEven,
}

impl Rounding {
    pub fn apply(self, value: f64) -> usize {
        let rounded = match self {
            Rounding::HalfAwayFromZero => value.round(),
            Rounding::HalfEven => value.round_ties_even(),
        };
        rounded as usize
    }
}

/// Aggregate statistics over all blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommonStatistics {
    pub total_blocks: usize,
    pub avg_block_length: usize,
    pub max_block_length: usize,
    pub min_block_length: usize,
}

/// Character-class counts for a single block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStatistics {
    pub text: String,
    pub text_length: usize,
    pub latin_count: usize,
    pub cyr_count: usize,
    pub cypher_count: usize,
    pub other_sym_count: usize,
}
