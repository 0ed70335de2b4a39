//! Stats module for computing block statistics
//!
//! This module classifies characters by code-point range and computes per-block
//! and aggregate length statistics over extracted blocks.

mod calculator;
mod classify;
mod types;

// Re-export public types
pub use calculator::{Report, analyze};
pub use classify::{CharClass, classify, is_decimal_digit};
pub use types::{BlockStatistics, CommonStatistics, Rounding};
