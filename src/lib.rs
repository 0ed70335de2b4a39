//! blockstat library - delimited block extraction and statistics
//!
//! The pipeline is extract -> calculate -> output. This library exposes each
//! stage for testing and embedding.

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::BlockstatError;
pub use extract::{TextBlock, extract_blocks};
pub use output::write_report;
pub use stats::{BlockStatistics, CommonStatistics, Report, Rounding, analyze};
