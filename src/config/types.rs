// Configuration type definitions

use serde::Deserialize;

use crate::stats::Rounding;

/// Statistics configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub rounding: Rounding,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stats: StatsConfig,
}
