//! Pipeline configuration

use crate::extract::ExtractConfig;
use screenwatch_core::{config::WatchConfig, matcher, HsvBounds};
use serde::{Deserialize, Serialize};

/// Resolved per-run settings for the pipeline. Built once at startup from the
/// process configuration and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub bounds: HsvBounds,
    pub extract: ExtractConfig,
    pub match_cutoff: f64,
}

impl PipelineConfig {
    /// Resolve the mode name and extraction minima out of a [`WatchConfig`].
    pub fn from_watch_config(config: &WatchConfig) -> Self {
        let mut extract =
            ExtractConfig::with_minima(config.min_region_width, config.min_region_height);
        extract.dump_dir = config.debug_dump_dir.clone();

        Self {
            bounds: config.bounds(),
            extract,
            match_cutoff: config.match_cutoff,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bounds: HsvBounds::full_range(),
            extract: ExtractConfig::default(),
            match_cutoff: matcher::DEFAULT_CUTOFF,
        }
    }
}
