//! Extraction configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tunables for the mask-to-regions stage. The defaults are the reference
/// values for a 1080p capture; the size minima in particular are resolution
/// dependent and belong in configuration, not in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Gaussian kernel used to suppress speckle before thresholding.
    pub blur_kernel: (i32, i32),
    /// Rectangular dilation element, deliberately wider than tall so
    /// horizontally adjacent letters merge while stacked lines stay separate.
    pub dilate_kernel: (i32, i32),
    pub dilate_iterations: i32,
    /// Rectangles at or below these sizes are discarded as noise.
    pub min_width: i32,
    pub min_height: i32,
    /// When set, the blurred, thresholded and dilated intermediates are
    /// written here on every run.
    pub dump_dir: Option<PathBuf>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            blur_kernel: (7, 7),
            dilate_kernel: (12, 4),
            dilate_iterations: 2,
            min_width: 200,
            min_height: 20,
            dump_dir: None,
        }
    }
}

impl ExtractConfig {
    /// Default stage parameters with capture-resolution-specific size minima.
    pub fn with_minima(min_width: i32, min_height: i32) -> Self {
        Self {
            min_width,
            min_height,
            ..Default::default()
        }
    }
}
