//! Screen capture via xcap

use anyhow::Context;
use opencv::core::Mat;
use screenwatch_core::ConfigError;
use screenwatch_cv::traits::FrameSource;
use screenwatch_cv::utils::ImageUtils;

/// Captures frames from one explicitly selected monitor.
///
/// The selector is a zero-based index into the backend's monitor list and is
/// resolved exactly once, at startup; a bad index is a fatal configuration
/// error rather than something discovered mid-run.
pub struct MonitorSource {
    monitor: xcap::Monitor,
}

impl MonitorSource {
    pub fn new(index: usize) -> Result<Self, ConfigError> {
        let mut monitors =
            xcap::Monitor::all().map_err(|e| ConfigError::CaptureBackend(e.to_string()))?;
        let available = monitors.len();
        if index >= available {
            return Err(ConfigError::MonitorOutOfRange { index, available });
        }
        Ok(Self {
            monitor: monitors.swap_remove(index),
        })
    }
}

impl FrameSource for MonitorSource {
    fn capture(&self) -> screenwatch_cv::Result<Mat> {
        let rgba = self
            .monitor
            .capture_image()
            .context("screen capture failed")?;
        ImageUtils::rgba_to_bgra_mat(&rgba)
    }
}
