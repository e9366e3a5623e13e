//! Screenwatch computer vision pipeline
//!
//! Frame -> mask -> candidate text regions -> recognized phrases -> alert
//! decision, built on OpenCV. The capture, OCR and audio collaborators sit
//! behind the traits in [`traits`] so the pipeline is testable with synthetic
//! stand-ins.

pub mod extract;
pub mod isolate;
pub mod pipeline;
pub mod region;
pub mod utils;

// Re-export commonly used types
pub use extract::{ExtractConfig, RegionExtractor};
pub use isolate::ColorIsolator;
pub use pipeline::{AlertDecision, AlertPipeline, PipelineConfig};
pub use region::Region;

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Seams to the external collaborators
pub mod traits {
    use super::Result;
    use opencv::core::Mat;

    /// Produces one frame per call for the configured capture target.
    ///
    /// Frames are BGRA, 8 bits per channel; the alpha channel is ignored by
    /// the pipeline. Target validation happens at construction, not per call.
    pub trait FrameSource {
        fn capture(&self) -> Result<Mat>;
    }

    /// Extracts text from a single-channel region crop.
    ///
    /// An empty string is an ordinary result, not a failure. Errors are
    /// absorbed per region by the pipeline; one bad region never aborts the
    /// rest of an invocation.
    pub trait TextRecognizer {
        fn recognize(&self, crop: &Mat) -> Result<String>;
    }

    /// Fire-and-forget alert. Must return without waiting for playback and
    /// must never surface a failure into the pipeline.
    pub trait AlertSink {
        fn play(&self);
    }
}
