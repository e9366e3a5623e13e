//! Image-to-alert pipeline orchestration

pub mod config;
pub mod runner;

pub use config::PipelineConfig;
pub use runner::{AlertDecision, AlertPipeline};
