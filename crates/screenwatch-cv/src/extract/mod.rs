//! Candidate region extraction

pub mod config;
pub mod extractor;

pub use config::ExtractConfig;
pub use extractor::RegionExtractor;
