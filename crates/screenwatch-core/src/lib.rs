//! Screenwatch domain logic.
//!
//! Configuration, watch-list handling and fuzzy phrase matching. Everything
//! that can be decided without looking at pixels lives here; the OpenCV
//! pipeline is in the `screenwatch-cv` crate.

pub mod config;
pub mod matcher;
pub mod watchlist;

// Re-export commonly used types
pub use config::{ConfigError, HsvBounds, WatchConfig};
pub use matcher::PhraseMatcher;
pub use watchlist::WatchList;
