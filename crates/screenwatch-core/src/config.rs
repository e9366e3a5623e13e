//! Process configuration
//!
//! Loaded once at startup and treated as immutable for the process lifetime.
//! Core logic never reads ambient globals; the resolved configuration is
//! passed down explicitly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal startup errors. None of these can occur once the main loop is
/// running; everything observable after startup is an ordinary "no alert"
/// outcome, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read watch list '{path}': {source}")]
    WatchListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("watch list '{path}' contains no phrases")]
    WatchListEmpty { path: PathBuf },
    #[error("monitor index {index} is out of range ({available} monitors available)")]
    MonitorOutOfRange { index: usize, available: usize },
    #[error("capture backend unavailable: {0}")]
    CaptureBackend(String),
    #[error("alert clip '{path}' is not readable: {source}")]
    AlertClipUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid HSV bounds: {0}")]
    InvalidBounds(String),
}

/// Inclusive lower/upper corners of an HSV window, OpenCV 8-bit convention
/// (hue 0-179, saturation and value 0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvBounds {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvBounds {
    pub const HUE_MAX: u8 = 179;

    /// Validated constructor: each lower component must not exceed the
    /// corresponding upper one, and hue must stay in 0-179.
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Result<Self, ConfigError> {
        if lower[0] > Self::HUE_MAX || upper[0] > Self::HUE_MAX {
            return Err(ConfigError::InvalidBounds(format!(
                "hue must be <= {}, got {} / {}",
                Self::HUE_MAX,
                lower[0],
                upper[0]
            )));
        }
        for c in 0..3 {
            if lower[c] > upper[c] {
                return Err(ConfigError::InvalidBounds(format!(
                    "lower {:?} exceeds upper {:?} in component {}",
                    lower, upper, c
                )));
            }
        }
        Ok(Self { lower, upper })
    }

    /// The widest valid window: matches every pixel. Used as the fallback for
    /// unrecognized mode names so color discrimination is effectively off
    /// rather than the run failing.
    pub fn full_range() -> Self {
        Self {
            lower: [0, 0, 0],
            upper: [Self::HUE_MAX, 255, 255],
        }
    }

    /// Resolve a named isolation mode to its HSV window.
    ///
    /// The presets target the narrow color bands the watched text renders in.
    /// Unknown names fall back to the full range with a warning.
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "sextants" => Self {
                lower: [102, 57, 180],
                upper: [103, 61, 255],
            },
            "equipment" => Self {
                lower: [120, 119, 165],
                upper: [121, 123, 255],
            },
            other => {
                log::warn!("unknown isolation mode '{other}', disabling color discrimination");
                Self::full_range()
            }
        }
    }
}

/// Top-level configuration for one run of the watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Named isolation mode, resolved through [`HsvBounds::for_mode`].
    pub mode: String,
    /// Newline-delimited phrase file, one phrase per line.
    pub watch_list: PathBuf,
    /// Zero-based index into the capture backend's monitor list.
    pub monitor: usize,
    /// Normalized-similarity cutoff for a phrase match.
    pub match_cutoff: f64,
    /// Minimum candidate width in pixels (reference scale 1080p).
    pub min_region_width: i32,
    /// Minimum candidate height in pixels (reference scale 1080p).
    pub min_region_height: i32,
    /// Tesseract language code.
    pub ocr_lang: String,
    /// Sound played on a match.
    pub alert_clip: PathBuf,
    /// Idle sleep between key-state polls.
    pub poll_interval_ms: u64,
    /// Delay between a trigger firing and the capture, also suppresses
    /// re-firing while the combo stays held.
    pub debounce_ms: u64,
    /// When set, intermediate pipeline images are written here per run.
    pub debug_dump_dir: Option<PathBuf>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            mode: "equipment".to_string(),
            watch_list: "config/watch_list.txt".into(),
            monitor: 0,
            match_cutoff: 0.90,
            min_region_width: 200,
            min_region_height: 20,
            ocr_lang: "eng".to_string(),
            alert_clip: "assets/quiet_alert.mp3".into(),
            poll_interval_ms: 20,
            debounce_ms: 250,
            debug_dump_dir: None,
        }
    }
}

impl WatchConfig {
    /// Load from a JSON file. Any missing field takes its default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// HSV window for the configured mode.
    pub fn bounds(&self) -> HsvBounds {
        HsvBounds::for_mode(&self.mode)
    }
}
