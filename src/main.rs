//! screenwatch: watches a monitor for color-banded text and plays an alert
//! when a recognized phrase fuzzily matches the configured watch-list.

mod collab;
mod trigger;

use anyhow::Result;
use clap::Parser;
use collab::{AudioAlert, MonitorSource, TesseractRecognizer};
use screenwatch_core::{WatchConfig, WatchList};
use screenwatch_cv::{AlertPipeline, PipelineConfig};
use std::path::PathBuf;
use std::time::Duration;
use trigger::TriggerLoop;

#[derive(Parser, Debug)]
#[command(name = "screenwatch", about = "Screen OCR watch-list alerter")]
struct Cli {
    /// JSON config file; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Isolation mode override (e.g. "sextants", "equipment")
    #[arg(short, long)]
    mode: Option<String>,

    /// Zero-based capture monitor override
    #[arg(long)]
    monitor: Option<usize>,

    /// Watch-list file override
    #[arg(short, long)]
    watch_list: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WatchConfig::load(path)?,
        None => WatchConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(monitor) = cli.monitor {
        config.monitor = monitor;
    }
    if let Some(watch_list) = cli.watch_list {
        config.watch_list = watch_list;
    }

    // Everything below is fatal before the loop starts; nothing after it is.
    let watch_list = WatchList::load(&config.watch_list)?;
    log::info!(
        "loaded {} watch phrase(s) from {:?}, mode '{}'",
        watch_list.len(),
        config.watch_list,
        config.mode
    );

    let frames = MonitorSource::new(config.monitor)?;
    let recognizer = TesseractRecognizer::new(&config.ocr_lang);
    let alerts = AudioAlert::new(config.alert_clip.clone())?;

    let pipeline = AlertPipeline::new(
        PipelineConfig::from_watch_config(&config),
        watch_list,
        Box::new(frames),
        Box::new(recognizer),
        Box::new(alerts),
    );

    TriggerLoop::new(
        Duration::from_millis(config.poll_interval_ms),
        Duration::from_millis(config.debounce_ms),
    )
    .run(&pipeline);

    Ok(())
}
