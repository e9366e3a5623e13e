//! Single-pass pipeline runner
//!
//! capture -> isolate -> extract -> recognize per region -> match -> alert.
//! Stages run strictly in order within one invocation; the caller guarantees
//! at most one invocation in flight. The only thing allowed to outlive a run
//! is the fire-and-forget alert playback.

use super::config::PipelineConfig;
use crate::extract::RegionExtractor;
use crate::isolate::ColorIsolator;
use crate::traits::{AlertSink, FrameSource, TextRecognizer};
use crate::Result;
use anyhow::Context;
use opencv::prelude::*;
use screenwatch_core::{PhraseMatcher, WatchList};
use serde::Serialize;
use std::time::Instant;

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone, Serialize)]
pub struct AlertDecision {
    pub matched: bool,
    pub regions: usize,
    pub candidates: usize,
    pub processing_time_ms: u64,
}

/// Orchestrates one frame through the detection stages.
pub struct AlertPipeline {
    isolator: ColorIsolator,
    extractor: RegionExtractor,
    matcher: PhraseMatcher,
    watch_list: WatchList,
    frames: Box<dyn FrameSource>,
    recognizer: Box<dyn TextRecognizer>,
    alerts: Box<dyn AlertSink>,
}

impl AlertPipeline {
    pub fn new(
        config: PipelineConfig,
        watch_list: WatchList,
        frames: Box<dyn FrameSource>,
        recognizer: Box<dyn TextRecognizer>,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        Self {
            isolator: ColorIsolator::new(config.bounds),
            extractor: RegionExtractor::new(config.extract),
            matcher: PhraseMatcher::new(config.match_cutoff),
            watch_list,
            frames,
            recognizer,
            alerts,
        }
    }

    /// Run one invocation to completion. Zero regions, empty recognition and
    /// no match are all ordinary outcomes; the only errors surfaced here are
    /// capture or image-processing failures.
    pub fn run(&self) -> Result<AlertDecision> {
        let start = Instant::now();

        let frame = self.frames.capture().context("frame capture failed")?;
        let size = frame.size()?;
        log::debug!("captured {}x{} frame", size.width, size.height);

        let mask = self.isolator.isolate(&frame)?;
        let regions = self.extractor.extract_regions(&mask)?;

        // Sequential, left to right. Ordering only matters for which pair
        // short-circuits the matcher first.
        let mut candidates = Vec::with_capacity(regions.len());
        for region in &regions {
            match self.recognizer.recognize(&region.crop) {
                Ok(text) if !text.trim().is_empty() => candidates.push(text),
                Ok(_) => log::debug!("region at x={} produced no text", region.x),
                // One bad region must not stop the rest of the invocation.
                Err(e) => log::warn!("recognizer failed on region at x={}: {e:#}", region.x),
            }
        }

        let matched = self.matcher.has_match(&candidates, &self.watch_list);
        if matched {
            // Fire and forget; playback runs out concurrently with whatever
            // the caller does next.
            self.alerts.play();
        }

        let decision = AlertDecision {
            matched,
            regions: regions.len(),
            candidates: candidates.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        log::debug!(
            "pipeline finished: {} region(s), {} candidate(s), matched={}, {}ms",
            decision.regions,
            decision.candidates,
            decision.matched,
            decision.processing_time_ms
        );
        Ok(decision)
    }
}
