//! Audible alert via rodio
//!
//! The output stream is not `Send`, so it lives on a dedicated audio thread
//! fed through a channel. `play` is a channel send: it never blocks the
//! pipeline and never surfaces a playback failure.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use screenwatch_core::ConfigError;
use screenwatch_cv::traits::AlertSink;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

pub struct AudioAlert {
    tx: Sender<()>,
}

impl AudioAlert {
    /// Validates the clip is readable up front (fatal if not), then parks an
    /// audio thread waiting for play requests.
    pub fn new(clip: PathBuf) -> Result<Self> {
        File::open(&clip).map_err(|source| ConfigError::AlertClipUnreadable {
            path: clip.clone(),
            source,
        })?;

        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("screenwatch-audio".to_string())
            .spawn(move || audio_thread(clip, rx))
            .context("failed to spawn audio thread")?;
        Ok(Self { tx })
    }
}

impl AlertSink for AudioAlert {
    fn play(&self) {
        if self.tx.send(()).is_err() {
            log::warn!("audio thread is gone, alert dropped");
        }
    }
}

fn audio_thread(clip: PathBuf, rx: Receiver<()>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("no audio output device, alerts will be silent: {e}");
            // Keep draining so senders never block or error.
            while rx.recv().is_ok() {}
            return;
        }
    };

    while rx.recv().is_ok() {
        if let Err(e) = play_clip(&handle, &clip) {
            log::warn!("alert playback failed: {e:#}");
        }
    }
}

fn play_clip(handle: &OutputStreamHandle, clip: &Path) -> Result<()> {
    let file = File::open(clip).with_context(|| format!("failed to open clip {:?}", clip))?;
    let source = Decoder::new(BufReader::new(file))
        .with_context(|| format!("failed to decode clip {:?}", clip))?;
    let sink = Sink::try_new(handle).context("failed to open audio sink")?;
    sink.append(source);
    // Detach so playback outlives this iteration instead of blocking it.
    sink.detach();
    Ok(())
}
