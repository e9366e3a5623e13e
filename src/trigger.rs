//! Debounced key-state trigger loop
//!
//! Cooperative polling driver for the pipeline: a held left-shift +
//! left-click combo triggers a run, backspace exits. At most one invocation
//! is ever in flight, and termination is only checked between invocations;
//! an in-flight run always completes.

use device_query::{DeviceQuery, DeviceState, Keycode};
use screenwatch_cv::AlertPipeline;
use std::thread;
use std::time::Duration;

pub struct TriggerLoop {
    device: DeviceState,
    poll_interval: Duration,
    debounce: Duration,
}

impl TriggerLoop {
    pub fn new(poll_interval: Duration, debounce: Duration) -> Self {
        Self {
            device: DeviceState::new(),
            poll_interval,
            debounce,
        }
    }

    /// Blocks until the exit key is seen. The debounce sleep runs before the
    /// capture (the original screen state needs a beat to settle after the
    /// click) and doubles as suppression against re-firing on a held combo.
    pub fn run(&self, pipeline: &AlertPipeline) {
        log::info!("watching; hold left shift and left-click to scan, backspace to exit");
        loop {
            let keys = self.device.get_keys();
            if keys.contains(&Keycode::Backspace) {
                log::info!("exit key pressed, shutting down");
                break;
            }

            let mouse = self.device.get_mouse();
            let left_button = mouse.button_pressed.get(1).copied().unwrap_or(false);
            if keys.contains(&Keycode::LShift) && left_button {
                thread::sleep(self.debounce);
                match pipeline.run() {
                    Ok(decision) if decision.matched => {
                        log::info!(
                            "match found ({} region(s), {}ms)",
                            decision.regions,
                            decision.processing_time_ms
                        );
                    }
                    Ok(decision) => {
                        log::info!(
                            "no match ({} region(s), {} candidate(s), {}ms)",
                            decision.regions,
                            decision.candidates,
                            decision.processing_time_ms
                        );
                    }
                    Err(e) => log::warn!("pipeline run failed: {e:#}"),
                }
            } else {
                thread::sleep(self.poll_interval);
            }
        }
    }
}
