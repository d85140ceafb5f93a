//! The synchronous capture/inference/gate/log loop.
//!
//! Single-threaded polling loop: read a frame, classify it, run the result
//! through the detection gate, and append accepted detections to the log.
//! Inference is throttled to a minimum processing interval and every idle
//! iteration sleeps briefly so the loop never busy-spins. Cancellation is
//! cooperative through an atomic flag polled once per iteration.

use crate::capture::{FrameRead, FrameSource};
use crate::constants::{
    DEFAULT_FRAME_INTERVAL_MS, IDLE_SLEEP_MS, READ_BACKOFF_MS, confidence::DECIMAL_PLACES,
};
use crate::error::Result;
use crate::gate::{Decision, DetectionGate};
use crate::inference::Classifier;
use crate::species::{SpeciesDb, status_display};
use crate::store::{DetectionRecord, LogStore};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Tunables for the watch loop.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Minimum interval between inference passes.
    pub frame_interval: Duration,
    /// Sleep between iterations while throttled.
    pub idle_sleep: Duration,
    /// Backoff after a transient frame read failure.
    pub read_backoff: Duration,
    /// Whether to show the live status spinner.
    pub progress_enabled: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            idle_sleep: Duration::from_millis(IDLE_SLEEP_MS),
            read_backoff: Duration::from_millis(READ_BACKOFF_MS),
            progress_enabled: false,
        }
    }
}

/// Counters for one watch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    /// Frames successfully read from the source.
    pub frames_read: u64,
    /// Frames that produced a non-sentinel classification.
    pub detections: u64,
    /// Detections accepted and appended to the log.
    pub accepted: u64,
    /// Rejections for confidence below the threshold.
    pub rejected_low_confidence: u64,
    /// Rejections for excluded labels.
    pub rejected_excluded: u64,
    /// Rejections inside a cooldown window.
    pub rejected_cooldown: u64,
    /// Accepted detections that failed to append to the log.
    pub append_errors: u64,
}

/// Run the capture loop until the source ends or `running` is cleared.
///
/// The log file is initialized (created or repaired) before the first frame.
/// Append failures are reported and skipped rather than stopping detection.
#[allow(clippy::too_many_arguments)]
pub fn run_watch(
    source: &mut dyn FrameSource,
    classifier: &dyn Classifier,
    gate: &mut DetectionGate,
    species: &SpeciesDb,
    store: &LogStore,
    running: &AtomicBool,
    options: &WatchOptions,
) -> Result<WatchSummary> {
    store.init()?;

    let spinner = create_spinner(options.progress_enabled);
    let mut summary = WatchSummary::default();
    let mut last_process: Option<Instant> = None;

    info!(
        "Watching for detections (threshold {:.0}%, cooldown {}s)",
        gate.min_confidence() * 100.0,
        gate.cooldown().as_secs()
    );

    while running.load(Ordering::Relaxed) {
        // Frame throttle: skip inference inside the minimum processing interval.
        if let Some(last) = last_process
            && last.elapsed() < options.frame_interval
        {
            std::thread::sleep(options.idle_sleep);
            continue;
        }

        let frame = match source.next_frame()? {
            FrameRead::Frame(frame) => frame,
            FrameRead::Transient => {
                warn!("Can't get image from camera, retrying");
                std::thread::sleep(options.read_backoff);
                continue;
            }
            FrameRead::End => {
                debug!("Frame source exhausted");
                break;
            }
        };

        last_process = Some(Instant::now());
        summary.frames_read += 1;
        set_spinner_message(
            spinner.as_ref(),
            format!("{} frames", summary.frames_read),
        );

        let Some(prediction) = classifier.classify(&frame)? else {
            continue;
        };
        summary.detections += 1;

        let now = Local::now().naive_local();
        match gate.evaluate(&prediction.label, prediction.confidence, now) {
            Decision::Accept => {
                let details = species.lookup(&prediction.label);
                let status = status_display(&details.status);
                let record = DetectionRecord {
                    timestamp: now,
                    class_name: prediction.label.clone(),
                    category: prediction.category.clone(),
                    confidence_score: prediction.confidence,
                };

                if let Err(e) = store.append(&record) {
                    // Losing one entry is preferred over halting detection.
                    error!("Failed to log detection: {e}");
                    summary.append_errors += 1;
                } else {
                    summary.accepted += 1;
                    info!(
                        "{} {} ({}) {:.prec$}% - {} [{}]",
                        status.icon,
                        prediction.label,
                        prediction.category,
                        prediction.confidence * 100.0,
                        details.scientific_name,
                        details.status,
                        prec = DECIMAL_PLACES,
                    );
                    set_spinner_message(
                        spinner.as_ref(),
                        format!("logged {} ({} total)", prediction.label, summary.accepted),
                    );
                }
            }
            Decision::RejectCooldown { remaining_secs } => {
                summary.rejected_cooldown += 1;
                info!(
                    "Cooldown: {} recently logged, new log in {remaining_secs}s",
                    prediction.label
                );
            }
            Decision::RejectLowConfidence => {
                summary.rejected_low_confidence += 1;
                debug!(
                    "Below threshold: {} at {:.prec$}%",
                    prediction.label,
                    prediction.confidence * 100.0,
                    prec = DECIMAL_PLACES,
                );
            }
            Decision::RejectExcludedLabel => {
                summary.rejected_excluded += 1;
                debug!("Excluded label: {}", prediction.label);
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    info!(
        "Watch complete: {} frames, {} detections, {} logged, {} in cooldown",
        summary.frames_read, summary.detections, summary.accepted, summary.rejected_cooldown
    );

    Ok(summary)
}

fn create_spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} watching {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    Some(pb)
}

fn set_spinner_message(spinner: Option<&ProgressBar>, message: String) {
    if let Some(pb) = spinner {
        pb.set_message(message);
    }
}
