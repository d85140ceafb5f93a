//! Capture/inference loop.

mod watch;

pub use watch::{WatchOptions, WatchSummary, run_watch};
