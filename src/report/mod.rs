//! Detection log analysis: filtering, aggregation, rendering, CSV export.
//!
//! The read side of the log file. The watch loop is the only writer; these
//! functions run in a separate invocation and tolerate the log being absent,
//! empty, or mid-write (the store's self-healing parse is the safety net).

mod export;
mod filter;
mod render;
mod summary;

pub use export::export_csv;
pub use filter::LogFilter;
pub use render::print_report;
pub use summary::{LogSummary, category_distribution, daily_counts, summarize};
