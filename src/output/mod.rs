//! Output module for progress reporting and result persistence
//!
//! This module handles:
//! - The reporter seam the crawl engine emits progress events through
//! - Console rendering (banner, progress bar, final summary)
//! - Writing the result files in save mode

mod console;
mod traits;
mod writer;

pub use console::ConsoleReporter;
pub use traits::{CrawlReport, NullReporter, Reporter};
pub use writer::{
    write_results, DEDUP_PARAMS_FILE, FOUND_PARAMETERS_FILE, FOUND_URLS_FILE,
};
