//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and failure classification
//! - HTML link extraction
//! - The BFS frontier and inter-request rate limiting
//! - Overall crawl orchestration

mod coordinator;
mod fetcher;
mod frontier;
mod limiter;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{Fetch, FetchedPage, HttpFetcher};
pub use frontier::Frontier;
pub use limiter::RateLimiter;
pub use parser::extract_links;

use crate::config::CrawlConfig;
use crate::output::{CrawlReport, Reporter};
use crate::CrawlscopeError;

/// Runs a complete crawl with the reqwest-backed fetcher
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configured timeout
/// 2. Seed the frontier and fix the allowed-domain scope
/// 3. Drive the BFS loop until the budget or frontier is exhausted
/// 4. Return the final visited/discovered snapshot
///
/// # Arguments
///
/// * `config` - The resolved crawl configuration
/// * `reporter` - Receives per-visit progress and per-URL warnings
pub async fn crawl<R: Reporter>(
    config: CrawlConfig,
    reporter: &mut R,
) -> Result<CrawlReport, CrawlscopeError> {
    let fetcher = HttpFetcher::new(config.request_timeout)?;
    let crawler = Crawler::new(config, fetcher);
    Ok(crawler.run(reporter).await)
}
