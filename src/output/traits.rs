//! Reporter trait and crawl snapshot types
//!
//! The reporter is the seam between the crawl engine and the console:
//! implementations only observe, all crawl state stays owned by the
//! orchestrator.

use crate::{ExtractError, FetchError};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::time::Duration;
use url::Url;

/// Final snapshot of a crawl run
///
/// The sets are ordered so consumers can render or persist them sorted
/// without extra work.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Wall-clock time the crawl started
    pub started_at: DateTime<Utc>,

    /// Total crawl duration
    pub elapsed: Duration,

    /// Every URL a fetch was attempted for
    pub visited: BTreeSet<String>,

    /// Every URL discovered: visited URLs plus every admitted link
    pub discovered: BTreeSet<String>,

    /// Admitted parameter signatures (empty unless dedup mode was active)
    pub signatures: BTreeSet<String>,

    /// Whether parameter-signature deduplication was active
    pub dedup_enabled: bool,

    /// The configured page-visit budget
    pub budget: usize,
}

impl CrawlReport {
    /// Discovered URLs that carry a query component
    pub fn with_parameters(&self) -> impl Iterator<Item = &str> {
        self.discovered
            .iter()
            .filter(|url| url.contains('?'))
            .map(String::as_str)
    }
}

/// Receives progress events from the crawl loop
pub trait Reporter {
    /// A URL is being visited; `visited` counts this visit and `budget`
    /// is the configured maximum
    fn on_visit(&mut self, url: &Url, visited: usize, budget: usize);

    /// A fetch failed; the URL stays visited and the crawl continues
    fn on_fetch_error(&mut self, url: &Url, error: &FetchError);

    /// Link extraction failed; the page contributes no links
    fn on_extract_error(&mut self, url: &Url, error: &ExtractError);
}

/// Reporter that discards every event
///
/// Used where progress display is unwanted, e.g. tests or library
/// embedding.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_visit(&mut self, _url: &Url, _visited: usize, _budget: usize) {}

    fn on_fetch_error(&mut self, _url: &Url, _error: &FetchError) {}

    fn on_extract_error(&mut self, _url: &Url, _error: &ExtractError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(discovered: &[&str]) -> CrawlReport {
        CrawlReport {
            started_at: Utc::now(),
            elapsed: Duration::from_secs(1),
            visited: BTreeSet::new(),
            discovered: discovered.iter().map(|s| s.to_string()).collect(),
            signatures: BTreeSet::new(),
            dedup_enabled: false,
            budget: 50,
        }
    }

    #[test]
    fn test_with_parameters_filters_query_urls() {
        let report = report_with(&[
            "https://example.com/a",
            "https://example.com/p?id=1",
            "https://example.com/q?x=1&y=2",
        ]);

        let with_params: Vec<&str> = report.with_parameters().collect();
        assert_eq!(
            with_params,
            vec!["https://example.com/p?id=1", "https://example.com/q?x=1&y=2"]
        );
    }

    #[test]
    fn test_with_parameters_empty() {
        let report = report_with(&["https://example.com/a"]);
        assert_eq!(report.with_parameters().count(), 0);
    }
}
