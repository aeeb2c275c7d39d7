//! Crawl coordinator - the main BFS loop
//!
//! This module drives the crawl: it pops URLs from the frontier in FIFO
//! order, fetches them, extracts and filters links, and feeds unseen links
//! back into the frontier until the page budget is exhausted, the frontier
//! empties, or the crawl is cancelled. Per-URL failures are reported and
//! skipped; nothing inside the loop aborts a crawl.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::Fetch;
use crate::crawler::frontier::Frontier;
use crate::crawler::limiter::RateLimiter;
use crate::crawler::parser::extract_links;
use crate::output::{CrawlReport, Reporter};
use crate::url::{param_signature, AllowedDomains, SignatureSet};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Drives one crawl from seeds to final report
///
/// The crawler exclusively owns the frontier, the discovered-URL set, and
/// the admitted-signature set; collaborators only observe read-only
/// snapshots through the [`Reporter`]. Each instance runs one crawl, so
/// several independent crawls can coexist in a process.
pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    scope: AllowedDomains,
    frontier: Frontier,
    discovered: BTreeSet<String>,
    signatures: SignatureSet,
    limiter: RateLimiter,
    cancel: Arc<AtomicBool>,
}

impl<F: Fetch> Crawler<F> {
    /// Creates a crawler with the scope computed from the configured seeds
    ///
    /// All seeds are queued up front; the allowed-domain set is fixed here
    /// and never changes for the crawl's duration.
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let scope = AllowedDomains::from_seeds(&config.seeds);
        let limiter = RateLimiter::new(config.delay);

        let mut frontier = Frontier::new();
        let mut discovered = BTreeSet::new();
        for seed in &config.seeds {
            discovered.insert(seed.as_str().to_string());
            frontier.push(seed.clone());
        }

        Self {
            config,
            fetcher,
            scope,
            frontier,
            discovered,
            signatures: SignatureSet::new(),
            limiter,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the crawl at the next frontier-pop boundary
    ///
    /// Already-collected state is not lost: [`Crawler::run`] still returns
    /// the accumulated report after a cancellation.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Runs the crawl to completion and returns the final snapshot
    ///
    /// The loop ends on budget exhaustion, frontier exhaustion, or
    /// cancellation, whichever comes first.
    pub async fn run<R: Reporter>(mut self, reporter: &mut R) -> CrawlReport {
        let started_at = chrono::Utc::now();
        let start = std::time::Instant::now();

        tracing::info!(
            seeds = self.config.seeds.len(),
            domains = self.scope.len(),
            max_pages = self.config.max_pages,
            "starting crawl"
        );

        while self.frontier.visited_count() < self.config.max_pages {
            if self.cancel.load(Ordering::Relaxed) {
                tracing::info!("crawl cancelled, reporting collected results");
                break;
            }

            let url = match self.frontier.pop() {
                Some(url) => url,
                None => {
                    tracing::info!("frontier empty, crawl complete");
                    break;
                }
            };

            tracing::debug!(url = %url, queued = self.frontier.len(), "visiting");
            reporter.on_visit(&url, self.frontier.visited_count(), self.config.max_pages);

            self.visit(&url, reporter).await;
            self.limiter.wait().await;
        }

        tracing::info!(
            visited = self.frontier.visited_count(),
            discovered = self.discovered.len(),
            elapsed = ?start.elapsed(),
            "crawl finished"
        );

        CrawlReport {
            started_at,
            elapsed: start.elapsed(),
            visited: self.frontier.visited().iter().cloned().collect(),
            discovered: self.discovered,
            signatures: self.signatures.into_sorted(),
            dedup_enabled: self.config.dedup_params,
            budget: self.config.max_pages,
        }
    }

    /// Fetches one URL and absorbs its links
    ///
    /// Failures are contained here: the URL stays visited, the budget has
    /// already advanced, and the loop continues.
    async fn visit<R: Reporter>(&mut self, url: &Url, reporter: &mut R) {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "fetch failed, skipping");
                reporter.on_fetch_error(url, &e);
                return;
            }
        };

        // Resolve against the effective base: the final URL after any
        // server-side redirect, not the URL that was requested.
        let links = match extract_links(&page.body, &page.final_url) {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "link extraction failed, skipping");
                reporter.on_extract_error(url, &e);
                return;
            }
        };

        for link in links {
            if !self.admit(&link) {
                continue;
            }
            self.discovered.insert(link.as_str().to_string());
            self.frontier.push(link);
        }
    }

    /// Applies the scope filter and, when enabled, signature deduplication
    ///
    /// Rejections here are expected filtering outcomes, not errors: the
    /// link simply never enters the frontier or the discovered set.
    fn admit(&mut self, link: &Url) -> bool {
        if !self.scope.is_in_scope(link) {
            return false;
        }

        if self.config.dedup_params {
            let signature = param_signature(link);
            if !self.signatures.admit(&signature) {
                tracing::debug!(url = %link, signature = %signature, "duplicate parameter signature");
                return false;
            }
        }

        true
    }
}
