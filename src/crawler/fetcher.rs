//! HTTP fetcher implementation
//!
//! This module handles the network side of the crawl:
//! - Building the HTTP client with the crawler's user agent and timeout
//! - GET requests with redirect following
//! - Classifying failures into the recoverable [`FetchError`] variants
//!
//! The [`Fetch`] trait is the seam between the crawl loop and the network:
//! the orchestrator is generic over it, so tests drive the loop from an
//! in-memory page graph instead of a live server.

use crate::FetchError;
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after any server-side redirects; link resolution uses
    /// this as the base, not the URL that was requested
    pub final_url: Url,

    /// Response body
    pub body: String,
}

/// Performs the network request for one URL
pub trait Fetch {
    /// Fetches the page at `url`, returning the effective base URL and
    /// body on success or a typed, recoverable failure
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// reqwest-backed fetcher used by the binary
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher with the given per-request timeout
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crawlscope::crawler::HttpFetcher;
    /// use std::time::Duration;
    ///
    /// let fetcher = HttpFetcher::new(Duration::from_secs(10)).unwrap();
    /// ```
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let user_agent = format!("crawlscope/{}", env!("CARGO_PKG_VERSION"));

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|e| classify(url, e))?;

        Ok(FetchedPage { final_url, body })
    }
}

/// Classifies a reqwest error into the fetch failure taxonomy
fn classify(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fetcher() {
        let fetcher = HttpFetcher::new(Duration::from_secs(10));
        assert!(fetcher.is_ok());
    }

    // Fetch behavior against real responses (redirects, status errors,
    // timeouts) is covered by the wiremock integration tests.
}
