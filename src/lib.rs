//! Crawlscope: a breadth-first site mapper
//!
//! This crate implements a BFS web crawler that discovers every URL reachable
//! within the domain scope fixed by its seed URLs, with an optional
//! query-parameter-signature deduplication mode that collapses parametrically
//! equivalent pages into a single representative visit.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for crawlscope operations
#[derive(Debug, Error)]
pub enum CrawlscopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// The only fatal error class: raised before the crawl loop starts and
/// terminates the process with a non-zero status.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read seed list {path}: {source}")]
    SeedList {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-URL fetch failures
///
/// Recoverable: the crawl loop logs the failure, leaves the URL marked
/// visited, and continues. All variants are handled identically.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network failure for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

/// Per-URL link extraction failures; recoverable, the page simply
/// contributes no links
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid link selector: {0}")]
    Selector(String),
}

/// Result type alias for crawlscope operations
pub type Result<T> = std::result::Result<T, CrawlscopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, Crawler, Fetch, FetchedPage, HttpFetcher};
pub use output::{CrawlReport, NullReporter, Reporter};

pub use crate::url::{param_signature, AllowedDomains, SignatureSet};
