use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default page-visit budget
pub const DEFAULT_MAX_PAGES: usize = 50;

/// Default inter-request delay in seconds
pub const DEFAULT_DELAY_SECONDS: u64 = 0;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default results directory for save mode
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Fully resolved, validated crawl configuration
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URLs; the allowed-domain scope is computed from these
    pub seeds: Vec<Url>,

    /// Maximum number of pages to visit (not discover)
    pub max_pages: usize,

    /// Pause inserted after every fetch attempt
    pub delay: Duration,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Crawl at most one URL per query-parameter signature
    pub dedup_params: bool,

    /// Write result files after the crawl
    pub save: bool,

    /// Directory the result files are written to
    pub results_dir: PathBuf,
}

/// Contents of the optional TOML configuration file
///
/// Every field is optional so the file only needs to name what it
/// overrides; CLI flags in turn override the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub seeds: Vec<String>,

    #[serde(default)]
    pub crawler: CrawlerSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[crawler]` section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlerSection {
    #[serde(rename = "max-pages")]
    pub max_pages: Option<usize>,

    #[serde(rename = "delay-seconds")]
    pub delay_seconds: Option<u64>,

    #[serde(rename = "request-timeout-seconds")]
    pub request_timeout_seconds: Option<u64>,

    #[serde(rename = "dedup-params")]
    pub dedup_params: Option<bool>,
}

/// `[output]` section of the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub save: Option<bool>,

    #[serde(rename = "results-dir")]
    pub results_dir: Option<PathBuf>,
}

/// Options taken from the command line; `None` means "not given"
///
/// Boolean flags only turn features on: an absent flag defers to the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub urls: Vec<String>,
    pub seed_list: Option<PathBuf>,
    pub max_pages: Option<usize>,
    pub delay_seconds: Option<u64>,
    pub request_timeout_seconds: Option<u64>,
    pub dedup_params: bool,
    pub save: bool,
    pub results_dir: Option<PathBuf>,
}
