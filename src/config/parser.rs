use crate::config::types::{
    ConfigOverrides, CrawlConfig, FileConfig, DEFAULT_DELAY_SECONDS, DEFAULT_MAX_PAGES,
    DEFAULT_RESULTS_DIR, DEFAULT_TIMEOUT_SECONDS,
};
use crate::config::validation::validate;
use crate::ConfigError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Loads and parses the TOML configuration file at `path`
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use crawlscope::config::load_file_config;
///
/// let file = load_file_config(Path::new("crawlscope.toml")).unwrap();
/// println!("seeds in file: {}", file.seeds.len());
/// ```
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Loads newline-delimited seed URLs from a file
///
/// Lines are trimmed and blank lines skipped. A missing or unreadable
/// file is a fatal configuration error.
pub fn load_seed_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedList {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolves the effective configuration from its three layers
///
/// Precedence, weakest first: built-in defaults, the config file, CLI
/// overrides. Seeds are collected from the file's `seeds` array, repeated
/// `--url` flags, and the `--list` file; the merged set is validated
/// before the config is returned.
pub fn resolve_config(
    file: Option<FileConfig>,
    cli: ConfigOverrides,
) -> Result<CrawlConfig, ConfigError> {
    let file = file.unwrap_or_default();

    let mut seed_strings = file.seeds;
    seed_strings.extend(cli.urls);
    if let Some(path) = &cli.seed_list {
        seed_strings.extend(load_seed_list(path)?);
    }

    // First occurrence wins; a seed listed twice is crawled once
    let mut unique = HashSet::new();
    let mut seeds = Vec::new();
    for raw in &seed_strings {
        let url = parse_seed(raw)?;
        if unique.insert(url.as_str().to_string()) {
            seeds.push(url);
        }
    }

    let config = CrawlConfig {
        seeds,
        max_pages: cli
            .max_pages
            .or(file.crawler.max_pages)
            .unwrap_or(DEFAULT_MAX_PAGES),
        delay: Duration::from_secs(
            cli.delay_seconds
                .or(file.crawler.delay_seconds)
                .unwrap_or(DEFAULT_DELAY_SECONDS),
        ),
        request_timeout: Duration::from_secs(
            cli.request_timeout_seconds
                .or(file.crawler.request_timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        ),
        dedup_params: cli.dedup_params || file.crawler.dedup_params.unwrap_or(false),
        save: cli.save || file.output.save.unwrap_or(false),
        results_dir: cli
            .results_dir
            .or(file.output.results_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR)),
    };

    validate(&config)?;
    Ok(config)
}

/// Parses a seed URL, requiring an absolute http(s) URL with a host
fn parse_seed(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidSeed {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidSeed {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidSeed {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
