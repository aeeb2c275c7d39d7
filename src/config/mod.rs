//! Configuration module for crawlscope
//!
//! The effective configuration is resolved from three layers, weakest
//! first: built-in defaults, an optional TOML configuration file, and
//! command-line flags. Seed URLs may come from repeated `--url` flags, a
//! newline-delimited `--list` file, or the config file's `seeds` array.
//!
//! # Example
//!
//! ```no_run
//! use crawlscope::config::{load_file_config, resolve_config, ConfigOverrides};
//! use std::path::Path;
//!
//! let file = load_file_config(Path::new("crawlscope.toml")).unwrap();
//! let config = resolve_config(Some(file), ConfigOverrides::default()).unwrap();
//! println!("crawling up to {} pages", config.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ConfigOverrides, CrawlConfig, CrawlerSection, FileConfig, OutputSection, DEFAULT_DELAY_SECONDS,
    DEFAULT_MAX_PAGES, DEFAULT_RESULTS_DIR, DEFAULT_TIMEOUT_SECONDS,
};

// Re-export parser functions
pub use parser::{load_file_config, load_seed_list, resolve_config};
