//! crawlscope main entry point
//!
//! This is the command-line interface for the crawlscope breadth-first
//! site mapper.

use anyhow::Context;
use clap::Parser;
use crawlscope::config::{load_file_config, resolve_config, ConfigOverrides, CrawlConfig};
use crawlscope::crawler::{Crawler, HttpFetcher};
use crawlscope::output::{write_results, ConsoleReporter};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// crawlscope: a breadth-first site mapper
///
/// Crawls one or more seed sites breadth-first, discovering every URL
/// reachable inside the domain scope fixed by the seeds. Optionally
/// collapses URLs that differ only in query parameter values into one
/// representative visit per parameter signature.
#[derive(Parser, Debug)]
#[command(name = "crawlscope")]
#[command(version)]
#[command(about = "A breadth-first site mapper", long_about = None)]
struct Cli {
    /// Seed URL to crawl (repeatable)
    #[arg(short, long = "url", value_name = "URL")]
    urls: Vec<String>,

    /// File containing newline-delimited seed URLs
    #[arg(short, long, value_name = "FILE")]
    list: Option<PathBuf>,

    /// Optional TOML configuration file; CLI flags override its values
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of pages to visit (default: 50)
    #[arg(short = 'n', long, value_name = "N")]
    max_pages: Option<usize>,

    /// Delay between requests in seconds (default: 0)
    #[arg(short, long, value_name = "SECONDS")]
    delay: Option<u64>,

    /// Request timeout in seconds (default: 10)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Only crawl one URL per query-parameter signature
    #[arg(long)]
    dedup_params: bool,

    /// Save discovered URLs under the results directory
    #[arg(short, long)]
    save: bool,

    /// Directory for saved results (default: results)
    #[arg(long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Resolve configuration: defaults, then config file, then CLI flags
    let config = resolve(&cli).context("invalid configuration")?;

    if !cli.quiet {
        ConsoleReporter::print_banner(&config);
    }

    let save = config.save;
    let results_dir = config.results_dir.clone();

    let fetcher =
        HttpFetcher::new(config.request_timeout).context("failed to build HTTP client")?;
    let mut reporter = ConsoleReporter::new(config.max_pages);
    let crawler = Crawler::new(config, fetcher);

    // Stop at the next frontier-pop boundary on ctrl-c; already-collected
    // results are still reported.
    let cancel = crawler.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current page");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    let report = crawler.run(&mut reporter).await;

    if !cli.quiet {
        reporter.print_summary(&report);
    }

    if save {
        write_results(&report, &results_dir)
            .with_context(|| format!("failed to write results to {}", results_dir.display()))?;
        if !cli.quiet {
            println!("saved results to {}", results_dir.display());
        }
    }

    Ok(())
}

/// Resolves the effective configuration from the config file and CLI flags
fn resolve(cli: &Cli) -> anyhow::Result<CrawlConfig> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            Some(
                load_file_config(path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
            )
        }
        None => None,
    };

    let overrides = ConfigOverrides {
        urls: cli.urls.clone(),
        seed_list: cli.list.clone(),
        max_pages: cli.max_pages,
        delay_seconds: cli.delay,
        request_timeout_seconds: cli.timeout,
        dedup_params: cli.dedup_params,
        save: cli.save,
        results_dir: cli.results_dir.clone(),
    };

    Ok(resolve_config(file_config, overrides)?)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawlscope=warn"),
            1 => EnvFilter::new("crawlscope=info,warn"),
            2 => EnvFilter::new("crawlscope=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
