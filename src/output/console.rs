//! Console rendering: banner, progress bar, and final summary

use crate::config::CrawlConfig;
use crate::output::{CrawlReport, Reporter};
use crate::{ExtractError, FetchError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

/// Renders crawl progress to the terminal
///
/// Shows a banner with the effective configuration up front, a progress
/// bar tracking visits against the page budget during the run, and a
/// sorted URL table with summary counts at the end. Warnings are printed
/// above the bar so they stay visible.
pub struct ConsoleReporter {
    progress: ProgressBar,
}

impl ConsoleReporter {
    /// Creates the reporter with a progress bar sized to the page budget
    pub fn new(budget: usize) -> Self {
        let progress = ProgressBar::new(budget as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} {msg:32} [{bar:40.cyan/blue}] {pos}/{len} pages ({elapsed})",
            )
            .expect("progress template is valid")
            .progress_chars("=> "),
        );

        Self { progress }
    }

    /// Prints the pre-crawl banner with the effective configuration
    pub fn print_banner(config: &CrawlConfig) {
        println!("{}", "crawlscope - breadth-first site mapper".bold().cyan());
        println!(
            "{} {}    {} {}s    {} {}s",
            "max pages:".bold(),
            config.max_pages,
            "delay:".bold(),
            config.delay.as_secs(),
            "timeout:".bold(),
            config.request_timeout.as_secs(),
        );
        if config.dedup_params {
            println!("{}", "parameter-signature dedup enabled".yellow());
        }
        for seed in &config.seeds {
            println!("{} {}", "seed:".bold().green(), seed);
        }
        println!();
    }

    /// Prints the final URL table and summary counts
    pub fn print_summary(&self, report: &CrawlReport) {
        self.progress.finish_and_clear();

        println!(
            "{}",
            format!("finished in {:.2}s", report.elapsed.as_secs_f64())
                .green()
                .bold()
        );
        println!();

        println!("{}", "Discovered URLs".bold());
        for (i, url) in report.discovered.iter().enumerate() {
            println!("{:>4}  {}", (i + 1).to_string().cyan(), url);
        }
        println!();

        println!("{} {}", "visited pages:".bold(), report.visited.len());
        println!("{} {}", "total URLs:".bold(), report.discovered.len());
        println!(
            "{} {}",
            "with parameters:".bold(),
            report.with_parameters().count()
        );
        if report.dedup_enabled {
            println!(
                "{} {}",
                "unique parameter signatures:".bold(),
                report.signatures.len()
            );
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_visit(&mut self, url: &Url, visited: usize, _budget: usize) {
        self.progress.set_position(visited as u64);
        if let Some(host) = url.host_str() {
            self.progress.set_message(format!("visiting {}", host));
        }
    }

    fn on_fetch_error(&mut self, _url: &Url, error: &FetchError) {
        // FetchError carries the URL in its display form
        self.progress
            .println(format!("{} {}", "warning:".yellow().bold(), error));
    }

    fn on_extract_error(&mut self, url: &Url, error: &ExtractError) {
        self.progress
            .println(format!("{} {}: {}", "warning:".yellow().bold(), url, error));
    }
}
