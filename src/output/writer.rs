//! Result file writer
//!
//! Save mode persists line-delimited, lexicographically sorted lists
//! under the results directory:
//! - `found_urls.txt` - every discovered URL
//! - `found_parameters.txt` - the subset carrying a query component
//! - `deduplicate_params.txt` - admitted signatures (dedup mode only)

use crate::output::CrawlReport;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File name for the full discovered-URL list
pub const FOUND_URLS_FILE: &str = "found_urls.txt";

/// File name for discovered URLs with a query component
pub const FOUND_PARAMETERS_FILE: &str = "found_parameters.txt";

/// File name for admitted parameter signatures
pub const DEDUP_PARAMS_FILE: &str = "deduplicate_params.txt";

/// Writes the crawl results under `dir`, creating the directory if needed
///
/// The signature file is only written when dedup mode was active for the
/// run. Sorting comes for free from the report's ordered sets.
pub fn write_results(report: &CrawlReport, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    write_lines(
        &dir.join(FOUND_URLS_FILE),
        report.discovered.iter().map(String::as_str),
    )?;
    write_lines(&dir.join(FOUND_PARAMETERS_FILE), report.with_parameters())?;

    if report.dedup_enabled {
        write_lines(
            &dir.join(DEDUP_PARAMS_FILE),
            report.signatures.iter().map(String::as_str),
        )?;
    }

    Ok(())
}

fn write_lines<'a>(path: &Path, lines: impl Iterator<Item = &'a str>) -> io::Result<()> {
    let mut file = BufWriter::new(fs::File::create(path)?);
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeSet;
    use std::time::Duration;

    fn test_report(dedup_enabled: bool) -> CrawlReport {
        let discovered: BTreeSet<String> = [
            "https://example.com/b",
            "https://example.com/a",
            "https://example.com/p?id=1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let signatures: BTreeSet<String> = ["/p?params=id"].iter().map(|s| s.to_string()).collect();

        CrawlReport {
            started_at: Utc::now(),
            elapsed: Duration::from_secs(1),
            visited: BTreeSet::new(),
            discovered,
            signatures,
            dedup_enabled,
            budget: 50,
        }
    }

    #[test]
    fn test_writes_sorted_url_list() {
        let dir = tempfile::tempdir().unwrap();
        write_results(&test_report(false), dir.path()).unwrap();

        let urls = fs::read_to_string(dir.path().join(FOUND_URLS_FILE)).unwrap();
        assert_eq!(
            urls,
            "https://example.com/a\nhttps://example.com/b\nhttps://example.com/p?id=1\n"
        );
    }

    #[test]
    fn test_writes_parameter_subset() {
        let dir = tempfile::tempdir().unwrap();
        write_results(&test_report(false), dir.path()).unwrap();

        let params = fs::read_to_string(dir.path().join(FOUND_PARAMETERS_FILE)).unwrap();
        assert_eq!(params, "https://example.com/p?id=1\n");
    }

    #[test]
    fn test_signature_file_only_in_dedup_mode() {
        let dir = tempfile::tempdir().unwrap();
        write_results(&test_report(false), dir.path()).unwrap();
        assert!(!dir.path().join(DEDUP_PARAMS_FILE).exists());

        write_results(&test_report(true), dir.path()).unwrap();
        let sigs = fs::read_to_string(dir.path().join(DEDUP_PARAMS_FILE)).unwrap();
        assert_eq!(sigs, "/p?params=id\n");
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("results").join("run");
        write_results(&test_report(false), &nested).unwrap();
        assert!(nested.join(FOUND_URLS_FILE).exists());
    }
}
