use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Validates the resolved configuration
///
/// Any failure here is fatal: it is reported before the crawl loop starts
/// and terminates the process with a non-zero status.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "provide at least one seed URL (--url, --list, or seeds in the config file)"
                .to_string(),
        ));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.save && config.results_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "results_dir cannot be empty when save mode is enabled".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use url::Url;

    fn valid_config() -> CrawlConfig {
        CrawlConfig {
            seeds: vec![Url::parse("https://example.com/").unwrap()],
            max_pages: 50,
            delay: Duration::ZERO,
            request_timeout: Duration::from_secs(10),
            dedup_params: false,
            save: false,
            results_dir: PathBuf::from("results"),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_seeds_rejected() {
        let mut config = valid_config();
        config.seeds.clear();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut config = valid_config();
        config.max_pages = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_results_dir_rejected_in_save_mode() {
        let mut config = valid_config();
        config.save = true;
        config.results_dir = PathBuf::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_results_dir_allowed_without_save() {
        let mut config = valid_config();
        config.results_dir = PathBuf::new();
        assert!(validate(&config).is_ok());
    }
}
