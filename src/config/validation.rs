use crate::config::types::CrawlConfig;
use crate::ConfigError;
use url::Url;

/// Validates a crawl configuration
///
/// Configuration faults are rejected eagerly at crawl start rather than
/// surfacing as confusing per-page failures later.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    // max_depth >= 0 is always true for u32, so no check needed

    if config.timeout.is_zero() {
        return Err(ConfigError::Validation(
            "timeout must be a positive duration".to_string(),
        ));
    }

    Ok(())
}

/// Validates and parses a seed URL
///
/// The seed must be an absolute http or https URL with a host.
pub fn validate_seed_url(seed: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https scheme",
            seed
        )));
    }

    if !url.has_host() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validate_accepts_default_config() {
        assert!(validate(&CrawlConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = CrawlConfig {
            timeout: Duration::ZERO,
            ..CrawlConfig::default()
        };
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_accepts_depth_zero() {
        let config = CrawlConfig {
            max_depth: 0,
            ..CrawlConfig::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_seed_url() {
        assert!(validate_seed_url("https://example.com/").is_ok());
        assert!(validate_seed_url("http://example.com/docs").is_ok());

        assert!(validate_seed_url("").is_err());
        assert!(validate_seed_url("not a url").is_err());
        assert!(validate_seed_url("ftp://example.com/").is_err());
        assert!(validate_seed_url("mailto:admin@example.com").is_err());
        assert!(validate_seed_url("/relative/path").is_err());
    }
}
