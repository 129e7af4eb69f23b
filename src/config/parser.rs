use crate::config::types::{CrawlConfig, Settings};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Loads crawl settings from a TOML file and converts them into a validated
/// [`CrawlConfig`]
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the settings
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use page_gleaner::config::load_settings;
///
/// let config = load_settings(Path::new("gleaner.toml")).unwrap();
/// println!("Max depth: {}", config.max_depth);
/// ```
pub fn load_settings(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let settings: Settings = toml::from_str(&content)?;

    let config = CrawlConfig {
        max_depth: settings.max_depth,
        timeout: Duration::from_secs(settings.timeout_secs),
        filter_keywords: split_keywords(&settings.filter_keywords),
        text_separator: settings.text_separator,
    };

    validate(&config)?;

    Ok(config)
}

/// Splits a comma-separated keyword string into the ordered keyword list
///
/// Entries are trimmed; empty entries are dropped. An all-empty input yields
/// an empty list, which the classifier treats as "no page is informative".
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_settings() {
        let content = r#"
max-depth = 3
timeout-secs = 5
filter-keywords = "info, docs"
text-separator = " "
"#;

        let file = create_temp_settings(content);
        let config = load_settings(file.path()).unwrap();

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.filter_keywords, vec!["info", "docs"]);
        assert_eq!(config.text_separator, " ");
    }

    #[test]
    fn test_load_settings_defaults() {
        let file = create_temp_settings("");
        let config = load_settings(file.path()).unwrap();

        assert_eq!(config.max_depth, 2);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.filter_keywords.is_empty());
        assert_eq!(config.text_separator, "");
    }

    #[test]
    fn test_load_settings_with_invalid_path() {
        let result = load_settings(Path::new("/nonexistent/gleaner.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_with_invalid_toml() {
        let file = create_temp_settings("this is not valid TOML {{{");
        let result = load_settings(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_with_zero_timeout() {
        let file = create_temp_settings("timeout-secs = 0");
        let result = load_settings(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_split_keywords_trims_entries() {
        assert_eq!(split_keywords("info, docs ,rust"), vec!["info", "docs", "rust"]);
    }

    #[test]
    fn test_split_keywords_drops_empty_entries() {
        assert_eq!(split_keywords("info,,docs,"), vec!["info", "docs"]);
    }

    #[test]
    fn test_split_keywords_empty_input() {
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_split_keywords_preserves_order() {
        assert_eq!(split_keywords("b,a,c"), vec!["b", "a", "c"]);
    }
}
