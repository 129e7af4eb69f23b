use serde::Deserialize;
use std::time::Duration;

/// Immutable configuration for one crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum depth to crawl from the seed URL; depth 0 means seed page only
    pub max_depth: u32,

    /// Per-request timeout
    pub timeout: Duration,

    /// Keyword allow-list used to classify pages as informative.
    ///
    /// An empty list is a valid configuration and means no page matches:
    /// the crawl emits zero documents and follows zero links.
    pub filter_keywords: Vec<String>,

    /// Separator inserted between extracted text nodes (may be empty)
    pub text_separator: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            timeout: Duration::from_secs(10),
            filter_keywords: Vec::new(),
            text_separator: String::new(),
        }
    }
}

/// Raw settings as they appear in a TOML settings file
///
/// The upstream settings store delivers scalars: the timeout as integer
/// seconds and the keyword list as a single comma-separated string. The
/// parser splits keywords before they reach the crawler.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Maximum crawl depth from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Comma-separated keyword list (e.g. "rust, crawler, docs")
    #[serde(rename = "filter-keywords", default)]
    pub filter_keywords: String,

    /// Separator inserted between extracted text nodes
    #[serde(rename = "text-separator", default)]
    pub text_separator: String,
}

fn default_max_depth() -> u32 {
    2
}

fn default_timeout_secs() -> u64 {
    10
}
