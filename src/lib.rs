//! Page-Gleaner: a depth-bounded web-to-text crawler
//!
//! Given a seed URL, this crate walks the link graph up to a configured depth,
//! keeps the pages whose extracted text matches a keyword allow-list, and
//! yields each kept page as a plain-text document paired with its source URL.
//! Every discovered URL is fetched at most once per crawl.

pub mod config;
pub mod crawler;
pub mod extract;

use thiserror::Error;

/// Main error type for Page-Gleaner operations
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Page-Gleaner operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, Crawler, Document, FetchResult};
pub use extract::{extract_text, is_informative};
