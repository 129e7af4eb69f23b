//! Configuration module for Page-Gleaner
//!
//! This module holds the per-crawl configuration value and the TOML settings
//! layer that produces it. A `CrawlConfig` is constructed once per crawl and
//! is read-only for the duration of that crawl; there is no ambient, mutable
//! crawl state shared between invocations.
//!
//! # Example
//!
//! ```no_run
//! use page_gleaner::config::load_settings;
//! use std::path::Path;
//!
//! let config = load_settings(Path::new("gleaner.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, Settings};

// Re-export parser functions
pub use parser::{load_settings, split_keywords};

// Re-export validation functions
pub use validation::{validate, validate_seed_url};
