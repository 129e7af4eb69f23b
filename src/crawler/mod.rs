//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - HTML link extraction
//! - Depth-bounded, cycle-free traversal of the link graph

mod engine;
mod fetcher;
mod parser;

pub use engine::{crawl, Crawler, Document};
pub use fetcher::{build_http_client, fetch_url, FetchResult, USER_AGENT};
pub use parser::extract_links;
