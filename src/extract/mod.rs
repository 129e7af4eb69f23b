//! HTML-to-text extraction and content classification
//!
//! This module reduces HTML documents to plain text and decides whether a
//! page's text counts as informative for the crawl.

mod classify;
mod text;

pub use classify::is_informative;
pub use text::extract_text;
