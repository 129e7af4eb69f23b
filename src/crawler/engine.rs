//! Crawl engine - depth-bounded traversal of the link graph
//!
//! The engine owns the worklist and the visited set for one crawl
//! invocation. Traversal is depth-first pre-order: a page's document is
//! emitted before its links are descended into, following document order of
//! the links on each page. No URL is fetched twice within one run; a URL
//! joins the visited set the moment it is scheduled, not after a successful
//! fetch, so repeated discoveries of the same link are rejected even while a
//! fetch is pending or after it has failed.

use crate::config::{validate, validate_seed_url, CrawlConfig};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::parser::extract_links;
use crate::extract::{extract_text, is_informative};
use crate::GleanError;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// A plain-text document produced from one crawled page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Extracted plain text of the page
    pub content: String,

    /// Absolute URL the text was extracted from
    pub source_url: String,
}

/// One pending traversal step
#[derive(Debug)]
struct Frame {
    url: Url,
    depth: u32,
}

/// Crawler for one invocation: seed URL, worklist, and visited set
///
/// Documents are pulled one at a time with [`next_document`], so a caller
/// that stops consuming early never pays for work beyond the next document.
/// [`run`] drains the crawl into a `Vec`.
///
/// [`next_document`]: Crawler::next_document
/// [`run`]: Crawler::run
#[derive(Debug)]
pub struct Crawler {
    config: CrawlConfig,
    client: Client,
    stack: Vec<Frame>,
    visited: HashSet<String>,
}

impl Crawler {
    /// Creates a crawler for the given seed URL and configuration
    ///
    /// Configuration faults (zero timeout, malformed or non-http seed) are
    /// rejected here, before any network work starts. The seed is scheduled
    /// at depth 0 and enters the visited set immediately, so a page linking
    /// back to the seed is skipped as already visited.
    pub fn new(seed: &str, config: CrawlConfig) -> Result<Self, GleanError> {
        validate(&config)?;
        let seed_url = validate_seed_url(seed)?;

        let client = build_http_client(config.timeout)?;

        let mut visited = HashSet::new();
        visited.insert(seed_url.to_string());

        let stack = vec![Frame {
            url: seed_url,
            depth: 0,
        }];

        Ok(Self {
            config,
            client,
            stack,
            visited,
        })
    }

    /// Produces the next document, or None when the frontier is exhausted
    ///
    /// Performs only the traversal work needed to reach the next informative
    /// page. Frames that fail to fetch, fail classification, or fault during
    /// processing produce nothing and never abort the remaining frames.
    pub async fn next_document(&mut self) -> Option<Document> {
        while let Some(frame) = self.stack.pop() {
            match self.process_frame(&frame).await {
                Ok(Some(document)) => return Some(document),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        "Error processing {} at depth {}: {}",
                        frame.url,
                        frame.depth,
                        e
                    );
                }
            }
        }
        None
    }

    /// Drains the crawl, returning every remaining document in emission order
    pub async fn run(&mut self) -> Vec<Document> {
        let mut documents = Vec::new();
        while let Some(document) = self.next_document().await {
            documents.push(document);
        }
        documents
    }

    /// Processes a single frame
    ///
    /// 1. Fetch the page; a failure abandons this branch
    /// 2. Gate on the content classifier; non-informative pages contribute
    ///    neither a document nor links
    /// 3. Schedule unvisited links at depth + 1, unless the depth bound is
    ///    reached
    /// 4. Emit the page's document
    async fn process_frame(&mut self, frame: &Frame) -> Result<Option<Document>, GleanError> {
        let url_str = frame.url.as_str();
        tracing::debug!("Fetching {} at depth {}", url_str, frame.depth);

        let body = match fetch_url(&self.client, url_str).await {
            FetchResult::Success { body } => body,
            // Already logged by the fetcher
            FetchResult::Failure { .. } => return Ok(None),
        };

        if !is_informative(&body, &self.config.text_separator, &self.config.filter_keywords) {
            tracing::info!("Ignoring non-informative page {}", url_str);
            return Ok(None);
        }

        if frame.depth < self.config.max_depth {
            self.schedule_links(&body, &frame.url, frame.depth + 1)?;
        } else {
            tracing::debug!("Depth limit reached at {}, not following links", url_str);
        }

        Ok(Some(Document {
            content: extract_text(&body, &self.config.text_separator),
            source_url: url_str.to_string(),
        }))
    }

    /// Schedules the page's unvisited links for traversal at the given depth
    ///
    /// Links are pushed in reverse document order so the first link on the
    /// page is popped first, keeping the traversal depth-first pre-order.
    fn schedule_links(&mut self, body: &str, base_url: &Url, depth: u32) -> Result<(), GleanError> {
        let links = extract_links(body, base_url).map_err(|message| GleanError::HtmlParse {
            url: base_url.to_string(),
            message,
        })?;

        let mut frames = Vec::new();
        for link in links {
            if self.visited.contains(&link) {
                tracing::debug!("Skipping already visited {}", link);
                continue;
            }

            // The extractor only yields URLs it has already parsed, so this
            // re-parse cannot fail in practice
            let url = match Url::parse(&link) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Dropping malformed link {}: {}", link, e);
                    continue;
                }
            };

            self.visited.insert(link);
            frames.push(Frame { url, depth });
        }

        self.stack.extend(frames.into_iter().rev());
        Ok(())
    }

    /// Number of URLs scheduled so far in this run (including the seed)
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Crawls from a seed URL and collects every emitted document
///
/// This is the one-call surface for hosts that consume the whole output.
/// Configuration faults are returned eagerly; per-page failures (including a
/// failing seed fetch) are not errors and simply shrink the output, down to
/// an empty `Vec`.
///
/// # Example
///
/// ```no_run
/// use page_gleaner::{crawl, CrawlConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig {
///     filter_keywords: vec!["rust".to_string()],
///     ..CrawlConfig::default()
/// };
/// let documents = crawl("https://example.com/", config).await?;
/// for doc in documents {
///     println!("{}: {} chars", doc.source_url, doc.content.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed: &str, config: CrawlConfig) -> Result<Vec<Document>, GleanError> {
    let mut crawler = Crawler::new(seed, config)?;
    Ok(crawler.run().await)
}
