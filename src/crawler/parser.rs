//! HTML parser for extracting links
//!
//! Yields the absolute, schema-valid URLs found in anchor elements, resolved
//! against the page's own URL. Deduplication is the engine's responsibility
//! via the visited set, not this module's.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all valid links from an HTML document
///
/// # Link Rules
///
/// **Include:** `<a href="...">` targets, in document order, resolved against
/// `base_url`; a candidate is yielded only if the resolved URL has a
/// non-empty scheme and a host.
///
/// **Exclude (silently dropped):** fragment-only targets, `javascript:`,
/// `mailto:`, `tel:` and other host-less schemes, malformed hrefs.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page's own URL, used to resolve relative links
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Absolute URLs in document order, duplicates kept
/// * `Err(String)` - Failed to build the anchor selector
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<String>, String> {
    let document = Html::parse_document(html);

    let selector = Selector::parse("a[href]").map_err(|e| e.to_string())?;

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(href, base_url) {
                links.push(absolute_url);
            }
        }
    }

    Ok(links)
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - Empty or fragment-only hrefs
/// - URLs without a host after resolution (javascript:, mailto:, tel:, data:)
/// - Hrefs that fail to parse against the base URL
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;

    // Valid links carry both a scheme and an authority component
    if absolute_url.scheme().is_empty() || !absolute_url.has_host() {
        return None;
    }

    Some(absolute_url.to_string())
}
