//! Keyword-based content classification

use crate::extract::text::extract_text;

/// Decides whether a page's extracted text counts as informative
///
/// Returns true iff at least one keyword occurs as a literal substring of the
/// text extracted with `separator`. Pure function of its inputs.
///
/// An empty keyword list returns false for every page. This is deliberate:
/// with no keywords configured the crawler treats all pages as
/// non-informative and therefore emits zero documents and follows zero
/// links. Callers who want "match everything" must supply a sentinel keyword.
pub fn is_informative(html: &str, separator: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }

    let text = extract_text(html, separator);
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}
