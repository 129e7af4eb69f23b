//! Plain-text extraction from HTML documents

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Reduces an HTML document to plain text
///
/// Concatenates all visible text nodes in document order, inserting
/// `separator` between adjacent nodes. `<script>` and `<style>` content is
/// excluded and tag structure is collapsed. Identical input and separator
/// always produce identical output.
///
/// # Example
///
/// ```
/// use page_gleaner::extract::extract_text;
///
/// let html = "<html><body><p>one</p><p>two</p></body></html>";
/// assert_eq!(extract_text(html, " "), "one two");
/// ```
pub fn extract_text(html: &str, separator: &str) -> String {
    let document = Html::parse_document(html);
    let mut pieces = Vec::new();
    collect_text(document.tree.root(), &mut pieces);
    pieces.join(separator)
}

/// Walks the node tree, collecting non-blank text nodes and skipping
/// script/style subtrees
fn collect_text(node: NodeRef<'_, Node>, pieces: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if matches!(element.name(), "script" | "style") {
                    continue;
                }
                collect_text(child, pieces);
            }
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_text() {
        let html = "<html><body><p>Hello</p></body></html>";
        assert_eq!(extract_text(html, " "), "Hello");
    }

    #[test]
    fn test_separator_between_nodes() {
        let html = "<html><body><p>one</p><p>two</p><p>three</p></body></html>";
        assert_eq!(extract_text(html, " | "), "one | two | three");
    }

    #[test]
    fn test_empty_separator() {
        let html = "<html><body><p>one</p><p>two</p></body></html>";
        assert_eq!(extract_text(html, ""), "onetwo");
    }

    #[test]
    fn test_script_content_excluded() {
        let html = r#"<html><body><p>visible</p><script>var hidden = 1;</script></body></html>"#;
        assert_eq!(extract_text(html, " "), "visible");
    }

    #[test]
    fn test_style_content_excluded() {
        let html = r#"<html><head><style>body { color: red; }</style></head><body>visible</body></html>"#;
        assert_eq!(extract_text(html, " "), "visible");
    }

    #[test]
    fn test_nested_structure_collapsed() {
        let html = "<html><body><div><span>a</span><div><b>b</b></div></div>c</body></html>";
        assert_eq!(extract_text(html, " "), "a b c");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_text("", " "), "");
        assert_eq!(extract_text("<html><body></body></html>", " "), "");
    }

    #[test]
    fn test_whitespace_only_nodes_dropped() {
        let html = "<html><body>  <p>text</p>\n  </body></html>";
        assert_eq!(extract_text(html, "|"), "text");
    }

    #[test]
    fn test_deterministic() {
        let html = "<html><body><p>a</p><p>b</p></body></html>";
        assert_eq!(extract_text(html, "-"), extract_text(html, "-"));
    }
}
