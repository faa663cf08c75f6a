// src/services/html.rs

//! Article body extraction service.
//!
//! Downloads an article, strips `script`/`style` subtrees, and tokenizes the
//! remaining text. Tokens are lowercased and emitted once per occurrence;
//! sorting and deduplication are the caller's concern.

use scraper::{ElementRef, Html};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AppError, Result};
use crate::utils::HttpClient;

/// Source of article body tokens.
pub trait DocumentSource: Send + Sync {
    /// Fetch an article and return its body tokens in document order.
    fn fetch_tokens(&self, url: &str) -> Result<Vec<String>>;
}

/// HTTP-backed HTML token source.
pub struct HtmlDocuments {
    http: HttpClient,
}

impl HtmlDocuments {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl DocumentSource for HtmlDocuments {
    fn fetch_tokens(&self, url: &str) -> Result<Vec<String>> {
        let bytes = self
            .http
            .get_bytes(url)
            .map_err(|e| AppError::document(url, e))?;
        let body = String::from_utf8_lossy(&bytes);
        Ok(tokenize_document(&body))
    }
}

/// Tags whose text content is never article prose.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

/// Parse an HTML document and tokenize its visible text.
pub fn tokenize_document(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    tokenize(&text)
}

fn collect_text(element: ElementRef, out: &mut String) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
            out.push(' ');
        }
    }
}

/// Split text into lowercased word tokens.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered.unicode_words().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_lowercased_words() {
        let tokens = tokenize_document("<html><body><p>Hello, Brave World!</p></body></html>");
        assert_eq!(tokens, vec!["hello", "brave", "world"]);
    }

    #[test]
    fn test_script_and_style_are_removed() {
        let html = "<html><head><style>p { color: red }</style></head>\
                    <body><script>var hidden = 1;</script><p>visible</p></body></html>";
        let tokens = tokenize_document(html);
        assert_eq!(tokens, vec!["visible"]);
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let html = "<body><div>first <em>second</em></div><p>third</p></body>";
        let tokens = tokenize_document(html);
        assert_eq!(tokens, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_each_occurrence_emitted_once() {
        let tokens = tokenize_document("<body><p>echo echo</p></body>");
        assert_eq!(tokens, vec!["echo", "echo"]);
    }

    #[test]
    fn test_adjacent_nodes_do_not_merge_tokens() {
        let tokens = tokenize_document("<body><b>bold</b>plain</body>");
        assert_eq!(tokens, vec!["bold", "plain"]);
    }

    #[test]
    fn test_empty_body_yields_no_tokens() {
        assert!(tokenize_document("<html><body></body></html>").is_empty());
    }
}
