use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{node::Node, ElementRef, Html};

use crate::error::ExtractionError;
use crate::fetch::Fetcher;
use crate::models::{ExtractRequest, ExtractResponse};

// ── Constants ────────────────────────────────────────────────────────────────

/// Elements whose contents are never rendered as text.
const NON_RENDERING: &[&str] = &["script", "style", "noscript", "template"];

static MULTI_NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

// ── Public API ───────────────────────────────────────────────────────────────

/// Fetch `request.url` and return the visible text of the document.
///
/// An empty URL fails before the fetcher is touched. Anything else,
/// whitespace-only included, goes to the fetcher with its surrounding
/// whitespace stripped; scheme and host problems surface as fetch failures.
pub async fn extract(
    fetcher: &dyn Fetcher,
    request: &ExtractRequest,
) -> Result<ExtractResponse, ExtractionError> {
    if request.url.is_empty() {
        return Err(ExtractionError::InvalidInput("URL is required".to_string()));
    }
    let url = request.url.trim();

    let html = fetcher.fetch(url).await?;
    let text = html_to_text(&html);
    tracing::debug!(%url, bytes = html.len(), chars = text.len(), "extracted text");

    Ok(ExtractResponse { text })
}

/// Concatenate every text node of `html` in document order, skipping the
/// contents of non-rendering elements.
///
/// The parser keeps whitespace as written; a cleanup pass afterwards trims
/// line ends and folds the blank-line runs left behind by stripped markup.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    collect_text(document.root_element(), &mut out);
    normalize_whitespace(&out)
}

// ── Tree walk ────────────────────────────────────────────────────────────────

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    if NON_RENDERING.contains(&el.value().name()) {
        return;
    }
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// Strip trailing whitespace per line, fold blank-line runs, trim the ends.
fn normalize_whitespace(text: &str) -> String {
    let lines = text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
    MULTI_NEWLINE_RE.replace_all(&lines, "\n\n").trim().to_string()
}
