//! Per-candidate extraction: one result element → one [`SearchResult`].
//!
//! The help-centre markup varies between page versions, so title and
//! content are located by trying an ordered list of selector strategies;
//! the first strategy yielding non-empty text wins. Extraction never
//! fails outward — any internal error is contained as a "parse error"
//! placeholder for that candidate only.

use scraper::{ElementRef, Selector};

use crate::config::SearcherConfig;
use crate::error::{Result, SearchError};
use crate::types::SearchResult;

/// Title placeholder when no strategy yields text.
const UNTITLED: &str = "untitled";

/// Content placeholder when no strategy yields text.
const NO_CONTENT: &str = "no content";

/// Title selector strategies, tried in order.
const TITLE_SELECTORS: &[&str] = &["h3", ".title", ".heading", "a", "[class*='title']"];

/// Content selector strategies, tried in order.
const CONTENT_SELECTORS: &[&str] = &[
    ".description",
    ".summary",
    ".content",
    "p",
    "[class*='content']",
];

/// Extract a normalized [`SearchResult`] from one result element.
///
/// Never fails: selector or markup problems produce a placeholder
/// result with title `"parse error"` and the error text as content.
/// The score is left at 0.0 for the orchestrator to assign.
pub fn extract_result(element: ElementRef<'_>, config: &SearcherConfig) -> SearchResult {
    match try_extract(element, config) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(error = %err, "candidate extraction failed");
            SearchResult::placeholder("parse error", err.to_string())
        }
    }
}

fn try_extract(element: ElementRef<'_>, config: &SearcherConfig) -> Result<SearchResult> {
    let title = first_strategy_text(element, TITLE_SELECTORS)?
        .unwrap_or_else(|| element_text(element));

    let content = match first_strategy_text(element, CONTENT_SELECTORS)? {
        Some(content) => content,
        None => {
            // Fall back to the element's full text, minus the title so
            // the heading is not duplicated inside the content.
            let text = element_text(element);
            if !title.is_empty() && text.contains(&title) {
                text.replace(&title, "").trim().to_owned()
            } else {
                text
            }
        }
    };

    let url = first_href(element)
        .map(|href| build_full_url(&href, config))
        .unwrap_or_default();

    Ok(SearchResult {
        title: if title.is_empty() { UNTITLED.to_owned() } else { title },
        content: if content.is_empty() { NO_CONTENT.to_owned() } else { content },
        url,
        score: 0.0,
    })
}

/// Try each selector in order; return the first non-empty trimmed text.
fn first_strategy_text(element: ElementRef<'_>, selectors: &[&str]) -> Result<Option<String>> {
    for raw in selectors {
        let selector = Selector::parse(raw)
            .map_err(|e| SearchError::Parse(format!("invalid selector {raw:?}: {e:?}")))?;
        if let Some(found) = element.select(&selector).next() {
            let text = element_text(found);
            if !text.is_empty() {
                return Ok(Some(text));
            }
        }
    }
    Ok(None)
}

/// Collected element text with whitespace collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `href` of the first anchor under `element`, if any.
fn first_href(element: ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse("a").ok()?;
    element
        .select(&selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned)
}

/// Resolve a result link to an absolute URL.
///
/// All-digit links are document ids and get the article URL prefix;
/// help-centre relative paths get the site base URL; anything else is
/// returned unchanged.
pub fn build_full_url(link: &str, config: &SearcherConfig) -> String {
    if !link.is_empty() && link.chars().all(|c| c.is_ascii_digit()) {
        format!("{}{}", config.doc_article_url, link)
    } else if link.starts_with(&config.help_center_prefix) {
        format!("{}{}", config.base_url, link)
    } else {
        link.to_owned()
    }
}
