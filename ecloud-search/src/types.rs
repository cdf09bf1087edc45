//! Core types for help-centre search results and answers.

use serde::{Deserialize, Serialize};

/// A single candidate extracted from the help-centre search results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the matched article.
    pub title: String,
    /// A content snippet or summary for the article.
    pub content: String,
    /// Absolute URL of the article (empty if no link was found).
    pub url: String,
    /// Combined title/content relevance in `[0, 1]`. Zero until the
    /// orchestrator scores the candidate, assigned exactly once.
    pub score: f64,
}

impl SearchResult {
    /// A placeholder result carrying only a title and optional detail text.
    ///
    /// Used for the "no results found" outcome and for per-candidate
    /// extraction failures.
    pub fn placeholder(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: String::new(),
            score: 0.0,
        }
    }
}

/// The public answer payload: best match plus up to two alternatives.
///
/// Serialized field names match the HTTP contract (`source_url`,
/// `alternative_results`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The original question as asked.
    pub question: String,
    /// Content of the best-matching article, or a fixed placeholder
    /// when nothing matched.
    pub answer: String,
    /// Title of the best-matching article (empty when nothing matched).
    pub title: String,
    /// URL of the best-matching article (empty when nothing matched).
    pub source_url: String,
    /// Relevance score of the best match, in `[0, 1]`.
    pub confidence: f64,
    /// Ranks 2–3 of the result list (zero, one, or two entries).
    pub alternative_results: Vec<Alternative>,
}

/// A lower-ranked result projected into the answer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub title: String,
    pub url: String,
    pub score: f64,
}
