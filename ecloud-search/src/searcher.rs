//! The search orchestrator: cache check, page fetch, candidate
//! extraction and scoring, ranking, cache write, linear-backoff retry.
//!
//! One query is one sequential task: candidates are extracted and
//! scored in document order with no parallelism, so score assignment
//! is deterministic. Concurrent identical queries are not coalesced —
//! both may fetch, which is accepted since results are idempotent.

use std::cmp::Ordering;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use crate::answer::build_answer;
use crate::cache::ResultCache;
use crate::config::SearcherConfig;
use crate::error::{Result, SearchError};
use crate::extract::extract_result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::similarity;
use crate::types::{Answer, SearchResult};

/// Title of the placeholder result emitted when no selector matches
/// anything on the results page.
pub const NO_RESULTS_TITLE: &str = "no results found";

/// Result-container selectors, tried in order; the first one matching
/// at least one element wins.
const RESULT_SELECTORS: &[&str] = &[
    ".search-result-item",
    ".result-item",
    ".search-list li",
    ".list-item",
    "div[class*='result']",
];

/// Help-centre query answering service.
///
/// Constructed once at service start and shared by reference across
/// request handlers; holds the result cache for its whole lifetime.
#[derive(Debug)]
pub struct Searcher<F: PageFetcher = HttpFetcher> {
    config: SearcherConfig,
    cache: ResultCache,
    fetcher: F,
}

impl Searcher<HttpFetcher> {
    /// Create a searcher backed by the production HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn new(config: SearcherConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config);
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> Searcher<F> {
    /// Create a searcher with a custom page-fetching backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn with_fetcher(config: SearcherConfig, fetcher: F) -> Result<Self> {
        config.validate()?;
        let cache = ResultCache::new(Duration::from_secs(config.cache_ttl_seconds));
        Ok(Self {
            config,
            cache,
            fetcher,
        })
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &SearcherConfig {
        &self.config
    }

    /// Answer a query: ranked result list, retried and cached.
    ///
    /// A live cache entry short-circuits the fetch entirely. Otherwise
    /// the fetch→extract→score→rank pipeline runs up to `max_retries`
    /// times with a linear backoff (attempt index in seconds) between
    /// attempts. Only successful searches are cached.
    ///
    /// # Errors
    ///
    /// [`SearchError::Backend`] if the fetch backend cannot be
    /// provisioned (not retried); [`SearchError::RetryExhausted`] after
    /// all attempts fail.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if let Some(results) = self.cache.get(query) {
            tracing::info!(count = results.len(), "cache hit");
            return Ok(results);
        }

        for attempt in 1..=self.config.max_retries {
            match self.do_search(query).await {
                Ok(results) => {
                    self.cache.insert(query, results.clone());
                    tracing::info!(count = results.len(), attempt, "search succeeded");
                    return Ok(results);
                }
                Err(err @ SearchError::Backend(_)) => {
                    // Provisioning already includes its own remediation
                    // attempt; a backend failure is fatal, not transient.
                    tracing::error!(error = %err, "fetch backend unavailable");
                    return Err(err);
                }
                Err(err) if attempt < self.config.max_retries => {
                    tracing::warn!(attempt, error = %err, "search attempt failed, backing off");
                    tokio::time::sleep(Duration::from_secs(attempt as u64)).await;
                }
                Err(err) => {
                    tracing::error!(attempts = attempt, error = %err, "search failed, retries exhausted");
                    return Err(SearchError::RetryExhausted(format!(
                        "search failed after {attempt} attempts: {err}"
                    )));
                }
            }
        }

        Err(SearchError::RetryExhausted(format!(
            "search failed after {} attempts",
            self.config.max_retries
        )))
    }

    /// Answer a query with the public payload: best answer plus up to
    /// two alternatives.
    ///
    /// "No results" is a valid outcome, not an error — only fatal
    /// orchestrator failures propagate.
    ///
    /// # Errors
    ///
    /// Same as [`Searcher::search`].
    pub async fn get_best_answer(&self, query: &str) -> Result<Answer> {
        let results = self.search(query).await?;
        let answer = build_answer(query, &results);
        tracing::info!(
            title = %answer.title,
            confidence = answer.confidence,
            "best answer selected"
        );
        Ok(answer)
    }

    /// One fetch→extract→score→rank attempt.
    async fn do_search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let encoded = urlencoding::encode(query);
        let url = format!("{}?q={}", self.config.search_url, encoded);
        tracing::debug!(%url, "running search attempt");

        let html = self.fetcher.fetch(&url).await?;
        Ok(self.rank_candidates(query, &html))
    }

    /// Extract, score, and rank the candidates on a results page.
    fn rank_candidates(&self, query: &str, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);

        let Some(elements) = find_candidates(&document, self.config.max_results) else {
            tracing::info!("no result containers matched on search page");
            return vec![SearchResult::placeholder(NO_RESULTS_TITLE, "")];
        };

        let mut results: Vec<SearchResult> = elements
            .into_iter()
            .map(|element| {
                let mut result = extract_result(element, &self.config);
                result.score = combined_score(query, &result);
                result
            })
            .collect();

        // Stable sort: ties keep document order.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results
    }
}

/// Find result elements using the selector fallback chain.
///
/// Returns at most `max_results` elements in document order, or `None`
/// when no selector matches anything.
fn find_candidates(document: &Html, max_results: usize) -> Option<Vec<ElementRef<'_>>> {
    for raw in RESULT_SELECTORS {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        let elements: Vec<ElementRef<'_>> = document.select(&selector).take(max_results).collect();
        if !elements.is_empty() {
            tracing::debug!(selector = raw, count = elements.len(), "result containers matched");
            return Some(elements);
        }
    }
    None
}

/// Combined relevance of a candidate for `query`.
///
/// Title and content are scored separately; the content weight depends
/// on content length (short snippets carry less signal, long bodies
/// more).
fn combined_score(query: &str, result: &SearchResult) -> f64 {
    let title_score = similarity::score(query, &result.title);
    let content_score = similarity::score(query, &result.content);
    let weight = content_weight(result.content.chars().count());
    title_score * (1.0 - weight) + content_score * weight
}

/// Content weight by content length: `< 50` chars → 0.2, `> 500` →
/// 0.4, otherwise 0.3.
fn content_weight(content_len: usize) -> f64 {
    if content_len < 50 {
        0.2
    } else if content_len > 500 {
        0.4
    } else {
        0.3
    }
}
