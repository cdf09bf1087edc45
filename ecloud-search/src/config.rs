//! Searcher configuration with the fixed help-centre endpoints.
//!
//! The target site is not configurable per request; [`SearcherConfig`]
//! exists so that timeouts, limits, and retry counts can be tuned and so
//! that tests can point the searcher at controlled inputs.

use crate::error::SearchError;

/// Base URL of the ECloud site.
pub const BASE_URL: &str = "https://ecloud.10086.cn";

/// Path prefix identifying help-centre relative links.
pub const HELP_CENTER_PREFIX: &str = "/op-help-center";

/// Search endpoint; the query is appended as a URL-encoded `q` parameter.
pub const SEARCH_URL: &str = "https://ecloud.10086.cn/op-help-center/search-engine/search/";

/// Article URL template; numeric document ids are appended directly.
pub const DOC_ARTICLE_URL: &str = "https://ecloud.10086.cn/op-help-center/doc/article/";

/// Configuration for a [`Searcher`](crate::Searcher) instance.
#[derive(Debug, Clone)]
pub struct SearcherConfig {
    /// Base site URL, prepended to help-centre relative links.
    pub base_url: String,
    /// Relative-link prefix that marks a help-centre path.
    pub help_center_prefix: String,
    /// Search-results page endpoint.
    pub search_url: String,
    /// Article URL prefix for numeric document ids.
    pub doc_article_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of candidates taken from the results page.
    pub max_results: usize,
    /// Total attempts for a query before giving up.
    pub max_retries: usize,
    /// Cache entry lifetime in seconds. Entries older than this are
    /// treated as absent.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent. If `None`, rotates through a built-in list of
    /// realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            help_center_prefix: HELP_CENTER_PREFIX.to_owned(),
            search_url: SEARCH_URL.to_owned(),
            doc_article_url: DOC_ARTICLE_URL.to_owned(),
            timeout_seconds: 30,
            max_results: 10,
            max_retries: 3,
            cache_ttl_seconds: 24 * 60 * 60,
            user_agent: None,
        }
    }
}

impl SearcherConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `max_retries` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `search_url` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.max_retries == 0 {
            return Err(SearchError::Config(
                "max_retries must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.search_url.is_empty() {
            return Err(SearchError::Config("search_url must not be empty".into()));
        }
        Ok(())
    }
}
