//! Error types for the ecloud-search crate.
//!
//! All errors carry stable string messages suitable for display to users.
//! Per-candidate extraction failures never surface here — they are
//! contained as placeholder results by the extractor.

/// Errors that can occur while answering a query.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The page-fetching backend could not be provisioned, even after one
    /// remediation attempt. Configuration-class and fatal for the request.
    #[error("backend unavailable: {0}")]
    Backend(String),

    /// Loading the search page failed. Transient — retried by the
    /// orchestrator under its backoff policy.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A selector or HTML-level failure outside the per-candidate scope.
    #[error("parse error: {0}")]
    Parse(String),

    /// All retry attempts failed; the last failure is folded into the
    /// message. Nothing is cached for the query.
    #[error("retries exhausted: {0}")]
    RetryExhausted(String),

    /// Invalid searcher configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for ecloud-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_backend() {
        let err = SearchError::Backend("client build failed".into());
        assert_eq!(err.to_string(), "backend unavailable: client build failed");
    }

    #[test]
    fn display_navigation() {
        let err = SearchError::Navigation("connection refused".into());
        assert_eq!(err.to_string(), "navigation failed: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("bad selector".into());
        assert_eq!(err.to_string(), "parse error: bad selector");
    }

    #[test]
    fn display_retry_exhausted() {
        let err = SearchError::RetryExhausted("3 attempts failed".into());
        assert_eq!(err.to_string(), "retries exhausted: 3 attempts failed");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("max_results must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: max_results must be greater than 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
