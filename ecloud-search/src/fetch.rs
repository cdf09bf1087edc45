//! Page-fetching boundary: trait contract plus the reqwest-backed
//! production implementation.
//!
//! The orchestrator only requires the trait: load a URL, let the page
//! settle, hand back its HTML. [`HttpFetcher`] builds one client per
//! request with browser-like headers and a rotating User-Agent; the
//! client is dropped on every exit path, so each attempt's session is
//! released before the next retry.

use std::time::Duration;

use rand::seq::SliceRandom;

use crate::config::SearcherConfig;
use crate::error::{Result, SearchError};

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// The page-loading capability required by the orchestrator.
///
/// Implementations load `url`, wait for the page to settle, and return
/// the document HTML. They must be `Send + Sync`; all DOM querying
/// happens on the returned string, not behind this trait.
pub trait PageFetcher: Send + Sync {
    /// Load `url` and return the settled page's HTML.
    ///
    /// # Errors
    ///
    /// [`SearchError::Backend`] when the fetching capability cannot be
    /// provisioned; [`SearchError::Navigation`] for transient load
    /// failures, which the orchestrator retries.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// reqwest-backed fetcher for the help-centre search page.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    user_agent: Option<String>,
}

impl HttpFetcher {
    /// Build a fetcher from the searcher configuration.
    pub fn new(config: &SearcherConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Acquire an HTTP client, remediating once on failure.
    ///
    /// The first attempt uses the full browser-like configuration; if
    /// that fails, one rebuild with a minimal configuration is tried
    /// before the failure is surfaced as [`SearchError::Backend`].
    fn acquire_client(&self) -> Result<reqwest::Client> {
        match self.build_client(false) {
            Ok(client) => Ok(client),
            Err(err) => {
                tracing::warn!(error = %err, "HTTP client build failed, retrying with minimal configuration");
                self.build_client(true)
                    .map_err(|e| SearchError::Backend(format!("failed to build HTTP client: {e}")))
            }
        }
    }

    fn build_client(&self, minimal: bool) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if !minimal {
            let ua = match self.user_agent {
                Some(ref custom) => custom.clone(),
                None => random_user_agent().to_owned(),
            };
            builder = builder
                .cookie_store(true)
                .user_agent(ua)
                .redirect(reqwest::redirect::Policy::limited(10));
        }
        builder.build()
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let client = self.acquire_client()?;

        tracing::debug!(url, "loading search page");
        let response = client
            .get(url)
            .header("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8")
            .send()
            .await
            .map_err(|e| SearchError::Navigation(format!("search page request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Navigation(format!("search page HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Navigation(format!("search page read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "search page received");
        Ok(html)
        // client drops here — the session is released before any retry
    }
}

/// Select a random User-Agent string from the rotation list.
fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS.choose(&mut rng).copied().unwrap_or(USER_AGENTS[0])
}
