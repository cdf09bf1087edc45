//! # ecloud-search
//!
//! Answer engine for the ECloud (移动云) help centre. Given a free-text
//! question it loads the help-centre search page, extracts the result
//! candidates via CSS-selector fallback chains, ranks them with a
//! multi-factor text-similarity score, and returns the best match plus
//! up to two alternatives.
//!
//! ## Design
//!
//! - One sequential task per query: fetch → extract → score → rank
//! - Multi-factor similarity: exact substring, weighted token overlap,
//!   sequence ratio, character n-gram Jaccard, with length damping
//! - In-memory TTL cache keyed by the normalized query (lazy expiry)
//! - Linear-backoff retry around the fetch pipeline; only successful
//!   searches are cached
//! - The page-fetching backend sits behind [`PageFetcher`], so tests
//!   drive the whole pipeline without the network
//!
//! ## Usage
//!
//! ```no_run
//! # async fn example() -> ecloud_search::Result<()> {
//! let searcher = ecloud_search::Searcher::new(ecloud_search::SearcherConfig::default())?;
//! let answer = searcher.get_best_answer("如何创建云主机").await?;
//! println!("{}: {}", answer.title, answer.answer);
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod searcher;
pub mod similarity;
pub mod types;

pub use answer::NO_RESULTS_ANSWER;
pub use config::SearcherConfig;
pub use error::{Result, SearchError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use searcher::{NO_RESULTS_TITLE, Searcher};
pub use types::{Alternative, Answer, SearchResult};
