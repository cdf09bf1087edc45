//! Reduces a ranked result list to the public answer payload.

use crate::searcher::NO_RESULTS_TITLE;
use crate::types::{Alternative, Answer, SearchResult};

/// Fixed answer text when the search produced nothing usable.
pub const NO_RESULTS_ANSWER: &str = "no relevant results found";

/// Build the answer payload from a ranked result list.
///
/// The first element becomes the answer (content, title, url, score →
/// confidence); ranks 2–3 become alternatives. An empty list — or the
/// orchestrator's lone "no results found" placeholder — yields the
/// fixed no-results answer with zero confidence and no alternatives.
pub fn build_answer(query: &str, results: &[SearchResult]) -> Answer {
    match results.first() {
        Some(best) if !is_no_results_placeholder(results) => Answer {
            question: query.to_owned(),
            answer: best.content.clone(),
            title: best.title.clone(),
            source_url: best.url.clone(),
            confidence: best.score,
            alternative_results: results
                .iter()
                .skip(1)
                .take(2)
                .map(|r| Alternative {
                    title: r.title.clone(),
                    url: r.url.clone(),
                    score: r.score,
                })
                .collect(),
        },
        _ => Answer {
            question: query.to_owned(),
            answer: NO_RESULTS_ANSWER.to_owned(),
            title: String::new(),
            source_url: String::new(),
            confidence: 0.0,
            alternative_results: Vec::new(),
        },
    }
}

/// True when the list is exactly the orchestrator's no-match placeholder.
fn is_no_results_placeholder(results: &[SearchResult]) -> bool {
    matches!(results, [only] if only.title == NO_RESULTS_TITLE && only.score == 0.0 && only.url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(scores: &[f64]) -> Vec<SearchResult> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| SearchResult {
                title: format!("title {i}"),
                content: format!("content {i}"),
                url: format!("https://example.com/{i}"),
                score,
            })
            .collect()
    }

    #[test]
    fn best_result_becomes_answer() {
        let answer = build_answer("query", &ranked(&[0.9, 0.5, 0.3]));
        assert_eq!(answer.question, "query");
        assert_eq!(answer.answer, "content 0");
        assert_eq!(answer.title, "title 0");
        assert_eq!(answer.source_url, "https://example.com/0");
        assert!((answer.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn alternatives_are_ranks_two_and_three() {
        let answer = build_answer("query", &ranked(&[0.9, 0.5, 0.3, 0.1]));
        assert_eq!(answer.alternative_results.len(), 2);
        assert_eq!(answer.alternative_results[0].title, "title 1");
        assert!((answer.alternative_results[0].score - 0.5).abs() < f64::EPSILON);
        assert_eq!(answer.alternative_results[1].title, "title 2");
    }

    #[test]
    fn single_result_has_no_alternatives() {
        let answer = build_answer("query", &ranked(&[0.7]));
        assert!(answer.alternative_results.is_empty());
        assert!((answer.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn two_results_yield_one_alternative() {
        let answer = build_answer("query", &ranked(&[0.7, 0.2]));
        assert_eq!(answer.alternative_results.len(), 1);
    }

    #[test]
    fn empty_list_gives_fixed_no_results_answer() {
        let answer = build_answer("query", &[]);
        assert_eq!(answer.answer, NO_RESULTS_ANSWER);
        assert!(answer.title.is_empty());
        assert!(answer.source_url.is_empty());
        assert!((answer.confidence - 0.0).abs() < f64::EPSILON);
        assert!(answer.alternative_results.is_empty());
    }

    #[test]
    fn no_match_placeholder_treated_as_empty() {
        let placeholder = vec![SearchResult::placeholder(NO_RESULTS_TITLE, "")];
        let answer = build_answer("query", &placeholder);
        assert_eq!(answer.answer, NO_RESULTS_ANSWER);
        assert!((answer.confidence - 0.0).abs() < f64::EPSILON);
        assert!(answer.alternative_results.is_empty());
    }

    #[test]
    fn real_result_titled_like_placeholder_is_not_swallowed() {
        // A genuine article could mention the placeholder text; only a
        // lone zero-score url-less entry counts as "no results".
        let results = vec![SearchResult {
            title: NO_RESULTS_TITLE.to_owned(),
            content: "article body".into(),
            url: "https://example.com/a".into(),
            score: 0.4,
        }];
        let answer = build_answer("query", &results);
        assert_eq!(answer.answer, "article body");
    }
}
