//! Multi-factor text similarity between a query and a candidate text.
//!
//! Combines four sub-scores with fixed weights:
//!
//! - exact substring match (0.20)
//! - weighted token overlap (0.35) — token weights grow with in-text
//!   frequency and with token length relative to the longest query token
//! - difflib-style character sequence ratio (0.25)
//! - character bigram/trigram Jaccard overlap (0.20)
//!
//! The combined score is damped for short texts: a text shorter than the
//! query can reach at most `0.8 + 0.2 * len(text)/(5 * len(query))` of
//! the raw score. The result is always in `[0, 1]`. Pure and
//! deterministic — no I/O, no side effects.

use std::collections::HashSet;

use similar::TextDiff;

/// Weight of the exact-substring sub-score.
const WEIGHT_EXACT: f64 = 0.20;
/// Weight of the token-overlap sub-score.
const WEIGHT_TOKENS: f64 = 0.35;
/// Weight of the sequence-similarity sub-score.
const WEIGHT_SEQUENCE: f64 = 0.25;
/// Weight of the n-gram overlap sub-score.
const WEIGHT_NGRAM: f64 = 0.20;

/// Score `text` against `query`, returning a value in `[0, 1]`.
///
/// Returns 0.0 for empty text. Comparison is case-insensitive; both
/// inputs are trimmed and lowercased before scoring.
pub fn score(query: &str, text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let query_lc = query.trim().to_lowercase();
    let text_lc = text.trim().to_lowercase();

    let exact = if text_lc.contains(&query_lc) { 1.0 } else { 0.0 };
    let tokens = token_overlap(&query_lc, &text_lc);
    let sequence = sequence_ratio(&query_lc, &text_lc);
    let ngram = (jaccard_ngrams(&query_lc, &text_lc, 2) + jaccard_ngrams(&query_lc, &text_lc, 3)) / 2.0;

    let raw = WEIGHT_EXACT * exact
        + WEIGHT_TOKENS * tokens
        + WEIGHT_SEQUENCE * sequence
        + WEIGHT_NGRAM * ngram;

    let query_len = query_lc.chars().count() as f64;
    let text_len = text_lc.chars().count() as f64;

    (raw * length_damping(query_len, text_len)).clamp(0.0, 1.0)
}

/// Damping factor in `[0.8, 1.0]` based on text length relative to the
/// query. Texts at least five query-lengths long are undamped; an empty
/// query yields an infinite ratio which `min()` caps at 5.0.
fn length_damping(query_len: f64, text_len: f64) -> f64 {
    let length_ratio = (text_len / query_len).min(5.0) / 5.0;
    0.8 + 0.2 * length_ratio
}

/// Weighted token overlap between query and text.
///
/// Each query token is weighted by `(1 + 0.5 * occurrences_in_text) *
/// (token_length / longest_query_token_length)`; the score is the
/// weight of tokens present in the text over the total weight.
fn token_overlap(query: &str, text: &str) -> f64 {
    let query_tokens: HashSet<&str> = query.split_whitespace().collect();
    if query_tokens.is_empty() {
        return 0.0;
    }
    let text_tokens: HashSet<&str> = text.split_whitespace().collect();

    let longest = query_tokens
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    let mut total = 0.0;
    let mut matched = 0.0;
    for token in &query_tokens {
        let occurrences = text.matches(token).count() as f64;
        let weight = (1.0 + 0.5 * occurrences) * (token.chars().count() as f64 / longest);
        total += weight;
        if text_tokens.contains(token) {
            matched += weight;
        }
    }

    if total > 0.0 { matched / total } else { 0.0 }
}

/// Normalised character-level alignment ratio in `[0, 1]`.
///
/// Symmetric, and exactly 1.0 for identical strings.
fn sequence_ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Jaccard similarity of the character n-gram sets of `a` and `b`.
///
/// Strings shorter than `n` contribute an empty set; if the union is
/// empty the similarity is 0, not a division error.
fn jaccard_ngrams(a: &str, b: &str, n: usize) -> f64 {
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);

    let union = grams_a.union(&grams_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = grams_a.intersection(&grams_b).count();
    intersection as f64 / union as f64
}

/// Contiguous character n-grams of `s`.
fn ngrams(s: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < n {
        return HashSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert!((score("anything", "") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_is_within_unit_interval() {
        let samples = [
            ("云主机", "如何创建云主机实例"),
            ("reset password", "How to reset your account password"),
            ("a", "completely unrelated text about nothing"),
            ("long query with many words here", "short"),
            ("", "some text"),
        ];
        for (query, text) in samples {
            let s = score(query, text);
            assert!((0.0..=1.0).contains(&s), "score({query:?}, {text:?}) = {s}");
        }
    }

    #[test]
    fn identical_strings_hit_the_damped_maximum() {
        // All four sub-scores are 1.0; equal lengths give a damping
        // factor of 0.8 + 0.2 * (1/5) = 0.84.
        let s = score("reset password", "reset password");
        assert!((s - 0.84).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn exact_substring_beats_disjoint_text() {
        let with_match = score("云主机", "云主机创建指南");
        let without = score("云主机", "对象存储计费说明");
        assert!(with_match > without);
    }

    #[test]
    fn scoring_is_deterministic() {
        let a = score("backup policy", "how to configure a backup policy");
        let b = score("backup policy", "how to configure a backup policy");
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        let a = score("Reset Password", "reset password help");
        let b = score("  reset password  ", "reset password help");
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn token_overlap_full_match_is_one() {
        assert!((token_overlap("reset password", "password reset") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn token_overlap_empty_query_is_zero() {
        assert!((token_overlap("", "some text") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn token_overlap_weights_longer_tokens_higher() {
        // "password" matches but the short token "a" does not; the long
        // token carries more weight, so the score stays above 0.5.
        let s = token_overlap("a password", "password help");
        assert!(s > 0.5, "got {s}");
    }

    #[test]
    fn token_overlap_repeated_occurrences_raise_weight() {
        let once = token_overlap("backup", "backup");
        let thrice = token_overlap("backup", "backup backup backup");
        assert!((once - 1.0).abs() < f64::EPSILON);
        assert!((thrice - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sequence_ratio_identical_is_one() {
        assert!((sequence_ratio("abc", "abc") - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sequence_ratio_is_symmetric() {
        let ab = sequence_ratio("kitten", "sitting");
        let ba = sequence_ratio("sitting", "kitten");
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn jaccard_disjoint_is_zero() {
        assert!((jaccard_ngrams("abcd", "wxyz", 2) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jaccard_identical_is_one() {
        assert!((jaccard_ngrams("abcd", "abcd", 2) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jaccard_of_too_short_strings_is_zero_not_nan() {
        let s = jaccard_ngrams("a", "b", 3);
        assert!((s - 0.0).abs() < f64::EPSILON);
        assert!(!s.is_nan());
    }

    #[test]
    fn damping_factor_boundaries() {
        // Equal lengths: 0.8 + 0.2 * (1/5) = 0.84.
        assert!((length_damping(10.0, 10.0) - 0.84).abs() < 1e-12);
        // Five query-lengths or more: undamped.
        assert!((length_damping(10.0, 50.0) - 1.0).abs() < 1e-12);
        assert!((length_damping(10.0, 500.0) - 1.0).abs() < 1e-12);
        // Very short text bottoms out near 0.8.
        assert!((length_damping(100.0, 1.0) - 0.8004).abs() < 1e-9);
        // Empty query: infinite ratio capped at 5.0.
        assert!((length_damping(0.0, 5.0) - 1.0).abs() < 1e-12);
    }
}
