//! Similarity scoring strategies.
//!
//! Both scorers are lexical-overlap heuristics used only to rank candidates.
//! The two formulas are not interchangeable:
//! the matcher's 0.3 threshold was calibrated against each one's raw output.

use hacknhost_core::config::ScoringKind;
use std::sync::Arc;

/// Query tokens shorter than this are ignored by [`ServerScorer`].
const MIN_QUERY_TOKEN_CHARS: usize = 3;

/// Weight applied to the partial-match ratio by [`ServerScorer`].
const PARTIAL_WEIGHT: f64 = 0.5;

/// A pluggable similarity function between a normalized query and a candidate question.
pub trait ScoringStrategy: Send + Sync {
    /// Short identifier, e.g. "server".
    fn name(&self) -> &'static str;

    /// Score `candidate` against `query`. Not required to be symmetric.
    fn similarity(&self, query: &str, candidate: &str) -> f64;
}

/// Bidirectional substring containment between two tokens.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Scorer used by the server-backed chat.
///
/// `exact / n + (partial / n) * 0.5`, where `n` counts query tokens of at
/// least three characters. Every exact match is also a partial match, so a
/// fully matching query scores 1.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerScorer;

impl ScoringStrategy for ServerScorer {
    fn name(&self) -> &'static str {
        "server"
    }

    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        let query_tokens: Vec<&str> = query
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_QUERY_TOKEN_CHARS)
            .collect();
        let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();

        let exact = query_tokens
            .iter()
            .filter(|q| candidate_tokens.contains(*q))
            .count();
        let partial = query_tokens
            .iter()
            .filter(|q| candidate_tokens.iter().any(|c| overlaps(c, q)))
            .count();

        let n = query_tokens.len().max(1) as f64;
        let exact_score = exact as f64 / n;
        let partial_score = (partial as f64 / n) * PARTIAL_WEIGHT;
        exact_score + partial_score
    }
}

/// Scorer used by the client-only fallback chat.
///
/// Plain ratio of query tokens overlapping any candidate token, over the
/// larger token count. No length filter and no exact/partial split.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineScorer;

impl ScoringStrategy for OfflineScorer {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn similarity(&self, query: &str, candidate: &str) -> f64 {
        let query_tokens: Vec<&str> = query.split_whitespace().collect();
        let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();

        let common = query_tokens
            .iter()
            .filter(|q| candidate_tokens.iter().any(|c| overlaps(c, q)))
            .count();

        let longest = query_tokens.len().max(candidate_tokens.len()).max(1);
        common as f64 / longest as f64
    }
}

/// Strategy for a configured scoring kind.
pub fn strategy_for(kind: ScoringKind) -> Arc<dyn ScoringStrategy> {
    match kind {
        ScoringKind::Server => Arc::new(ServerScorer),
        ScoringKind::Offline => Arc::new(OfflineScorer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_server_full_match_scores_one_and_a_half() {
        let s = ServerScorer.similarity("hackathon prizes", "hackathon prizes");
        assert!(approx(s, 1.5));
    }

    #[test]
    fn test_server_is_asymmetric() {
        let forward = ServerScorer.similarity("team building", "team");
        let backward = ServerScorer.similarity("team", "team building");
        assert!(approx(forward, 0.75));
        assert!(approx(backward, 1.5));
        assert!(!approx(forward, backward));
    }

    #[test]
    fn test_server_drops_short_query_tokens_only() {
        // "is", "it", "a" are dropped from the query; "hackathon" matches fully.
        let s = ServerScorer.similarity("is it a hackathon", "what is a hackathon");
        assert!(approx(s, 1.5));
    }

    #[test]
    fn test_server_short_candidate_tokens_still_count_as_partial() {
        // Candidate "a" is contained in "banana".
        let s = ServerScorer.similarity("banana", "a");
        assert!(approx(s, 0.5));
    }

    #[test]
    fn test_server_partial_only() {
        // "hack" is inside "hackathon" but not equal to it.
        let s = ServerScorer.similarity("hack", "what is a hackathon");
        assert!(approx(s, 0.5));
    }

    #[test]
    fn test_server_no_usable_tokens() {
        assert!(approx(ServerScorer.similarity("hi", "hello there"), 0.0));
        assert!(approx(ServerScorer.similarity("", ""), 0.0));
    }

    #[test]
    fn test_offline_ratio_over_longer_side() {
        let s = OfflineScorer.similarity("a hackathon", "what is a hackathon");
        // "a" overlaps "what" and "a"; "hackathon" overlaps itself; 2 / 4.
        assert!(approx(s, 0.5));
        assert!(approx(OfflineScorer.similarity("team", "team building"), 0.5));
        assert!(approx(OfflineScorer.similarity("", ""), 0.0));
    }

    #[test]
    fn test_strategies_differ() {
        let server = ServerScorer.similarity("team", "team building");
        let offline = OfflineScorer.similarity("team", "team building");
        assert!(!approx(server, offline));
    }

    #[test]
    fn test_strategy_for_kind() {
        assert_eq!(strategy_for(ScoringKind::Server).name(), "server");
        assert_eq!(strategy_for(ScoringKind::Offline).name(), "offline");
    }
}
