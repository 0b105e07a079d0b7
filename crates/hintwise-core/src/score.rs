//! Composite similarity scoring
//!
//! Jaro-Winkler over the normalized strings, plus bonuses for exact matches,
//! containment, and shared word tokens, minus a penalty for candidates longer
//! than the query. The result is not clamped.

use crate::constants::{
    ACCEPTANCE_THRESHOLD, CONTAINMENT_BONUS, EXACT_MATCH_BONUS, LENGTH_PENALTY_PER_CHAR,
    MULTI_TOKEN_BONUS, MULTI_TOKEN_MIN_PAIRS, TOKEN_EXACT_BONUS, TOKEN_PARTIAL_BONUS,
};
use crate::jaro::jaro_winkler;
use crate::normalize::normalize;
use crate::tokenize::tokenize;
use serde::Serialize;

/// Every term that went into a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Jaro-Winkler over the normalized strings
    pub base: f64,
    pub exact_match: f64,
    pub containment: f64,
    /// Sum of per-pair token bonuses
    pub token_overlap: f64,
    pub multi_token: f64,
    /// Subtracted from the total; never negative
    pub length_penalty: f64,
    /// Token pairs that matched exactly or by prefix
    pub matched_token_pairs: usize,
}

impl ScoreBreakdown {
    /// The composite score.
    pub fn total(&self) -> f64 {
        self.base + self.exact_match + self.containment + self.token_overlap + self.multi_token
            - self.length_penalty
    }

    /// True when the composite score clears the acceptance threshold.
    pub fn is_accepted(&self) -> bool {
        passes_threshold(self.total())
    }
}

/// Score `candidate` against `query`, keeping every term.
pub fn score_breakdown(query: &str, candidate: &str) -> ScoreBreakdown {
    let query_norm = normalize(query);
    let candidate_norm = normalize(candidate);
    score_normalized(query, &query_norm, candidate, &candidate_norm)
}

/// Composite score of `candidate` against `query`.
pub fn composite_score(query: &str, candidate: &str) -> f64 {
    score_breakdown(query, candidate).total()
}

/// True when `score` is high enough to be suggested.
pub fn passes_threshold(score: f64) -> bool {
    score >= ACCEPTANCE_THRESHOLD
}

/// Scoring with caller-provided normalized forms, so a ranker can normalize
/// the query once per call.
pub(crate) fn score_normalized(
    query: &str,
    query_norm: &str,
    candidate: &str,
    candidate_norm: &str,
) -> ScoreBreakdown {
    let base = jaro_winkler(query_norm, candidate_norm);

    let exact_match = if query_norm == candidate_norm {
        EXACT_MATCH_BONUS
    } else {
        0.0
    };

    // An empty side would trivially be contained in anything.
    let containment = if !query_norm.is_empty()
        && !candidate_norm.is_empty()
        && (query_norm.contains(candidate_norm) || candidate_norm.contains(query_norm))
    {
        CONTAINMENT_BONUS
    } else {
        0.0
    };

    let (token_overlap, matched_token_pairs) = token_bonus(query, candidate);
    let multi_token = if matched_token_pairs >= MULTI_TOKEN_MIN_PAIRS {
        MULTI_TOKEN_BONUS
    } else {
        0.0
    };

    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();
    let length_penalty = LENGTH_PENALTY_PER_CHAR * candidate_len.saturating_sub(query_len) as f64;

    ScoreBreakdown {
        base,
        exact_match,
        containment,
        token_overlap,
        multi_token,
        length_penalty,
        matched_token_pairs,
    }
}

/// Pairwise token bonus over the raw tokenizations and the number of pairs
/// that earned it.
fn token_bonus(query: &str, candidate: &str) -> (f64, usize) {
    let query_tokens = tokenize(query);
    let candidate_tokens = tokenize(candidate);

    let mut bonus = 0.0;
    let mut pairs = 0;
    for q in &query_tokens {
        for c in &candidate_tokens {
            if q == c {
                bonus += TOKEN_EXACT_BONUS;
                pairs += 1;
            } else if q.starts_with(c.as_str()) || c.starts_with(q.as_str()) {
                bonus += TOKEN_PARTIAL_BONUS;
                pairs += 1;
            }
        }
    }
    (bonus, pairs)
}
