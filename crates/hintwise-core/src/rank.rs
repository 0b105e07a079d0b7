//! Contextual ranking
//!
//! Scores a candidate pool against a query, adds provenance and well-known
//! bonuses, collapses candidates that denote the same entity, and keeps the
//! best few.

use crate::candidate::Candidate;
use crate::constants::{
    DEFAULT_PARALLEL_THRESHOLD, TOP_K, WELL_KNOWN_BONUS, WELL_KNOWN_MIN_SIMILARITY,
    WELL_KNOWN_NAMES,
};
use crate::context::{filter_by_usage, UsagePosition};
use crate::normalize::normalize;
use crate::score::{passes_threshold, score_normalized};
use crate::symbol::SymbolRef;
use crate::tier::ProvenanceTier;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// A ranked suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion<'a> {
    pub identity_key: String,
    /// The candidate key that was compared against the query
    pub key: String,
    pub value: &'a SymbolRef,
    pub tier: ProvenanceTier,
    /// Composite score before tier and well-known bonuses
    pub similarity_score: f64,
    pub final_score: f64,
}

/// Ranker tuning. Defaults reproduce the contract constants.
#[derive(Debug, Clone, PartialEq)]
pub struct RankerOptions {
    /// Maximum suggestions returned (default: 5)
    pub max_suggestions: usize,

    /// Pool size at which scoring runs on the rayon pool
    pub parallel_threshold: usize,

    /// Names added to the built-in well-known list
    pub extra_well_known: Vec<String>,
}

impl Default for RankerOptions {
    fn default() -> Self {
        Self {
            max_suggestions: TOP_K,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            extra_well_known: Vec::new(),
        }
    }
}

/// Reusable ranker. Holds configuration only; every call is independent.
#[derive(Debug, Clone)]
pub struct Ranker {
    options: RankerOptions,
    well_known: HashSet<String>,
}

/// A candidate that cleared the threshold, with its pool position for
/// stable tie-breaking.
struct Scored<'c, 'a> {
    index: usize,
    candidate: &'c Candidate<'a>,
    identity_key: String,
    similarity: f64,
    final_score: f64,
}

impl Ranker {
    pub fn new(options: RankerOptions) -> Self {
        let well_known = WELL_KNOWN_NAMES
            .iter()
            .map(|name| normalize(name))
            .chain(options.extra_well_known.iter().map(|name| normalize(name)))
            .collect();
        Self {
            options,
            well_known,
        }
    }

    pub fn options(&self) -> &RankerOptions {
        &self.options
    }

    /// Rank every candidate in the pool.
    pub fn rank<'a>(&self, query: &str, candidates: &[Candidate<'a>]) -> Vec<Suggestion<'a>> {
        self.rank_refs(query, candidates.iter().collect())
    }

    /// Rank only the candidates admitted in `usage`.
    pub fn rank_in_context<'a>(
        &self,
        query: &str,
        candidates: &[Candidate<'a>],
        usage: UsagePosition,
    ) -> Vec<Suggestion<'a>> {
        let admitted = filter_by_usage(usage, candidates);
        debug!(
            %usage,
            pool = candidates.len(),
            admitted = admitted.len(),
            "filtered candidates by usage position"
        );
        self.rank_refs(query, admitted)
    }

    /// True if `symbol`'s short name is on the well-known list.
    pub fn is_well_known(&self, symbol: &SymbolRef) -> bool {
        self.well_known
            .contains(&normalize(strip_generic_suffix(symbol.short_name())))
    }

    fn rank_refs<'a>(&self, query: &str, pool: Vec<&Candidate<'a>>) -> Vec<Suggestion<'a>> {
        let query_norm = normalize(query);
        if query_norm.is_empty() {
            debug!(pool = pool.len(), "empty query, no suggestions");
            return Vec::new();
        }

        let scored: Vec<Scored<'_, 'a>> = if pool.len() >= self.options.parallel_threshold {
            pool.par_iter()
                .enumerate()
                .filter_map(|(index, candidate)| self.score(query, &query_norm, index, *candidate))
                .collect()
        } else {
            pool.iter()
                .enumerate()
                .filter_map(|(index, candidate)| self.score(query, &query_norm, index, *candidate))
                .collect()
        };
        let accepted = scored.len();

        let mut ranked = dedup_by_identity(scored);
        ranked.sort_by(|a, b| {
            b.final_score
                .total_cmp(&a.final_score)
                .then_with(|| b.similarity.total_cmp(&a.similarity))
                .then_with(|| a.index.cmp(&b.index))
        });
        ranked.truncate(self.options.max_suggestions);

        debug!(
            query,
            pool = pool.len(),
            accepted,
            returned = ranked.len(),
            "ranked suggestions"
        );

        ranked
            .into_iter()
            .map(|s| Suggestion {
                identity_key: s.identity_key,
                key: s.candidate.key().to_string(),
                value: s.candidate.value(),
                tier: s.candidate.tier(),
                similarity_score: s.similarity,
                final_score: s.final_score,
            })
            .collect()
    }

    fn score<'c, 'a>(
        &self,
        query: &str,
        query_norm: &str,
        index: usize,
        candidate: &'c Candidate<'a>,
    ) -> Option<Scored<'c, 'a>> {
        let key_norm = normalize(candidate.key());
        if key_norm == query_norm {
            trace!(key = candidate.key(), "skipping self match");
            return None;
        }

        let identity_key = candidate.identity_key();
        if identity_key == query {
            trace!(key = candidate.key(), "skipping candidate identical to query");
            return None;
        }

        let similarity = score_normalized(query, query_norm, candidate.key(), &key_norm).total();
        if !passes_threshold(similarity) {
            trace!(key = candidate.key(), similarity, "below threshold");
            return None;
        }

        let well_known = if similarity >= WELL_KNOWN_MIN_SIMILARITY
            && self.is_well_known(candidate.value())
        {
            WELL_KNOWN_BONUS
        } else {
            0.0
        };

        Some(Scored {
            index,
            candidate,
            identity_key,
            similarity,
            final_score: similarity + candidate.tier().bonus() + well_known,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(RankerOptions::default())
    }
}

/// Rank `candidates` against `query` with default options.
pub fn suggest<'a>(query: &str, candidates: &[Candidate<'a>]) -> Vec<Suggestion<'a>> {
    Ranker::default().rank(query, candidates)
}

/// Keep the highest final score per identity key. Earlier entries win ties.
fn dedup_by_identity<'c, 'a>(scored: Vec<Scored<'c, 'a>>) -> Vec<Scored<'c, 'a>> {
    let mut kept: Vec<Scored<'c, 'a>> = Vec::with_capacity(scored.len());
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(scored.len());

    for entry in scored {
        match slots.entry(entry.identity_key.clone()) {
            Entry::Occupied(slot) => {
                let existing = &mut kept[*slot.get()];
                if entry.final_score > existing.final_score {
                    *existing = entry;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(entry);
            }
        }
    }

    kept
}

/// `List<T>` and ``List`1`` both reduce to `List`.
fn strip_generic_suffix(name: &str) -> &str {
    name.split(['<', '`']).next().unwrap_or(name)
}
