//! Hintwise suggestion engine
//!
//! Given an unresolved name and a pool of candidate names tagged with where
//! they came from, produces a short ranked "did you mean" list:
//! - Normalization and camel-case tokenization
//! - Jaro / Jaro-Winkler base similarity
//! - Composite scoring with exact, containment, and token bonuses
//! - Usage-position filtering (type, value, attribute, namespace)
//! - Provenance-tier bonuses, deduplication, and top-K selection
//!
//! # Example
//!
//! ```
//! use hintwise_core::{suggest, Candidate, ProvenanceTier, SymbolRef};
//!
//! let length = SymbolRef::Property {
//!     name: "Length".to_string(),
//!     container: "System.String".to_string(),
//! };
//! let pool = vec![Candidate::for_symbol(&length, ProvenanceTier::CurrentClass).unwrap()];
//!
//! let suggestions = suggest("Lenght", &pool);
//! assert_eq!(suggestions[0].identity_key, "System.String.Length");
//! ```

pub mod candidate;
pub mod constants;
pub mod context;
pub mod error;
pub mod jaro;
pub mod normalize;
pub mod rank;
pub mod score;
pub mod symbol;
pub mod tier;
pub mod tokenize;
pub mod universe;

// Re-export main types
pub use candidate::Candidate;
pub use context::{filter_by_usage, UsagePosition};
pub use error::{SuggestError, SuggestResult};
pub use jaro::{jaro, jaro_winkler};
pub use normalize::normalize;
pub use rank::{suggest, Ranker, RankerOptions, Suggestion};
pub use score::{composite_score, passes_threshold, score_breakdown, ScoreBreakdown};
pub use symbol::{SymbolRef, TypeKind, TypeSymbol};
pub use tier::{ProvenanceTier, TierTag};
pub use tokenize::tokenize;
pub use universe::{walk_forest, SymbolTree, UniverseWalk};
