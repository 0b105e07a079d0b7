//! Scoring and ranking constants
//!
//! These values are part of the engine's observable contract: changing any of
//! them changes which names get suggested and in what order.

/// Composite scores below this are never suggested.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.3;

/// Maximum number of suggestions returned by default.
pub const TOP_K: usize = 5;

/// Added when the normalized query and key are identical.
pub const EXACT_MATCH_BONUS: f64 = 0.3;

/// Added when one normalized string contains the other.
pub const CONTAINMENT_BONUS: f64 = 0.2;

/// Added per identical token pair.
pub const TOKEN_EXACT_BONUS: f64 = 0.2;

/// Added per token pair where one token prefixes the other.
pub const TOKEN_PARTIAL_BONUS: f64 = 0.1;

/// Flat bonus once at least [`MULTI_TOKEN_MIN_PAIRS`] token pairs matched.
pub const MULTI_TOKEN_BONUS: f64 = 0.2;

/// Matched token pairs needed for [`MULTI_TOKEN_BONUS`].
pub const MULTI_TOKEN_MIN_PAIRS: usize = 2;

/// Subtracted per character the candidate key is longer than the query.
pub const LENGTH_PENALTY_PER_CHAR: f64 = 0.01;

/// Jaro-Winkler prefix scaling factor.
pub const WINKLER_PREFIX_SCALE: f64 = 0.1;

/// Jaro-Winkler common-prefix cap.
pub const WINKLER_MAX_PREFIX: usize = 4;

/// Tier bonuses, highest precedence first.
pub const LOCAL_SCOPE_BONUS: f64 = 0.3;
pub const CURRENT_CLASS_BONUS: f64 = 0.2;
pub const CURRENT_PROJECT_BONUS: f64 = 0.1;
pub const EXTERNAL_LIBRARY_BONUS: f64 = 0.0;

/// Bonus for near-exact matches on very common type names.
pub const WELL_KNOWN_BONUS: f64 = 0.25;

/// Minimum composite similarity before [`WELL_KNOWN_BONUS`] applies.
pub const WELL_KNOWN_MIN_SIMILARITY: f64 = 0.8;

/// Curated container and utility type names eligible for [`WELL_KNOWN_BONUS`].
pub const WELL_KNOWN_NAMES: &[&str] = &[
    "List",
    "IList",
    "IReadOnlyList",
    "Dictionary",
    "IDictionary",
    "Map",
    "HashMap",
    "Array",
    "StringBuilder",
    "HashSet",
    "Set",
    "Queue",
    "Stack",
    "ConcurrentDictionary",
    "IEnumerable",
    "ICollection",
    "Task",
    "DateTime",
    "TimeSpan",
    "Guid",
    "Uuid",
];

/// Pool size at which candidate scoring switches to the rayon thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;
