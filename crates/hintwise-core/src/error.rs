/// Suggestion engine error types
use thiserror::Error;

pub type SuggestResult<T> = Result<T, SuggestError>;

/// Contract violations raised at the candidate boundary.
///
/// Degenerate input (empty query, empty pool, nothing above threshold) is not
/// an error; it yields an empty suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("Candidate '{key}' has an unknown provenance tier; every ranked candidate needs a concrete tier")]
    UnknownTier { key: String },

    #[error("Candidate for symbol '{identity}' has a missing or empty key")]
    MissingKey { identity: String },

    #[error("Unrecognized {what} '{value}' (expected one of: {expected})")]
    Unrecognized {
        what: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl SuggestError {
    /// Create an unknown tier error
    pub fn unknown_tier(key: impl Into<String>) -> Self {
        Self::UnknownTier { key: key.into() }
    }

    /// Create a missing key error
    pub fn missing_key(identity: impl Into<String>) -> Self {
        Self::MissingKey {
            identity: identity.into(),
        }
    }

    pub(crate) fn unrecognized(
        what: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Unrecognized {
            what,
            value: value.into(),
            expected,
        }
    }
}
