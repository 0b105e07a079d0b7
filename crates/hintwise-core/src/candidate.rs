//! Candidate pool entries

use crate::error::{SuggestError, SuggestResult};
use crate::symbol::SymbolRef;
use crate::tier::{ProvenanceTier, TierTag};

/// One name to compare against the query.
///
/// The symbol is borrowed from the caller for the duration of a ranking call.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    key: String,
    value: &'a SymbolRef,
    tier: ProvenanceTier,
}

impl<'a> Candidate<'a> {
    /// Validated constructor for candidates coming from an untyped collector.
    ///
    /// Rejects an empty key and an `Unknown` tier.
    pub fn new(
        key: impl Into<String>,
        value: &'a SymbolRef,
        tier: TierTag,
    ) -> SuggestResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(SuggestError::missing_key(value.identity_key()));
        }
        let tier = tier
            .resolve()
            .ok_or_else(|| SuggestError::unknown_tier(&key))?;
        Ok(Self { key, value, tier })
    }

    /// Construct with an already-concrete tier.
    ///
    /// The key must still be non-empty.
    pub fn with_tier(
        key: impl Into<String>,
        value: &'a SymbolRef,
        tier: ProvenanceTier,
    ) -> SuggestResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(SuggestError::missing_key(value.identity_key()));
        }
        Ok(Self { key, value, tier })
    }

    /// Candidate keyed by the symbol's own lookup name.
    pub fn for_symbol(value: &'a SymbolRef, tier: ProvenanceTier) -> SuggestResult<Self> {
        Self::with_tier(value.lookup_key(), value, tier)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &'a SymbolRef {
        self.value
    }

    pub fn tier(&self) -> ProvenanceTier {
        self.tier
    }

    pub fn identity_key(&self) -> String {
        self.value.identity_key()
    }
}
