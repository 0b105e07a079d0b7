//! Candidate pool files
//!
//! A pool file is JSON with two optional lists: flat `candidates`, each with a
//! key, a tier and a symbol, and `universe` trees that are walked into
//! candidates with a single tier per tree.

use anyhow::{Context, Result};
use hintwise_core::{
    walk_forest, Candidate, SuggestError, SuggestResult, SymbolRef, SymbolTree, TierTag,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed pool file. Owns the symbols that candidates borrow.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolFile {
    #[serde(default)]
    pub candidates: Vec<PoolEntry>,

    #[serde(default)]
    pub universe: Vec<UniverseEntry>,
}

/// One flat candidate
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolEntry {
    /// Lookup key; defaults to the symbol's own name
    pub key: Option<String>,

    /// Tier name; a missing tier is treated as unknown
    pub tier: Option<String>,

    pub symbol: SymbolRef,
}

/// A symbol tree whose every node shares one tier
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniverseEntry {
    pub tier: Option<String>,
    pub tree: SymbolTree,
}

impl PoolFile {
    /// Read and parse a pool file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pool file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid pool file: {}", path.display()))
    }

    /// Build the candidate pool, flat entries first, then each universe tree
    /// in file order.
    ///
    /// Fails on the first entry with an empty key or a tier that does not
    /// resolve to a concrete provenance.
    pub fn candidates(&self) -> SuggestResult<Vec<Candidate<'_>>> {
        let mut pool = Vec::with_capacity(self.candidates.len());

        for entry in &self.candidates {
            let key = entry
                .key
                .clone()
                .unwrap_or_else(|| entry.symbol.lookup_key().to_string());
            pool.push(Candidate::new(key, &entry.symbol, parse_tier(entry.tier.as_deref())?)?);
        }

        for entry in &self.universe {
            let tier = parse_tier(entry.tier.as_deref())?
                .resolve()
                .ok_or_else(|| SuggestError::unknown_tier(entry.tree.symbol.lookup_key()))?;
            for candidate in walk_forest(std::slice::from_ref(&entry.tree), tier) {
                pool.push(candidate?);
            }
        }

        Ok(pool)
    }

    /// Total number of symbols the file describes
    pub fn symbol_count(&self) -> usize {
        self.candidates.len()
            + self
                .universe
                .iter()
                .map(|entry| entry.tree.symbol_count())
                .sum::<usize>()
    }
}

fn parse_tier(tier: Option<&str>) -> SuggestResult<TierTag> {
    match tier {
        Some(name) => name.parse(),
        None => Ok(TierTag::Unknown),
    }
}
