//! Candidate provenance tiers

use crate::constants::{
    CURRENT_CLASS_BONUS, CURRENT_PROJECT_BONUS, EXTERNAL_LIBRARY_BONUS, LOCAL_SCOPE_BONUS,
};
use crate::error::SuggestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a candidate came from. Ordered by precedence, so
/// `LocalScope > CurrentClass > CurrentProject > ExternalLibrary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvenanceTier {
    ExternalLibrary,
    CurrentProject,
    CurrentClass,
    LocalScope,
}

/// Ranking bonus per tier, indexed by discriminant.
const TIER_BONUSES: [f64; 4] = [
    EXTERNAL_LIBRARY_BONUS,
    CURRENT_PROJECT_BONUS,
    CURRENT_CLASS_BONUS,
    LOCAL_SCOPE_BONUS,
];

impl ProvenanceTier {
    /// All tiers, highest precedence first.
    pub const ALL: [ProvenanceTier; 4] = [
        ProvenanceTier::LocalScope,
        ProvenanceTier::CurrentClass,
        ProvenanceTier::CurrentProject,
        ProvenanceTier::ExternalLibrary,
    ];

    pub fn bonus(self) -> f64 {
        TIER_BONUSES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocalScope => "local_scope",
            Self::CurrentClass => "current_class",
            Self::CurrentProject => "current_project",
            Self::ExternalLibrary => "external_library",
        }
    }
}

impl fmt::Display for ProvenanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier as reported by a candidate collector, which may not know the origin.
///
/// Only [`TierTag::resolve`] turns this into a [`ProvenanceTier`]; `Unknown`
/// never reaches the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierTag {
    #[serde(alias = "local")]
    LocalScope,
    #[serde(alias = "class")]
    CurrentClass,
    #[serde(alias = "project")]
    CurrentProject,
    #[serde(alias = "external", alias = "library")]
    ExternalLibrary,
    #[default]
    Unknown,
}

impl TierTag {
    /// The concrete tier, or `None` for `Unknown`.
    pub fn resolve(self) -> Option<ProvenanceTier> {
        match self {
            Self::LocalScope => Some(ProvenanceTier::LocalScope),
            Self::CurrentClass => Some(ProvenanceTier::CurrentClass),
            Self::CurrentProject => Some(ProvenanceTier::CurrentProject),
            Self::ExternalLibrary => Some(ProvenanceTier::ExternalLibrary),
            Self::Unknown => None,
        }
    }
}

impl From<ProvenanceTier> for TierTag {
    fn from(tier: ProvenanceTier) -> Self {
        match tier {
            ProvenanceTier::LocalScope => Self::LocalScope,
            ProvenanceTier::CurrentClass => Self::CurrentClass,
            ProvenanceTier::CurrentProject => Self::CurrentProject,
            ProvenanceTier::ExternalLibrary => Self::ExternalLibrary,
        }
    }
}

impl FromStr for TierTag {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "local_scope" | "local" => Ok(Self::LocalScope),
            "current_class" | "class" => Ok(Self::CurrentClass),
            "current_project" | "project" => Ok(Self::CurrentProject),
            "external_library" | "external" | "library" => Ok(Self::ExternalLibrary),
            "unknown" => Ok(Self::Unknown),
            _ => Err(SuggestError::unrecognized(
                "tier",
                s,
                "local_scope, current_class, current_project, external_library, unknown",
            )),
        }
    }
}
