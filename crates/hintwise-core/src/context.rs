//! Usage-position filtering
//!
//! The caller decides how the unresolved name is used (as a type, a value,
//! an attribute, or a namespace); this module only drops candidates that
//! cannot appear in that position.

use crate::candidate::Candidate;
use crate::error::SuggestError;
use crate::symbol::SymbolRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform base type every attribute derives from.
pub const ATTRIBUTE_BASE_TYPE: &str = "Attribute";

/// Conventional suffix on attribute type names.
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Separators that mark a hierarchical name.
const HIERARCHY_SEPARATORS: &[&str] = &[".", "::"];

/// Syntactic position of the unresolved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsagePosition {
    Type,
    Value,
    Attribute,
    Namespace,
    #[default]
    Unknown,
}

impl UsagePosition {
    /// True if `candidate` may appear in this position.
    pub fn admits(self, candidate: &Candidate<'_>) -> bool {
        let symbol = candidate.value();
        match self {
            Self::Unknown => true,
            Self::Type => symbol.as_type().is_some(),
            Self::Attribute => {
                // Suffix match applies to every symbol kind
                symbol
                    .as_type()
                    .is_some_and(|ty| ty.derives_from(ATTRIBUTE_BASE_TYPE))
                    || candidate.key().ends_with(ATTRIBUTE_SUFFIX)
            }
            Self::Namespace => {
                matches!(symbol, SymbolRef::Namespace { .. })
                    || HIERARCHY_SEPARATORS
                        .iter()
                        .any(|sep| candidate.key().contains(sep))
            }
            Self::Value => matches!(
                symbol,
                SymbolRef::Method { .. }
                    | SymbolRef::Property { .. }
                    | SymbolRef::Field { .. }
                    | SymbolRef::Local { .. }
                    | SymbolRef::Parameter { .. }
                    | SymbolRef::EnumMember { .. }
                    | SymbolRef::Type(_)
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Value => "value",
            Self::Attribute => "attribute",
            Self::Namespace => "namespace",
            Self::Unknown => "unknown",
        }
    }
}

/// Keep the candidates admitted in `usage`, preserving order.
pub fn filter_by_usage<'c, 'a>(
    usage: UsagePosition,
    candidates: &'c [Candidate<'a>],
) -> Vec<&'c Candidate<'a>> {
    candidates.iter().filter(|c| usage.admits(c)).collect()
}

impl fmt::Display for UsagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsagePosition {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "type" => Ok(Self::Type),
            "value" => Ok(Self::Value),
            "attribute" => Ok(Self::Attribute),
            "namespace" => Ok(Self::Namespace),
            "unknown" | "any" => Ok(Self::Unknown),
            _ => Err(SuggestError::unrecognized(
                "usage position",
                s,
                "type, value, attribute, namespace, unknown",
            )),
        }
    }
}
