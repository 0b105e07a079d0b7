//! Lazy candidate collection from a symbol tree
//!
//! Candidate universes can be large (every type in every referenced library),
//! so pools are produced by walking a borrowed tree on demand instead of
//! materializing a flat list up front.

use crate::candidate::Candidate;
use crate::error::SuggestResult;
use crate::symbol::SymbolRef;
use crate::tier::ProvenanceTier;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// A symbol and the symbols nested inside it: namespaces contain namespaces
/// and types, types contain members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolTree {
    pub symbol: SymbolRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SymbolTree>,
}

impl SymbolTree {
    /// A node with no children
    pub fn leaf(symbol: SymbolRef) -> Self {
        Self {
            symbol,
            children: Vec::new(),
        }
    }

    /// A node with children
    pub fn node(symbol: SymbolRef, children: Vec<SymbolTree>) -> Self {
        Self { symbol, children }
    }

    /// Depth-first, pre-order walk over this node and everything below it.
    ///
    /// Each call starts a fresh walk.
    pub fn walk(&self, tier: ProvenanceTier) -> UniverseWalk<'_> {
        UniverseWalk {
            stack: vec![self],
            tier,
        }
    }

    /// Number of symbols in this subtree.
    pub fn symbol_count(&self) -> usize {
        1 + self.children.iter().map(SymbolTree::symbol_count).sum::<usize>()
    }
}

/// Walk several roots in order, all tagged with the same tier.
pub fn walk_forest(roots: &[SymbolTree], tier: ProvenanceTier) -> UniverseWalk<'_> {
    UniverseWalk {
        stack: roots.iter().rev().collect(),
        tier,
    }
}

/// Iterator produced by [`SymbolTree::walk`] and [`walk_forest`].
///
/// Yields an error for a node whose symbol has an empty lookup name; the walk
/// continues past it.
#[derive(Debug, Clone)]
pub struct UniverseWalk<'a> {
    stack: Vec<&'a SymbolTree>,
    tier: ProvenanceTier,
}

impl<'a> Iterator for UniverseWalk<'a> {
    type Item = SuggestResult<Candidate<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(Candidate::for_symbol(&node.symbol, self.tier))
    }
}

impl FusedIterator for UniverseWalk<'_> {}
