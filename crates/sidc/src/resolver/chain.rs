//! Tier chain - composite resolver that tries Delta -> legacy tiers in order.

use crate::errors::{Result, SidcError};
use crate::models::SymbolIdCode;
use crate::tables::MappingTable;

use super::tiers::{ExactTier, ModifiersRemovedTier, RelaxedModifierTier, SymbolSetFallbackTier};
use super::traits::{TierMatch, TierResolver};

/// Composite resolver that tries each tier in order.
///
/// The default order is:
/// 1. Exact tuple match
/// 2. One of the two modifiers matches
/// 3. Modifiers dropped
/// 4. Generic code for the symbol set
///
/// The chain stops at the first tier that returns a match. The symbol set
/// fallback is always tried last.
pub struct DeltaTierChain {
    tiers: Vec<Box<dyn TierResolver>>,
    fallback: SymbolSetFallbackTier,
}

impl DeltaTierChain {
    pub fn new() -> Self {
        Self {
            tiers: vec![
                Box::new(ExactTier),
                Box::new(RelaxedModifierTier),
                Box::new(ModifiersRemovedTier),
            ],
            fallback: SymbolSetFallbackTier,
        }
    }

    /// Add a tier to the chain.
    ///
    /// Extension point for callers with their own tables or matching rules.
    /// The tier is added before the symbol set fallback (which is always last).
    pub fn add_tier(&mut self, tier: Box<dyn TierResolver>) {
        self.tiers.push(tier);
    }

    /// Find a base legacy code for `query`.
    ///
    /// Returns [`SidcError::NotFound`] when no tier matches.
    pub fn resolve(&self, table: &MappingTable, query: &SymbolIdCode) -> Result<TierMatch> {
        for tier in &self.tiers {
            if let Some(matched) = tier.resolve(table, query) {
                return Ok(matched);
            }
        }

        if let Some(matched) = self.fallback.resolve(table, query) {
            return Ok(matched);
        }

        Err(SidcError::not_found("mapping", query.human_readable_code()))
    }
}

impl Default for DeltaTierChain {
    fn default() -> Self {
        Self::new()
    }
}
