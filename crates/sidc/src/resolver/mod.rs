//! Code and name resolution.
//!
//! This module provides:
//! - [`CharlieToDeltaResolver`]: legacy -> Delta by prefix key with alternate affiliations
//! - [`DeltaToCharlieResolver`]: Delta -> legacy through the [`DeltaTierChain`]
//! - [`SymbolNameResolver`]: free-text names -> legacy codes with a [`NameOverrideCache`]
//!
//! ```text
//!  legacy code ──► lookup key ──► MappingTable (by prefix) ──► Delta fields
//!                                   ▲
//!  Delta code ──► DeltaTierChain ───┘ (by tuple) ──► base code ──► re-inject fields
//!                  Exact → RelaxedModifier → ModifiersRemoved → SymbolSetFallback
//! ```

mod chain;
mod charlie_to_delta;
mod delta_to_charlie;
mod name_cache;
mod name_resolver;
mod tiers;
mod traits;

pub use chain::DeltaTierChain;
pub use charlie_to_delta::{CharlieToDeltaResolver, LEGACY_CODE_LENGTH};
pub use delta_to_charlie::DeltaToCharlieResolver;
pub use name_cache::NameOverrideCache;
pub use name_resolver::{normalize_name, SymbolNameResolver};
pub use tiers::{ExactTier, ModifiersRemovedTier, RelaxedModifierTier, SymbolSetFallbackTier};
pub use traits::{TierMatch, TierResolver};
