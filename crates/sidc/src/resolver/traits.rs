//! Resolution traits for the Delta -> legacy direction.
//!
//! Each tier of the degradation sequence is a [`TierResolver`]; the
//! [`DeltaTierChain`](super::DeltaTierChain) tries them in order.

use crate::models::{ResolutionSource, SymbolIdCode};
use crate::tables::MappingTable;

/// A legacy base code found by one tier, before the caller's affiliation,
/// status and echelon are written back into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierMatch {
    /// Base legacy code (15 characters, affiliation usually a wildcard).
    pub code: String,
    pub name: String,
    pub remarks: String,
    /// Which tier produced the match.
    pub source: ResolutionSource,
}

/// One tier in the Delta -> legacy degradation sequence.
///
/// Returning `None` means this tier has no match and the chain should
/// try the next one.
pub trait TierResolver: Send + Sync {
    /// Attempt to find a base legacy code for `query`.
    ///
    /// # Arguments
    /// * `table` - The loaded mapping table
    /// * `query` - A valid Delta code (symbol set is not "00")
    fn resolve(&self, table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch>;
}
