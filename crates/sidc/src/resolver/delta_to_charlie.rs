//! Delta -> legacy (15-character) translation.
//!
//! A base legacy code comes from the tier chain; the caller's affiliation,
//! status, HQ/TF/FD and echelon values are then written back into it.

use std::sync::Arc;

use crate::errors::{FailureClass, Result, SidcError};
use crate::models::{
    CharlieResolution, ResolutionSource, SymbolIdCode, REMARK_BAD_LENGTH, REMARK_INVALID_CODE,
    REMARK_NOT_FOUND,
};
use crate::tables::{MappingTable, AFFILIATION, ECHELON_MOBILITY, HQ_TF_FD, STATUS};

use super::chain::DeltaTierChain;
use super::charlie_to_delta::LEGACY_CODE_LENGTH;

/// Translates Delta codes to legacy codes against a mapping table.
pub struct DeltaToCharlieResolver {
    table: Arc<MappingTable>,
    chain: DeltaTierChain,
}

impl DeltaToCharlieResolver {
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self::with_chain(table, DeltaTierChain::new())
    }

    /// Use a custom tier chain, e.g. one extended with
    /// [`DeltaTierChain::add_tier`].
    pub fn with_chain(table: Arc<MappingTable>, chain: DeltaTierChain) -> Self {
        Self { table, chain }
    }

    /// Translate an 8- or 20-character Delta code. Never fails; the
    /// remarks and source record how well the code was resolved.
    pub fn resolve(&self, code: Option<&str>) -> CharlieResolution {
        let Some(code) = code else {
            return malformed(REMARK_BAD_LENGTH);
        };

        let symbol = match parse_valid(code.trim()) {
            Ok(symbol) => symbol,
            Err(SidcError::BadLength { .. }) => return malformed(REMARK_BAD_LENGTH),
            Err(e) => {
                log::debug!("Rejected Delta code '{}': {}", code, e);
                return malformed(REMARK_INVALID_CODE);
            }
        };

        match self.chain.resolve(&self.table, &symbol) {
            Ok(matched) => {
                let code = reinject_fields(&matched.code, &symbol);
                log::debug!(
                    "Resolved {} to {} ({:?})",
                    symbol.full_code(),
                    code,
                    matched.source
                );
                CharlieResolution {
                    code,
                    name: matched.name,
                    remarks: matched.remarks,
                    source: matched.source,
                }
            }
            Err(e) => {
                debug_assert_eq!(e.class(), FailureClass::NotFound);
                log::debug!("{}", e);
                CharlieResolution::unresolved(
                    ResolutionSource::NotFound,
                    REMARK_NOT_FOUND,
                    REMARK_NOT_FOUND,
                )
            }
        }
    }
}

fn malformed(remark: &str) -> CharlieResolution {
    CharlieResolution::unresolved(ResolutionSource::Malformed, remark, remark)
}

fn parse_valid(code: &str) -> Result<SymbolIdCode> {
    let symbol = SymbolIdCode::parse(code)?;
    if !symbol.is_valid() {
        return Err(SidcError::InvalidCode(code.to_string()));
    }
    Ok(symbol)
}

/// Write the Delta affiliation, status, HQ/TF/FD and echelon into legacy
/// positions 1, 3, 10 and 11 of `base`. Unregistered values use each
/// table's default character.
fn reinject_fields(base: &str, symbol: &SymbolIdCode) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    if chars.len() < LEGACY_CODE_LENGTH {
        log::warn!("Base legacy code '{}' is too short to adjust", base);
        return base.to_string();
    }

    chars[1] = AFFILIATION.to_charlie_or_default(symbol.affiliation());
    chars[3] = STATUS.to_charlie_or_default(symbol.status());
    chars[10] = HQ_TF_FD.to_charlie_or_default(symbol.hq_tf_fd());
    chars[11] = ECHELON_MOBILITY.to_charlie_or_default(symbol.echelon_mobility());
    chars.into_iter().collect()
}
