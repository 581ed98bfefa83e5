//! The four Delta -> legacy tiers.

use crate::models::{
    ResolutionSource, SymbolIdCode, REMARK_MODIFIERS_REMOVED, REMARK_RELAXED_MODIFIER,
    REMARK_SUCCESS,
};
use crate::tables::{symbol_set_fallback, DeltaKey, MappingRow, MappingTable};

use super::traits::{TierMatch, TierResolver};

const UNKNOWN_NAME_SUFFIX: &str = " : Unknown";

/// Drop the " : Unknown" placeholder some table names carry.
pub(crate) fn clean_name(name: &str) -> String {
    name.strip_suffix(UNKNOWN_NAME_SUFFIX).unwrap_or(name).to_string()
}

/// Replace the table's "pass" marker with "success"; other remarks are kept.
pub(crate) fn clean_remarks(remarks: &str) -> String {
    if remarks.to_ascii_lowercase().contains("pass") {
        REMARK_SUCCESS.to_string()
    } else {
        remarks.to_string()
    }
}

fn row_match(row: &MappingRow, remarks: String, source: ResolutionSource) -> TierMatch {
    TierMatch {
        code: row.charlie_code().to_string(),
        name: clean_name(&row.name),
        remarks,
        source,
    }
}

/// Tier 1: all four of symbol set, entity, modifier 1 and modifier 2.
#[derive(Debug, Default)]
pub struct ExactTier;

impl TierResolver for ExactTier {
    fn resolve(&self, table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch> {
        let key = DeltaKey::new(
            query.symbol_set(),
            query.entity_code(),
            query.modifier1(),
            query.modifier2(),
        );
        table
            .get_by_tuple(&key)
            .map(|row| row_match(row, clean_remarks(&row.remarks), ResolutionSource::Exact))
    }
}

/// Tier 2: symbol set and entity, plus either one of the two modifiers.
#[derive(Debug, Default)]
pub struct RelaxedModifierTier;

impl TierResolver for RelaxedModifierTier {
    fn resolve(&self, table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch> {
        table
            .rows_for_entity(query.symbol_set(), query.entity_code())
            .find(|row| row.modifier1 == query.modifier1() || row.modifier2 == query.modifier2())
            .map(|row| {
                row_match(
                    row,
                    REMARK_RELAXED_MODIFIER.to_string(),
                    ResolutionSource::RelaxedModifier,
                )
            })
    }
}

/// Tier 3: symbol set and entity with the modifiers dropped.
///
/// The first row for the entity in load order wins, whatever its modifiers.
#[derive(Debug, Default)]
pub struct ModifiersRemovedTier;

impl TierResolver for ModifiersRemovedTier {
    fn resolve(&self, table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch> {
        table
            .rows_for_entity(query.symbol_set(), query.entity_code())
            .next()
            .map(|row| {
                row_match(
                    row,
                    REMARK_MODIFIERS_REMOVED.to_string(),
                    ResolutionSource::ModifiersRemoved,
                )
            })
    }
}

/// Tier 4: generic legacy code for the symbol set family.
#[derive(Debug, Default)]
pub struct SymbolSetFallbackTier;

impl TierResolver for SymbolSetFallbackTier {
    fn resolve(&self, _table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch> {
        let fallback = symbol_set_fallback(query.symbol_set())?;
        log::debug!(
            "No mapping for symbol set {} entity {}, using {} fallback",
            query.symbol_set(),
            query.entity_code(),
            fallback.family
        );
        Some(TierMatch {
            code: fallback.code.to_string(),
            name: fallback.family.to_string(),
            remarks: format!(
                "Symbol set {} entity {} not mapped, using {} fallback {}",
                query.symbol_set(),
                query.entity_code(),
                fallback.family,
                fallback.code
            ),
            source: ResolutionSource::SymbolSetFallback,
        })
    }
}
