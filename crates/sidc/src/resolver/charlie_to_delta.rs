//! Legacy (15-character) -> Delta translation.
//!
//! The lookup key collapses surface variants of a symbol onto one table row:
//! affiliation becomes '*' and status becomes 'P'. Weather codes keep both
//! characters. A missed key is retried with the 'F' and then the 'H'
//! affiliation, since some rows only exist in one of those forms.
//!
//! The four single-character fields are translated independently of the
//! row and written over its values.

use std::sync::Arc;

use crate::errors::{Result, SidcError};
use crate::models::{
    DeltaResolution, ResolutionSource, SymbolIdCode, REMARK_BAD_LENGTH, REMARK_NOT_FOUND,
};
use crate::tables::{MappingRow, MappingTable, AFFILIATION, ECHELON_MOBILITY, HQ_TF_FD, STATUS};

use super::tiers::{clean_name, clean_remarks};

/// Minimum length of a legacy code.
pub const LEGACY_CODE_LENGTH: usize = 15;

/// Placeholder symbol set and entity for retired symbols.
const RETIRED_SYMBOL_SET: &str = "98";
const RETIRED_ENTITY: &str = "100000";

const WILDCARD_AFFILIATION: char = '*';
const CANONICAL_STATUS: char = 'P';
const ALTERNATE_AFFILIATIONS: [char; 2] = ['F', 'H'];

/// Translates legacy codes to Delta codes against a mapping table.
#[derive(Debug, Clone)]
pub struct CharlieToDeltaResolver {
    table: Arc<MappingTable>,
}

impl CharlieToDeltaResolver {
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Translate a legacy code. Never fails; the remarks and source record
    /// how well the code was resolved.
    pub fn resolve(&self, code: Option<&str>) -> DeltaResolution {
        let Some(code) = code else {
            return DeltaResolution::unresolved(ResolutionSource::Malformed, REMARK_BAD_LENGTH);
        };

        let chars: Vec<char> = code.trim().to_uppercase().chars().collect();
        if chars.len() < LEGACY_CODE_LENGTH {
            log::debug!(
                "Legacy code '{}' shorter than {} characters",
                code,
                LEGACY_CODE_LENGTH
            );
            return DeltaResolution::unresolved(ResolutionSource::Malformed, REMARK_BAD_LENGTH);
        }

        let (row, source) = match self.find_row(&chars) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("{}", e);
                return DeltaResolution::unresolved(ResolutionSource::NotFound, REMARK_NOT_FOUND);
            }
        };

        if row.is_retired() {
            log::warn!("Retired symbol: {}", row.legacy_prefix);
        }

        let mut symbol = SymbolIdCode::new();
        if row.has_delta() {
            symbol.set_symbol_set(&row.symbol_set);
            symbol.set_entity_code(&row.entity_code);
        } else {
            symbol.set_symbol_set(RETIRED_SYMBOL_SET);
            symbol.set_entity_code(RETIRED_ENTITY);
        }
        symbol.set_modifier1(&row.modifier1);
        symbol.set_modifier2(&row.modifier2);

        apply_legacy_fields(&mut symbol, &chars);

        DeltaResolution {
            symbol,
            name: clean_name(&row.name),
            remarks: clean_remarks(&row.remarks),
            source,
        }
    }

    /// Row for the canonical key, then for each alternate affiliation.
    fn find_row(&self, chars: &[char]) -> Result<(&MappingRow, ResolutionSource)> {
        let key = lookup_key(chars);
        log::debug!("Using legacy lookup key: {}", key);

        if let Some(row) = self.table.get_by_prefix(&key) {
            return Ok((row, ResolutionSource::Exact));
        }

        for affiliation in ALTERNATE_AFFILIATIONS {
            let alternate = with_affiliation(&key, affiliation);
            if let Some(row) = self.table.get_by_prefix(&alternate) {
                log::debug!("Matched alternate key {} for {}", alternate, key);
                return Ok((row, ResolutionSource::AlternateKey));
            }
        }

        Err(SidcError::not_found("mapping", key))
    }
}

/// The 10-character mapping table key for an upper-cased legacy code.
fn lookup_key(chars: &[char]) -> String {
    let is_weather = chars[0] == 'W';
    let (affiliation, status) = if is_weather {
        (chars[1], chars[3])
    } else {
        (WILDCARD_AFFILIATION, CANONICAL_STATUS)
    };

    let mut key = String::with_capacity(10);
    key.push(chars[0]);
    key.push(affiliation);
    key.push(chars[2]);
    key.push(status);
    key.extend(&chars[4..10]);
    key
}

fn with_affiliation(key: &str, affiliation: char) -> String {
    key.chars()
        .enumerate()
        .map(|(i, c)| if i == 1 { affiliation } else { c })
        .collect()
}

/// Translate affiliation (1), status (3), HQ/TF/FD (10) and echelon (11).
/// Characters with no table entry leave the field at its default.
fn apply_legacy_fields(symbol: &mut SymbolIdCode, chars: &[char]) {
    if let Some(value) = AFFILIATION.to_delta(chars[1]) {
        symbol.set_affiliation(value);
    }
    if let Some(value) = STATUS.to_delta(chars[3]) {
        symbol.set_status(value);
    }
    if let Some(value) = HQ_TF_FD.to_delta(chars[10]) {
        symbol.set_hq_tf_fd(value);
    }
    if let Some(value) = ECHELON_MOBILITY.to_delta(chars[11]) {
        symbol.set_echelon_mobility(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "LegacyPrefix10,LegacyFull15,DeltaSymbolSet,DeltaEntity,DeltaMod1,DeltaMod2,DeltaName,Mod1Name,Mod2Name,FallbackCode,Remarks\n\
        G*GPGLC---,G*GPGLC-------X,25,140103,00,00,Line Of Contact,,,,pass\n\
        S*GPUCI---,S*GPUCI--------,10,121100,00,00,Infantry,,,,pass\n\
        SFGPUCR---,SFGPUCR--------,10,121300,00,00,Reconnaissance,,,,pass\n\
        SHGPEXF---,SHGPEXF--------,15,110000,00,00,Hostile Equipment,,,,pass\n\
        WAS-PL----,WAS-PL----P----,45,110100,00,00,Pressure Systems : Unknown,,,,pass\n\
        S*GPUSX---,S*GPUSX--------,,,,,Retired Unit,,,,Retired\n";

    fn resolver() -> CharlieToDeltaResolver {
        CharlieToDeltaResolver::new(Arc::new(
            MappingTable::from_reader(TABLE.as_bytes()).unwrap(),
        ))
    }

    #[test]
    fn test_tactical_graphic() {
        let resolution = resolver().resolve(Some("GFGPGLC-------X"));
        assert_eq!(resolution.symbol.full_code(), "10032500001401030000");
        assert_eq!(resolution.name, "Line Of Contact");
        assert_eq!(resolution.remarks, "success");
        assert_eq!(resolution.source, ResolutionSource::Exact);
    }

    #[test]
    fn test_unit_with_status_and_echelon() {
        let resolution = resolver().resolve(Some("SFGAUCI---AAUSG"));
        assert_eq!(resolution.symbol.affiliation(), "3");
        assert_eq!(resolution.symbol.symbol_set(), "10");
        assert_eq!(resolution.symbol.full_code(), "10031012111211000000");
    }

    #[test]
    fn test_lower_case_input() {
        let resolution = resolver().resolve(Some("shgpuci--------"));
        assert_eq!(resolution.symbol.full_code(), "10061000001211000000");
    }

    #[test]
    fn test_friendly_only_row_via_alternate_key() {
        let resolution = resolver().resolve(Some("SHGPUCR--------"));
        assert_eq!(resolution.source, ResolutionSource::AlternateKey);
        assert_eq!(resolution.symbol.entity_code(), "121300");
        assert_eq!(resolution.symbol.affiliation(), "6");
    }

    #[test]
    fn test_hostile_only_row_via_alternate_key() {
        let resolution = resolver().resolve(Some("SSGPEXF--------"));
        assert_eq!(resolution.source, ResolutionSource::AlternateKey);
        assert_eq!(resolution.symbol.symbol_set(), "15");
        assert_eq!(resolution.symbol.affiliation(), "5");
    }

    #[test]
    fn test_weather_keeps_affiliation_and_status_in_key() {
        let resolution = resolver().resolve(Some("WAS-PL----P----"));
        assert_eq!(resolution.symbol.symbol_set(), "45");
        assert_eq!(resolution.name, "Pressure Systems");
    }

    #[test]
    fn test_retired_row_uses_placeholder() {
        let resolution = resolver().resolve(Some("SFGPUSX--------"));
        assert_eq!(resolution.symbol.symbol_set(), "98");
        assert_eq!(resolution.symbol.entity_code(), "100000");
        assert_eq!(resolution.remarks, "Retired");
        assert!(resolution.symbol.is_valid());
    }

    #[test]
    fn test_unresolved_inputs_are_invalid() {
        let resolver = resolver();

        let resolution = resolver.resolve(None);
        assert!(!resolution.symbol.is_valid());
        assert_eq!(resolution.source, ResolutionSource::Malformed);

        let resolution = resolver.resolve(Some("SFGPUCI"));
        assert!(!resolution.symbol.is_valid());
        assert_eq!(resolution.remarks, "Bad SIDC Length");

        let resolution = resolver.resolve(Some("SFGPXXXX-------"));
        assert!(!resolution.symbol.is_valid());
        assert_eq!(resolution.source, ResolutionSource::NotFound);
        assert_eq!(resolution.remarks, "not found in mapping table");
    }

    #[test]
    fn test_lookup_key() {
        let chars: Vec<char> = "SFGAUCI---AAUSG".chars().collect();
        assert_eq!(lookup_key(&chars), "S*GPUCI---");
        let chars: Vec<char> = "WAS-PL----P----".chars().collect();
        assert_eq!(lookup_key(&chars), "WAS-PL----");
    }
}
