//! Integration tests for `SymbolLookup` against the fixture tables.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use milsym_sidc::{
    DeltaTierChain, DeltaToCharlieResolver, GeometryType, MappingTable, ResolutionSource,
    SymbolIdCode, SymbolLookup, TablePaths, TierMatch, TierResolver,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn lookup() -> SymbolLookup {
    SymbolLookup::try_open(&TablePaths::from_dir(fixtures_dir())).unwrap()
}

// =============================================================================
// Legacy -> Delta
// =============================================================================

#[test]
fn test_delta_from_charlie_tactical_graphic() {
    let resolution = lookup().delta_from_charlie(Some("GFGPGLC-------X"));
    assert_eq!(resolution.symbol.full_code(), "10032500001401030000");
    assert_eq!(resolution.name, "Line Of Contact");
    assert_eq!(resolution.remarks, "success");
}

#[test]
fn test_delta_from_charlie_unit() {
    let resolution = lookup().delta_from_charlie(Some("SFGAUCI---AAUSG"));
    assert_eq!(resolution.symbol.affiliation(), "3");
    assert_eq!(resolution.symbol.symbol_set(), "10");
    assert_eq!(resolution.symbol.full_code(), "10031012111211000000");
}

#[test]
fn test_delta_from_charlie_null_is_invalid() {
    let resolution = lookup().delta_from_charlie(None);
    assert!(!resolution.symbol.is_valid());
}

#[test]
fn test_delta_from_charlie_short_and_unknown_are_invalid() {
    let lookup = lookup();
    assert!(!lookup.delta_from_charlie(Some("SFGPUCI")).symbol.is_valid());

    let resolution = lookup.delta_from_charlie(Some("SFGPZZZZ-------"));
    assert!(!resolution.symbol.is_valid());
    assert_eq!(resolution.source, ResolutionSource::NotFound);
}

#[test]
fn test_delta_from_charlie_friendly_only_key() {
    let resolution = lookup().delta_from_charlie(Some("SHGPUCR--------"));
    assert_eq!(resolution.source, ResolutionSource::AlternateKey);
    assert_eq!(resolution.symbol.full_code(), "10061000001213000000");
}

#[test]
fn test_delta_from_charlie_strips_unknown_name_suffix() {
    let resolution = lookup().delta_from_charlie(Some("SFAPMFC--------"));
    assert_eq!(resolution.name, "Cargo Airlift");
    assert_eq!(resolution.symbol.entity_code(), "110107");
}

#[test]
fn test_delta_from_charlie_retired_symbol() {
    let resolution = lookup().delta_from_charlie(Some("SFGPUSX--------"));
    assert_eq!(resolution.symbol.symbol_set(), "98");
    assert_eq!(resolution.symbol.entity_code(), "100000");
    assert_eq!(resolution.remarks, "Retired");
}

// =============================================================================
// Delta -> legacy
// =============================================================================

#[test]
fn test_charlie_from_delta_defaults() {
    let lookup = lookup();
    for code in [None, Some("XXXXXXXX"), Some("1110000")] {
        assert_eq!(lookup.charlie_from_delta(code).code, "SUGPU----------");
    }
}

#[test]
fn test_charlie_from_delta_bad_length_and_invalid() {
    let lookup = lookup();

    let (code, name, remarks) = lookup.charlie_from_delta(Some("1110000")).into_parts();
    assert_eq!(code, "SUGPU----------");
    assert_eq!(name, "Bad SIDC Length");
    assert_eq!(remarks, "Bad SIDC Length");

    let (code, _, remarks) = lookup
        .charlie_from_delta(Some("10030000001211000000"))
        .into_parts();
    assert_eq!(code, "SUGPU----------");
    assert_eq!(remarks, "Invalid SIDC Code");
}

#[test]
fn test_charlie_from_delta_exact() {
    let lookup = lookup();
    assert_eq!(
        lookup.charlie_from_delta(Some("10031012111211000000")).code,
        "SFGAUCI---AA---"
    );
    assert_eq!(
        lookup.charlie_from_delta(Some("10062500002815000000")).code,
        "GHMPNZ--------X"
    );
}

#[test]
fn test_charlie_from_delta_relaxed_modifier() {
    let lookup = lookup();

    let resolution = lookup.charlie_from_delta(Some("10030100001101070103"));
    assert_eq!(resolution.code, "SFAPMFCL-------");
    assert_eq!(resolution.remarks, "Not an exact modifier match");
    assert_eq!(resolution.source, ResolutionSource::RelaxedModifier);

    let resolution = lookup.charlie_from_delta(Some("10030100001101020501"));
    assert_eq!(resolution.code, "SFAPMFFI-------");
}

#[test]
fn test_charlie_from_delta_modifiers_removed() {
    let resolution = lookup().charlie_from_delta(Some("10030100001101079999"));
    assert_eq!(resolution.code, "SFAPMFC--------");
    assert_eq!(resolution.remarks, "Removed Modifiers to match");
}

#[test]
fn test_charlie_from_delta_symbol_set_fallback() {
    let lookup = lookup();
    assert_eq!(
        lookup.charlie_from_delta(Some("01999999")).code,
        "SUAP-----------"
    );

    let resolution = lookup.charlie_from_delta(Some("10060100001101050000"));
    assert_eq!(resolution.code, "SHAP-----------");
    assert_eq!(resolution.source, ResolutionSource::SymbolSetFallback);
    assert!(resolution.remarks.contains("110105"));
}

#[test]
fn test_charlie_from_delta_not_found() {
    let resolution = lookup().charlie_from_delta(Some("10032500002605000000"));
    assert_eq!(resolution.code, "SUGPU----------");
    assert_eq!(resolution.remarks, "not found in mapping table");
}

#[test]
fn test_round_trip_through_both_directions() {
    let lookup = lookup();
    let delta = lookup.delta_from_charlie(Some("SHGPUCI---AA---"));
    let charlie = lookup.charlie_from_delta(Some(&delta.symbol.full_code()));
    assert_eq!(charlie.code, "SHGPUCI---AA---");
}

// =============================================================================
// Names and dictionary
// =============================================================================

#[test]
fn test_name_to_code_exact() {
    assert_eq!(
        lookup().name_to_code("Aim Point H", "", "", ""),
        "GHGPGPWA------X"
    );
}

#[test]
fn test_name_to_code_prefix_with_affiliation() {
    assert_eq!(
        lookup().name_to_code("Limited Access Area", "", "HOSTILE", "Area"),
        "GHGPGAY-------X"
    );
}

#[test]
fn test_name_to_code_echelon() {
    assert_eq!(
        lookup().name_to_code("Infantry F", "BATTALION/SQUADRON", "", "Point"),
        "SFGPUCI----F---"
    );
}

#[test]
fn test_name_to_code_fuzzy_cases() {
    let lookup = lookup();
    assert_eq!(
        lookup.name_to_code("Boundaries Left", "", "", "Line"),
        "G-GPGLB-------X"
    );
    assert_eq!(lookup.name_to_code("Screen", "", "", ""), "GFTPS---------X");
    assert_eq!(
        lookup.name_to_code("Infantry H~3", "", "", ""),
        "SFGPUCI--------"
    );
    // Second call is served from the cache
    assert_eq!(lookup.name_to_code("SCREEN", "", "", ""), "GFTPS---------X");
}

#[test]
fn test_name_to_code_defaults_by_geometry() {
    let lookup = lookup();
    assert_eq!(lookup.name_to_code("No Such Symbol", "", "", "Point"), "SUGPU----------");
    assert_eq!(lookup.name_to_code("No Such Symbol", "", "", "Line"), "GUGPGLB-------X");
    assert_eq!(lookup.name_to_code("No Such Symbol", "", "", "Area"), "GUGPGAG-------X");
    assert_eq!(lookup.name_to_code("No Such Symbol", "", "", "Bogus"), "SUGPU----------");
}

#[test]
fn test_code_to_name() {
    let lookup = lookup();
    assert_eq!(
        lookup.code_to_name("SHGPUCI---AAUSG").as_deref(),
        Some("Infantry F")
    );
    assert_eq!(
        lookup.code_to_name("SHGPUCR--------").as_deref(),
        Some("Reconnaissance H")
    );
    assert_eq!(lookup.code_to_name("SFGPEVAL-------"), None);
}

#[test]
fn test_code_to_geometry_type() {
    let lookup = lookup();
    assert_eq!(lookup.code_to_geometry_type("GHMPOGL-----USG"), GeometryType::Line);
    assert_eq!(lookup.code_to_geometry_type("GHGPGAY-------X"), GeometryType::Area);
    assert_eq!(lookup.code_to_geometry_type("SFGPUCI--------"), GeometryType::Point);
    assert_eq!(lookup.code_to_geometry_type("SFGPEVAL-------"), GeometryType::Unknown);
}

#[test]
fn test_is_valid_code() {
    let lookup = lookup();
    assert!(lookup.is_valid_code("SFGPUCI--------"));
    assert!(!lookup.is_valid_code("SFGPUCI"));
    assert!(!lookup.is_valid_code("S*GPUCI--------"));
}

#[test]
fn test_shared_lookup_across_threads() {
    let lookup = Arc::new(lookup());
    let handles: Vec<_> = ["Screen", "Infantry H", "Limited Access Area", "Screen"]
        .into_iter()
        .map(|name| {
            let lookup = Arc::clone(&lookup);
            thread::spawn(move || lookup.name_to_code(name, "", "", ""))
        })
        .collect();

    let codes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(codes[0], "GFTPS---------X");
    assert_eq!(codes[1], "SFGPUCI--------");
    assert_eq!(codes[2], "GFGPGAY-------X");
    assert_eq!(codes[3], "GFTPS---------X");
}

// =============================================================================
// Custom tables and tiers
// =============================================================================

const MAPPING_HEADER: &str = "LegacyPrefix10,LegacyFull15,DeltaSymbolSet,DeltaEntity,DeltaMod1,DeltaMod2,DeltaName,Mod1Name,Mod2Name,FallbackCode,Remarks\n";

fn resolver_for(rows: &str) -> DeltaToCharlieResolver {
    let data = format!("{}{}", MAPPING_HEADER, rows);
    DeltaToCharlieResolver::new(Arc::new(MappingTable::from_reader(data.as_bytes()).unwrap()))
}

#[test]
fn test_modifiers_removed_uses_first_row_in_load_order() {
    let resolver = resolver_for(
        "S*APMFCH--,S*APMFCH-------,01,110107,00,01,Cargo Airlift,,Heavy,,pass\n\
         S*APMFC---,S*APMFC--------,01,110107,00,00,Cargo Airlift,,,,pass\n",
    );

    let resolution = resolver.resolve(Some("10030100001101079999"));
    assert_eq!(resolution.code, "SFAPMFCH-------");
    assert_eq!(resolution.remarks, "Removed Modifiers to match");
    assert_eq!(resolution.source, ResolutionSource::ModifiersRemoved);
}

struct AreaOfInterestTier;

impl TierResolver for AreaOfInterestTier {
    fn resolve(&self, _table: &MappingTable, query: &SymbolIdCode) -> Option<TierMatch> {
        (query.symbol_set() == "25" && query.entity_code() == "999999").then(|| TierMatch {
            code: "G*GPGAG-------X".to_string(),
            name: "General Area".to_string(),
            remarks: "local extension".to_string(),
            source: ResolutionSource::RelaxedModifier,
        })
    }
}

#[test]
fn test_custom_tier_runs_before_not_found() {
    let data = format!(
        "{}S*GPUCI---,S*GPUCI--------,10,121100,00,00,Infantry,,,,pass\n",
        MAPPING_HEADER
    );
    let table = Arc::new(MappingTable::from_reader(data.as_bytes()).unwrap());
    let mut chain = DeltaTierChain::new();
    chain.add_tier(Box::new(AreaOfInterestTier));
    let resolver = DeltaToCharlieResolver::with_chain(Arc::clone(&table), chain);

    let resolution = resolver.resolve(Some("10032500009999990000"));
    assert_eq!(resolution.code, "GFGPGAG-------X");
    assert_eq!(resolution.remarks, "local extension");

    // Without the extra tier control measures have no fallback
    let resolution = DeltaToCharlieResolver::new(table).resolve(Some("10032500009999990000"));
    assert_eq!(resolution.source, ResolutionSource::NotFound);
}
