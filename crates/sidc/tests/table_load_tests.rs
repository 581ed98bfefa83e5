//! Load failure handling for the lookup tables.

use std::fs;

use milsym_sidc::{FailureClass, SidcError, SymbolLookup, TablePaths};
use tempfile::TempDir;

const MAPPING_HEADER: &str = "LegacyPrefix10,LegacyFull15,DeltaSymbolSet,DeltaEntity,DeltaMod1,DeltaMod2,DeltaName,Mod1Name,Mod2Name,FallbackCode,Remarks\n";
const DICTIONARY_HEADER: &str =
    "ID,Name,SymbolId,StyleFile,Category,GeometryType,GeometryConversionType,Tags\n";

fn write_tables(dir: &TempDir, mapping: &str, dictionary: &str) -> TablePaths {
    let paths = TablePaths::from_dir(dir.path());
    fs::write(&paths.mapping_table, mapping).unwrap();
    fs::write(&paths.symbol_dictionary, dictionary).unwrap();
    paths
}

#[test]
fn test_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = TablePaths::from_dir(dir.path().join("missing"));

    let error = SymbolLookup::try_open(&paths).err().unwrap();
    assert_eq!(error.class(), FailureClass::Fatal);
    assert!(matches!(error, SidcError::TableRead { .. }));

    let lookup = SymbolLookup::open(&paths);
    assert!(!lookup.initialized());
    assert_eq!(
        lookup.charlie_from_delta(Some("10031000001211000000")).code,
        "SUGPU----------"
    );
    assert!(!lookup
        .delta_from_charlie(Some("SFGPUCI--------"))
        .symbol
        .is_valid());
}

#[test]
fn test_header_only_table_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = write_tables(
        &dir,
        MAPPING_HEADER,
        &format!("{}SFGPUCI---,Infantry F,SFGPUCI--------,,,P,,\n", DICTIONARY_HEADER),
    );

    match SymbolLookup::try_open(&paths) {
        Err(SidcError::EmptyTable { path }) => assert_eq!(path, paths.mapping_table),
        Err(other) => panic!("Expected EmptyTable, got {:?}", other),
        Ok(_) => panic!("Expected EmptyTable, got a lookup"),
    }

    // The dictionary still serves name lookups
    let lookup = SymbolLookup::open(&paths);
    assert!(!lookup.mapping_initialized());
    assert!(lookup.dictionary_initialized());
    assert_eq!(
        lookup.code_to_name("SFGPUCI--------").as_deref(),
        Some("Infantry F")
    );
}

#[test]
fn test_tables_load_from_temp_dir() {
    let dir = TempDir::new().unwrap();
    let paths = write_tables(
        &dir,
        &format!(
            "{}S*GPUCI---,S*GPUCI--------,10,121100,00,00,Infantry,,,,pass\n",
            MAPPING_HEADER
        ),
        &format!("{}SFGPUCI---,Infantry F,SFGPUCI--------,,,P,,\n", DICTIONARY_HEADER),
    );

    let lookup = SymbolLookup::try_open(&paths).unwrap();
    assert!(lookup.initialized());
    assert_eq!(
        lookup.delta_from_charlie(Some("SFGPUCI--------")).symbol.full_code(),
        "10031000001211000000"
    );
}

#[test]
fn test_malformed_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    // The second dictionary row has no Name column
    let paths = write_tables(
        &dir,
        &format!(
            "{}S*GPUCI---,S*GPUCI--------,10,121100,00,00,Infantry,,,,pass\n",
            MAPPING_HEADER
        ),
        &format!(
            "{}SFGPUCI---,Infantry F,SFGPUCI--------,,,P,,\nJUNK\n",
            DICTIONARY_HEADER
        ),
    );

    let lookup = SymbolLookup::try_open(&paths).unwrap();
    assert_eq!(lookup.name_to_code("Infantry F", "", "", ""), "SFGPUCI--------");
}
