//! Lookup tables
//!
//! - `mapping_table` - Legacy <-> Delta correspondence rows (MappingTable)
//! - `symbol_dictionary` - Legacy symbol names and geometry (SymbolDictionary)
//! - `substitution` - Fixed single-character field tables (CodeMap)
//! - `symbol_set_fallback` - Generic legacy code per Delta symbol set
//! - `loader` - CSV loading and table locations (TablePaths)

mod loader;
mod mapping_table;
mod substitution;
mod symbol_dictionary;
mod symbol_set_fallback;

pub use loader::{TablePaths, MAPPING_TABLE_FILE, SYMBOL_DICTIONARY_FILE};
pub use mapping_table::{DeltaKey, MappingRow, MappingTable};
pub use substitution::{
    echelon_label_suffix, CodeMap, AFFILIATION, ECHELON_MOBILITY, HQ_TF_FD, STATUS,
};
pub use symbol_dictionary::{masked_prefix, DictionaryEntry, SymbolDictionary};
pub use symbol_set_fallback::{symbol_set_fallback, SymbolSetFallback};
