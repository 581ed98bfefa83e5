//! Entry point tying the tables and resolvers together.

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    CharlieResolution, DeltaResolution, GeometryType, ResolutionSource, REMARK_NOT_INITIALIZED,
};
use crate::resolver::{CharlieToDeltaResolver, DeltaToCharlieResolver, SymbolNameResolver};
use crate::tables::{MappingTable, SymbolDictionary, TablePaths};
use crate::validator::is_valid_shape;

struct MappingResolvers {
    charlie_to_delta: CharlieToDeltaResolver,
    delta_to_charlie: DeltaToCharlieResolver,
}

struct DictionaryResolvers {
    dictionary: Arc<SymbolDictionary>,
    names: SymbolNameResolver,
}

/// Owns the loaded tables and answers every lookup.
///
/// Tables are loaded once and are read-only afterwards; the name cache is
/// the only state that changes, so a `SymbolLookup` can be shared across
/// threads behind an `Arc`.
///
/// A table that failed to load leaves the lookup uninitialized for the
/// operations that need it. Those operations return their documented
/// defaults instead of failing; check [`initialized`](Self::initialized)
/// after construction.
pub struct SymbolLookup {
    mapping: Option<MappingResolvers>,
    dictionary: Option<DictionaryResolvers>,
}

impl SymbolLookup {
    /// Load both tables, logging any failure.
    pub fn open(paths: &TablePaths) -> Self {
        let mapping = MappingTable::load(&paths.mapping_table)
            .map_err(|e| log::error!("Mapping table not loaded: {}", e))
            .ok();
        let dictionary = SymbolDictionary::load(&paths.symbol_dictionary)
            .map_err(|e| log::error!("Symbol dictionary not loaded: {}", e))
            .ok();
        Self::from_parts(mapping, dictionary)
    }

    /// Load both tables, failing on the first one that cannot be loaded.
    pub fn try_open(paths: &TablePaths) -> Result<Self> {
        let mapping = MappingTable::load(&paths.mapping_table)?;
        let dictionary = SymbolDictionary::load(&paths.symbol_dictionary)?;
        Ok(Self::from_tables(mapping, dictionary))
    }

    pub fn from_tables(mapping: MappingTable, dictionary: SymbolDictionary) -> Self {
        Self::from_parts(Some(mapping), Some(dictionary))
    }

    /// Build from whichever tables are available.
    pub fn from_parts(
        mapping: Option<MappingTable>,
        dictionary: Option<SymbolDictionary>,
    ) -> Self {
        let mapping = mapping.map(|table| {
            let table = Arc::new(table);
            MappingResolvers {
                charlie_to_delta: CharlieToDeltaResolver::new(Arc::clone(&table)),
                delta_to_charlie: DeltaToCharlieResolver::new(table),
            }
        });
        let dictionary = dictionary.map(|dictionary| {
            let dictionary = Arc::new(dictionary);
            DictionaryResolvers {
                names: SymbolNameResolver::new(Arc::clone(&dictionary)),
                dictionary,
            }
        });
        Self {
            mapping,
            dictionary,
        }
    }

    /// Both tables loaded.
    pub fn initialized(&self) -> bool {
        self.mapping_initialized() && self.dictionary_initialized()
    }

    pub fn mapping_initialized(&self) -> bool {
        self.mapping.is_some()
    }

    pub fn dictionary_initialized(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Legacy -> Delta. The result is invalid when the code could not be
    /// resolved.
    pub fn delta_from_charlie(&self, code: Option<&str>) -> DeltaResolution {
        match &self.mapping {
            Some(mapping) => mapping.charlie_to_delta.resolve(code),
            None => DeltaResolution::unresolved(
                ResolutionSource::Uninitialized,
                REMARK_NOT_INITIALIZED,
            ),
        }
    }

    /// Delta (8 or 20 characters) -> legacy. Unresolved codes come back as
    /// the default point code.
    pub fn charlie_from_delta(&self, code: Option<&str>) -> CharlieResolution {
        match &self.mapping {
            Some(mapping) => mapping.delta_to_charlie.resolve(code),
            None => CharlieResolution::unresolved(
                ResolutionSource::Uninitialized,
                REMARK_NOT_INITIALIZED,
                REMARK_NOT_INITIALIZED,
            ),
        }
    }

    /// Symbol name -> legacy code; see [`SymbolNameResolver::resolve`].
    ///
    /// `geometry` is a label ("Point", "Line", "Area"); anything else uses
    /// the point default.
    pub fn name_to_code(
        &self,
        name: &str,
        echelon: &str,
        affiliation: &str,
        geometry: &str,
    ) -> String {
        let geometry = GeometryType::from_label(geometry);
        match &self.dictionary {
            Some(dictionary) => dictionary.names.resolve(name, echelon, affiliation, geometry),
            None => geometry.default_sidc().to_string(),
        }
    }

    /// Dictionary name for a legacy code.
    pub fn code_to_name(&self, code: &str) -> Option<String> {
        let dictionary = self.dictionary.as_ref()?;
        let name = dictionary
            .dictionary
            .lookup_code(code)
            .map(|entry| entry.name.clone());
        if name.is_none() {
            log::warn!("{}: Name NOT FOUND", code);
        }
        name
    }

    /// Geometry class for a legacy code; `Unknown` when not in the dictionary.
    pub fn code_to_geometry_type(&self, code: &str) -> GeometryType {
        self.dictionary
            .as_ref()
            .and_then(|dictionary| dictionary.dictionary.lookup_code(code))
            .map(|entry| entry.geometry())
            .unwrap_or_default()
    }

    /// Structural check of a legacy code.
    pub fn is_valid_code(&self, code: &str) -> bool {
        is_valid_shape(code)
    }
}
