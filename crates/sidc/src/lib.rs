//! Military Symbol Identification Code (SIDC) conversion
//!
//! Converts between the legacy 15-character code and the current
//! 20-character (8-character short) Delta code, and resolves free-text
//! symbol names to legacy codes.
//!
//! # Overview
//!
//! - Fixed-width Delta codec ([`SymbolIdCode`])
//! - Legacy -> Delta by canonical prefix key
//! - Delta -> legacy through a degrading tier chain
//! - Name -> legacy code with a learned name cache
//! - Dictionary name and geometry lookup by masked legacy prefix
//!
//! No lookup fails outright. Every unresolved input degrades to a default
//! code with remarks describing what happened. Only loading the tables can
//! fail; see [`SymbolLookup::initialized`].
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +-------------------+
//! |   TablePaths     | --> | MappingTable      |  (prefix + tuple indexes)
//! +------------------+     | SymbolDictionary  |  (ID + name indexes)
//!                          +-------------------+
//!                                  |
//!                                  v
//!                          +-------------------+
//!                          |   Resolvers       |  (C->D, D->C tier chain, names)
//!                          +-------------------+
//!                                  |
//!                                  v
//!                          +-------------------+
//!                          |  SymbolLookup     |  (degrades when uninitialized)
//!                          +-------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use milsym_sidc::{SymbolLookup, TablePaths};
//!
//! let lookup = SymbolLookup::open(&TablePaths::from_dir("tooldata"));
//! let delta = lookup.delta_from_charlie(Some("SFGPUCI--------"));
//! println!("{} {}", delta.symbol, delta.name);
//!
//! let (charlie, name, remarks) = lookup
//!     .charlie_from_delta(Some("10031000001211000000"))
//!     .into_parts();
//! println!("{} {} {}", charlie, name, remarks);
//! ```

pub mod errors;
pub mod lookup;
pub mod models;
pub mod resolver;
pub mod tables;
pub mod validator;

pub use errors::{FailureClass, Result, SidcError};
pub use lookup::SymbolLookup;

// Re-export all public types from models
pub use models::{
    decode_delta, encode_delta, Affiliation, CharlieResolution, DeltaAttributes, DeltaResolution,
    GeometryType, ResolutionSource, SymbolIdCode, DEFAULT_AREA_SIDC, DEFAULT_LINE_SIDC,
    DEFAULT_POINT_SIDC,
};

// Re-export resolver types
pub use resolver::{
    CharlieToDeltaResolver, DeltaTierChain, DeltaToCharlieResolver, NameOverrideCache,
    SymbolNameResolver, TierMatch, TierResolver,
};

// Re-export table types
pub use tables::{DictionaryEntry, MappingRow, MappingTable, SymbolDictionary, TablePaths};

pub use validator::is_valid_shape;
