//! SIDC models
//!
//! This module contains the core data types:
//! - `symbol_code` - The Delta code entity and its fixed-width codec (SymbolIdCode)
//! - `attributes` - Per-field attribute projection of a Delta code (DeltaAttributes)
//! - `affiliation` - Frame affiliation vocabulary (Affiliation)
//! - `geometry` - Geometry classes and their default legacy codes (GeometryType)
//! - `resolution` - Translation results and how they were reached (DeltaResolution, CharlieResolution)

mod affiliation;
mod attributes;
mod geometry;
mod resolution;
mod symbol_code;

pub use affiliation::Affiliation;
pub use attributes::DeltaAttributes;
pub use geometry::{GeometryType, DEFAULT_AREA_SIDC, DEFAULT_LINE_SIDC, DEFAULT_POINT_SIDC};
pub use resolution::{
    CharlieResolution, DeltaResolution, ResolutionSource, REMARK_BAD_LENGTH, REMARK_INVALID_CODE,
    REMARK_MODIFIERS_REMOVED, REMARK_NOT_FOUND, REMARK_NOT_INITIALIZED, REMARK_RELAXED_MODIFIER,
    REMARK_SUCCESS,
};
pub use symbol_code::{
    decode_delta, encode_delta, SymbolIdCode, FULL_CODE_LENGTH, SHORT_CODE_LENGTH,
    UNSET_SYMBOL_SET,
};
