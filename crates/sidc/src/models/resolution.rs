use serde::Serialize;

use super::symbol_code::SymbolIdCode;

pub const REMARK_BAD_LENGTH: &str = "Bad SIDC Length";
pub const REMARK_INVALID_CODE: &str = "Invalid SIDC Code";
pub const REMARK_RELAXED_MODIFIER: &str = "Not an exact modifier match";
pub const REMARK_MODIFIERS_REMOVED: &str = "Removed Modifiers to match";
pub const REMARK_NOT_FOUND: &str = "not found in mapping table";
pub const REMARK_NOT_INITIALIZED: &str = "Lookup tables not initialized";
pub const REMARK_SUCCESS: &str = "success";

/// Indicates how (or whether) a code was resolved.
///
/// Ordered from highest to lowest fidelity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The lookup key or attribute tuple matched a row exactly.
    Exact,
    /// A legacy key matched only after substituting the affiliation ('F' or 'H').
    AlternateKey,
    /// Only one of the two modifiers matched.
    RelaxedModifier,
    /// Matched on symbol set and entity with the modifiers dropped.
    ModifiersRemoved,
    /// No row for the entity; a generic code for the symbol set was used.
    SymbolSetFallback,
    /// Well-formed input that no row matched.
    NotFound,
    /// Input with a bad length or an invalid symbol set.
    Malformed,
    /// The lookup tables were never loaded.
    Uninitialized,
}

impl ResolutionSource {
    /// Whether a table row (or symbol set fallback) produced the result.
    pub fn is_resolved(self) -> bool {
        matches!(
            self,
            Self::Exact
                | Self::AlternateKey
                | Self::RelaxedModifier
                | Self::ModifiersRemoved
                | Self::SymbolSetFallback
        )
    }
}

/// Result of translating a legacy code to a Delta code.
#[derive(Clone, Debug, Serialize)]
pub struct DeltaResolution {
    pub symbol: SymbolIdCode,
    pub name: String,
    pub remarks: String,
    pub source: ResolutionSource,
}

impl DeltaResolution {
    /// Blank (invalid) code carrying a remark.
    pub(crate) fn unresolved(source: ResolutionSource, remarks: impl Into<String>) -> Self {
        let remarks = remarks.into();
        Self {
            symbol: SymbolIdCode::new(),
            name: remarks.clone(),
            remarks,
            source,
        }
    }
}

/// Result of translating a Delta code to a legacy code.
#[derive(Clone, Debug, Serialize)]
pub struct CharlieResolution {
    pub code: String,
    pub name: String,
    pub remarks: String,
    pub source: ResolutionSource,
}

impl CharlieResolution {
    /// Default unknown point code carrying a name and a remark.
    pub(crate) fn unresolved(
        source: ResolutionSource,
        name: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            code: super::geometry::DEFAULT_POINT_SIDC.to_string(),
            name: name.into(),
            remarks: remarks.into(),
            source,
        }
    }

    /// `(code, name, remarks)` in the order the field calculators expect.
    pub fn into_parts(self) -> (String, String, String) {
        (self.code, self.name, self.remarks)
    }
}
