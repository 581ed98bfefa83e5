use milsym_sidc::{GeometryType, ResolutionSource, SymbolLookup};
use serde::Serialize;

/// One ad-hoc lookup result, printed as a JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryResult {
    /// Delta -> legacy.
    Charlie {
        input: String,
        code: String,
        name: String,
        remarks: String,
        source: ResolutionSource,
    },
    /// Legacy -> Delta.
    Delta {
        input: String,
        code: String,
        name: String,
        remarks: String,
        source: ResolutionSource,
        dictionary_name: Option<String>,
        geometry: GeometryType,
    },
    /// Symbol name -> legacy.
    Name { input: String, code: String },
}

fn is_delta_code(value: &str) -> bool {
    (value.len() == 8 || value.len() == 20) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a code or symbol name, picking the direction from its shape.
pub fn run_query(lookup: &SymbolLookup, value: &str) -> QueryResult {
    let input = value.trim().to_string();

    if is_delta_code(&input) {
        let resolution = lookup.charlie_from_delta(Some(&input));
        return QueryResult::Charlie {
            input,
            code: resolution.code,
            name: resolution.name,
            remarks: resolution.remarks,
            source: resolution.source,
        };
    }

    if input.chars().count() == 15 {
        let resolution = lookup.delta_from_charlie(Some(&input));
        return QueryResult::Delta {
            code: resolution.symbol.full_code(),
            name: resolution.name,
            remarks: resolution.remarks,
            source: resolution.source,
            dictionary_name: lookup.code_to_name(&input),
            geometry: lookup.code_to_geometry_type(&input),
            input,
        };
    }

    let code = lookup.name_to_code(&input, "", "", "");
    QueryResult::Name { input, code }
}
