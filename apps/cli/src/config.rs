use std::path::PathBuf;

use milsym_sidc::{Affiliation, GeometryType, TablePaths};

pub struct Config {
    pub tables: TablePaths,
    pub charlie_field: String,
    pub delta_field: String,
    pub remarks_field: Option<String>,
    /// Target of the symbol name conversion.
    pub sidc_field: String,
    pub echelon_field: String,
    /// Affiliation for the symbol name conversion; inferred from the input
    /// path when unset.
    pub affiliation: Option<Affiliation>,
    pub log_format: String,
    /// Shape type of the converted table; selects the default code for
    /// unresolved rows.
    pub geometry: Option<GeometryType>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = std::env::var("SIDC_DATA_DIR").unwrap_or_else(|_| "tooldata".into());
        let mut tables = TablePaths::from_dir(data_dir);
        if let Ok(path) = std::env::var("SIDC_MAPPING_TABLE") {
            tables.mapping_table = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("SIDC_SYMBOL_DICTIONARY") {
            tables.symbol_dictionary = PathBuf::from(path);
        }
        let charlie_field =
            std::env::var("SIDC_CHARLIE_FIELD").unwrap_or_else(|_| "CharlieSIDC".into());
        let delta_field = std::env::var("SIDC_DELTA_FIELD").unwrap_or_else(|_| "DeltaSIDC".into());
        let remarks_field = std::env::var("SIDC_REMARKS_FIELD")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let sidc_field = std::env::var("SIDC_FIELD").unwrap_or_else(|_| "sidc".into());
        let echelon_field =
            std::env::var("SIDC_ECHELON_FIELD").unwrap_or_else(|_| "echelon".into());
        let affiliation = std::env::var("SIDC_AFFILIATION")
            .ok()
            .and_then(|value| parse_affiliation(&value));
        let log_format = std::env::var("SIDC_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let geometry = std::env::var("SIDC_GEOMETRY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| GeometryType::from_shape_type(&s));
        Self {
            tables,
            charlie_field,
            delta_field,
            remarks_field,
            sidc_field,
            echelon_field,
            affiliation,
            log_format,
            geometry,
        }
    }
}

/// Blank and "NOT_SET" mean unset; unknown labels are ignored with a warning.
fn parse_affiliation(value: &str) -> Option<Affiliation> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("NOT_SET") {
        return None;
    }
    let affiliation = Affiliation::from_label(value);
    if affiliation.is_none() {
        tracing::warn!(
            "Unrecognized SIDC_AFFILIATION '{}', valid values are FRIENDLY, HOSTILE, NEUTRAL, UNKNOWN",
            value
        );
    }
    affiliation
}
