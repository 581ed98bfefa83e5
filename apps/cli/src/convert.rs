//! Batch conversion of CSV attribute tables.
//!
//! Each conversion reads one source column per row and fills one or more
//! target columns, appending the targets to the header when the input does
//! not already have them. All other columns are copied unchanged.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use milsym_sidc::{Affiliation, DeltaAttributes, GeometryType, SymbolIdCode, SymbolLookup};

use crate::config::Config;

/// Columns that may hold the symbol name, in order of preference.
const SYMBOL_NAME_FIELDS: [&str; 4] = ["ruleid", "symbol_id", "symbolrule", "symbolname"];

/// Row counts for one conversion run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Rows whose source field was empty.
    pub skipped: usize,
}

/// Target values for one row and whether the source resolved.
///
/// `None` leaves the existing value of that target column untouched.
struct RowValues {
    values: Vec<Option<String>>,
    resolved: bool,
}

/// One input row as seen by a conversion: the source value plus the
/// optional context columns.
struct SourceRow<'a> {
    value: &'a str,
    context: Vec<&'a str>,
}

fn find_field(headers: &StringRecord, field: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(field))
}

fn convert_table<R, W, F>(
    input: R,
    output: W,
    source_fields: &[&str],
    context_fields: &[&str],
    target_fields: &[&str],
    mut convert: F,
) -> anyhow::Result<ConversionSummary>
where
    R: Read,
    W: Write,
    F: FnMut(&SourceRow) -> RowValues,
{
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = WriterBuilder::new().from_writer(output);

    let mut headers = reader.headers().context("Reading input header")?.clone();
    let (source, source_field) = match source_fields
        .iter()
        .find_map(|field| find_field(&headers, field).map(|index| (index, *field)))
    {
        Some(found) => found,
        None => bail!("Field '{}' not found in input", source_fields.join("' or '")),
    };
    let context: Vec<Option<usize>> = context_fields
        .iter()
        .map(|field| find_field(&headers, field))
        .collect();

    let mut targets = Vec::with_capacity(target_fields.len());
    for field in target_fields {
        let index = match find_field(&headers, field) {
            Some(index) => index,
            None => {
                headers.push_field(field);
                headers.len() - 1
            }
        };
        targets.push(index);
    }
    writer.write_record(&headers)?;

    let mut summary = ConversionSummary::default();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row + 1))?;
        summary.rows += 1;

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        fields.resize(headers.len(), String::new());

        let value = fields[source].trim();
        let converted = if value.is_empty() {
            tracing::warn!("Row {}: empty {} field, skipping", row + 1, source_field);
            summary.skipped += 1;
            None
        } else {
            let source_row = SourceRow {
                value,
                context: context
                    .iter()
                    .map(|index| index.map(|i| fields[i].trim()).unwrap_or_default())
                    .collect(),
            };
            Some(convert(&source_row))
        };

        if let Some(converted) = converted {
            if converted.resolved {
                summary.resolved += 1;
            } else {
                summary.unresolved += 1;
            }
            for (index, value) in targets.iter().zip(converted.values) {
                if let Some(value) = value {
                    fields[*index] = value;
                }
            }
        }

        writer.write_record(&StringRecord::from(fields))?;
    }

    writer.flush()?;
    Ok(summary)
}

fn target_fields<'a>(field: &'a str, remarks_field: Option<&'a str>) -> Vec<&'a str> {
    let mut fields = vec![field];
    fields.extend(remarks_field);
    fields
}

/// Fill the Delta field from the legacy field.
///
/// Unresolved rows keep their existing Delta value; only the remarks
/// column is written.
pub fn charlie_to_delta<R: Read, W: Write>(
    lookup: &SymbolLookup,
    config: &Config,
    input: R,
    output: W,
) -> anyhow::Result<ConversionSummary> {
    let remarks = config.remarks_field.as_deref();
    let targets = target_fields(&config.delta_field, remarks);

    convert_table(input, output, &[config.charlie_field.as_str()], &[], &targets, |row| {
        let resolution = lookup.delta_from_charlie(Some(row.value));
        let resolved = resolution.symbol.is_valid();
        let mut values = vec![resolved.then(|| resolution.symbol.full_code())];
        if remarks.is_some() {
            values.push(Some(resolution.remarks));
        }
        RowValues { values, resolved }
    })
}

/// Fill the legacy field from the Delta field.
///
/// Unresolved rows get the default code for the configured geometry, if
/// one is set.
pub fn delta_to_charlie<R: Read, W: Write>(
    lookup: &SymbolLookup,
    config: &Config,
    input: R,
    output: W,
) -> anyhow::Result<ConversionSummary> {
    let remarks = config.remarks_field.as_deref();
    let targets = target_fields(&config.charlie_field, remarks);

    convert_table(input, output, &[config.delta_field.as_str()], &[], &targets, |row| {
        let resolution = lookup.charlie_from_delta(Some(row.value));
        let resolved = resolution.source.is_resolved();
        let charlie = match config.geometry {
            Some(geometry) if !resolved => geometry.default_sidc().to_string(),
            _ => resolution.code,
        };
        let mut values = vec![Some(charlie)];
        if remarks.is_some() {
            values.push(Some(resolution.remarks));
        }
        RowValues { values, resolved }
    })
}

/// Expand the Delta field into one column per code field.
pub fn expand_attributes<R: Read, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> anyhow::Result<ConversionSummary> {
    convert_table(
        input,
        output,
        &[config.delta_field.as_str()],
        &[],
        &DeltaAttributes::COLUMNS,
        |row| match SymbolIdCode::parse(row.value).ok().and_then(|s| s.attributes()) {
            Some(attributes) => RowValues {
                values: attributes.values().iter().map(|v| Some(v.to_string())).collect(),
                resolved: true,
            },
            None => {
                tracing::warn!("Could not expand Delta code '{}'", row.value);
                RowValues {
                    values: Vec::new(),
                    resolved: false,
                }
            }
        },
    )
}

/// Affiliation applied by [`symbol_names_to_code`]: the configured one, or
/// one inferred from the input file path.
pub fn resolve_affiliation(config: &Config, input: &Path) -> Affiliation {
    match config.affiliation {
        Some(affiliation) => affiliation,
        None => Affiliation::infer_from_dataset_name(&input.to_string_lossy()),
    }
}

/// Fill the legacy field from a symbol name column and an optional echelon
/// column.
///
/// The name column is the first of `ruleid`, `symbol_id`, `symbolrule` or
/// `symbolname` present in the input. Codes that fail the shape check are
/// replaced with the default code for the configured geometry.
pub fn symbol_names_to_code<R: Read, W: Write>(
    lookup: &SymbolLookup,
    config: &Config,
    affiliation: Affiliation,
    input: R,
    output: W,
) -> anyhow::Result<ConversionSummary> {
    let geometry = config.geometry.unwrap_or(GeometryType::Point);
    tracing::info!("Resolving symbol names as {} {} features", affiliation, geometry);

    convert_table(
        input,
        output,
        &SYMBOL_NAME_FIELDS,
        &[config.echelon_field.as_str()],
        &[config.sidc_field.as_str()],
        |row| {
            let echelon = row.context[0].to_uppercase();
            let sidc =
                lookup.name_to_code(row.value, &echelon, affiliation.label(), geometry.as_str());
            let resolved = lookup.is_valid_code(&sidc);
            let sidc = if resolved {
                sidc
            } else {
                let default = geometry.default_sidc();
                tracing::warn!("Invalid SIDC {}, using default: {}", sidc, default);
                default.to_string()
            };
            RowValues {
                values: vec![Some(sidc)],
                resolved,
            }
        },
    )
}
