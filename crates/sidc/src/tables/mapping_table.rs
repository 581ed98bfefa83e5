//! Legacy <-> Delta correspondence table.
//!
//! Each row ties a 10-character legacy prefix to a Delta
//! (symbol set, entity, modifier1, modifier2) tuple. The table is loaded
//! once and indexed both ways:
//!
//! - by legacy prefix, for legacy -> Delta lookups. When two rows share a
//!   prefix the later row wins.
//! - by Delta tuple, for Delta -> legacy lookups. When several rows share a
//!   tuple (or a symbol set + entity pair) the first row in load order wins.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::loader::{pad_numeric, read_rows, read_rows_from};

/// One row of the legacy mapping table.
///
/// Column names follow the published table; the older `2525...` header
/// names are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    #[serde(rename = "LegacyPrefix10", alias = "2525Charlie1stTen")]
    pub legacy_prefix: String,
    #[serde(rename = "LegacyFull15", alias = "2525Charlie", default)]
    pub legacy_code: String,
    #[serde(rename = "DeltaSymbolSet", alias = "2525DeltaSymbolSet", default)]
    pub symbol_set: String,
    #[serde(rename = "DeltaEntity", alias = "2525DeltaEntity", default)]
    pub entity_code: String,
    #[serde(rename = "DeltaMod1", alias = "2525DeltaMod1", default)]
    pub modifier1: String,
    #[serde(rename = "DeltaMod2", alias = "2525DeltaMod2", default)]
    pub modifier2: String,
    #[serde(rename = "DeltaName", alias = "2525DeltaName", default)]
    pub name: String,
    #[serde(rename = "Mod1Name", alias = "2525DeltaMod1Name", default)]
    pub modifier1_name: String,
    #[serde(rename = "Mod2Name", alias = "2525DeltaMod2Name", default)]
    pub modifier2_name: String,
    #[serde(rename = "FallbackCode", alias = "DeltaToCharlie", default)]
    pub fallback_code: String,
    #[serde(rename = "Remarks", default)]
    pub remarks: String,
}

impl MappingRow {
    /// Upper-case the legacy columns and restore leading zeros on the
    /// Delta columns.
    fn normalize(mut self) -> Self {
        self.legacy_prefix = self.legacy_prefix.to_uppercase();
        self.legacy_code = self.legacy_code.to_uppercase();
        self.fallback_code = self.fallback_code.to_uppercase();
        self.symbol_set = pad_numeric(&self.symbol_set, 2);
        self.entity_code = pad_numeric(&self.entity_code, 6);
        self.modifier1 = pad_numeric(&self.modifier1, 2);
        self.modifier2 = pad_numeric(&self.modifier2, 2);
        self
    }

    /// Whether the row carries a Delta symbol set and entity.
    ///
    /// Retired legacy symbols have no Delta equivalent.
    pub fn has_delta(&self) -> bool {
        !self.symbol_set.is_empty() && !self.entity_code.is_empty()
    }

    /// Whether the remarks mark the legacy symbol as retired.
    pub fn is_retired(&self) -> bool {
        self.remarks.to_ascii_lowercase().contains("retired")
    }

    /// Legacy code to emit for this row: the full legacy code, or the
    /// fallback code when the row has none.
    pub fn charlie_code(&self) -> &str {
        if self.legacy_code.is_empty() {
            &self.fallback_code
        } else {
            &self.legacy_code
        }
    }
}

/// Delta attribute tuple used as the reverse index key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeltaKey {
    pub symbol_set: String,
    pub entity_code: String,
    pub modifier1: String,
    pub modifier2: String,
}

impl DeltaKey {
    pub fn new(symbol_set: &str, entity_code: &str, modifier1: &str, modifier2: &str) -> Self {
        Self {
            symbol_set: symbol_set.to_string(),
            entity_code: entity_code.to_string(),
            modifier1: modifier1.to_string(),
            modifier2: modifier2.to_string(),
        }
    }

    fn of(row: &MappingRow) -> Self {
        Self::new(&row.symbol_set, &row.entity_code, &row.modifier1, &row.modifier2)
    }
}

/// The loaded, indexed mapping table. Read-only after construction.
#[derive(Debug)]
pub struct MappingTable {
    rows: Vec<MappingRow>,
    by_prefix: HashMap<String, usize>,
    by_tuple: HashMap<DeltaKey, usize>,
    by_entity: HashMap<(String, String), Vec<usize>>,
}

impl MappingTable {
    /// Load the table from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let rows = read_rows::<MappingRow>(path.as_ref())?;
        Ok(Self::from_rows(rows))
    }

    /// Load the table from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rows = read_rows_from::<MappingRow, R>(reader, Path::new("<reader>"))?;
        Ok(Self::from_rows(rows))
    }

    /// Build the indexes over rows in load order.
    pub fn from_rows(rows: Vec<MappingRow>) -> Self {
        let rows: Vec<MappingRow> = rows.into_iter().map(MappingRow::normalize).collect();

        let mut by_prefix = HashMap::with_capacity(rows.len());
        let mut by_tuple = HashMap::with_capacity(rows.len());
        let mut by_entity: HashMap<(String, String), Vec<usize>> = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            if let Some(previous) = by_prefix.insert(row.legacy_prefix.clone(), index) {
                log::debug!(
                    "Duplicate legacy prefix {} (rows {} and {}), keeping the later row",
                    row.legacy_prefix,
                    previous,
                    index
                );
            }

            if !row.has_delta() {
                continue;
            }

            by_tuple.entry(DeltaKey::of(row)).or_insert(index);
            by_entity
                .entry((row.symbol_set.clone(), row.entity_code.clone()))
                .or_default()
                .push(index);
        }

        Self {
            rows,
            by_prefix,
            by_tuple,
            by_entity,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in load order.
    pub fn rows(&self) -> &[MappingRow] {
        &self.rows
    }

    /// Row for a 10-character legacy prefix key.
    pub fn get_by_prefix(&self, prefix: &str) -> Option<&MappingRow> {
        self.by_prefix.get(prefix).map(|&index| &self.rows[index])
    }

    /// First row with exactly this Delta tuple.
    pub fn get_by_tuple(&self, key: &DeltaKey) -> Option<&MappingRow> {
        self.by_tuple.get(key).map(|&index| &self.rows[index])
    }

    /// Rows sharing a symbol set and entity, in load order.
    pub fn rows_for_entity<'a>(
        &'a self,
        symbol_set: &str,
        entity_code: &str,
    ) -> impl Iterator<Item = &'a MappingRow> + 'a {
        self.by_entity
            .get(&(symbol_set.to_string(), entity_code.to_string()))
            .into_iter()
            .flatten()
            .map(move |&index| &self.rows[index])
    }
}
