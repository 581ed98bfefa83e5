//! Legacy symbol dictionary: names and geometry classes keyed by a masked
//! 10-character legacy prefix.
//!
//! Dictionary keys carry the frame affiliation (U/H/N/F) and a 'P' status,
//! so a code is masked the same way before lookup. Some symbols only exist
//! in their friendly form; a missed lookup is retried with the 'F' frame.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::{Affiliation, GeometryType, DEFAULT_POINT_SIDC};

use super::loader::{read_rows, read_rows_from};

/// One symbol in the dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Masked 10-character legacy prefix.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Full 15-character legacy code.
    #[serde(rename = "SymbolId", default)]
    pub symbol_id: String,
    #[serde(rename = "StyleFile", default)]
    pub style_file: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    /// Single-character class: P, L or A.
    #[serde(rename = "GeometryType", default)]
    pub geometry_type: String,
    #[serde(rename = "GeometryConversionType", default)]
    pub geometry_conversion_type: String,
    #[serde(rename = "Tags", default)]
    pub tags: String,
}

impl DictionaryEntry {
    pub fn geometry(&self) -> GeometryType {
        GeometryType::from_dictionary_char(&self.geometry_type)
    }
}

/// Mask a legacy code to a dictionary key.
///
/// Keeps the coding scheme, battle dimension and function characters,
/// replaces the affiliation with its frame character and the status with
/// 'P'. Codes shorter than 10 characters are replaced by the default point
/// code.
pub fn masked_prefix(code: &str) -> String {
    let upper = code.to_uppercase();
    let chars: Vec<char> = if upper.chars().count() < 10 {
        DEFAULT_POINT_SIDC.chars().collect()
    } else {
        upper.chars().collect()
    };

    let frame = match Affiliation::from_legacy_char(chars[1]) {
        Some(affiliation) => affiliation.legacy_char(),
        None => {
            log::warn!("Unrecognized affiliation '{}' in {}", chars[1], code);
            Affiliation::Unknown.legacy_char()
        }
    };

    let mut masked = String::with_capacity(10);
    masked.push(chars[0]);
    masked.push(frame);
    masked.push(chars[2]);
    masked.push('P');
    masked.extend(&chars[4..10]);
    masked
}

/// The loaded symbol dictionary. Read-only after construction.
#[derive(Debug)]
pub struct SymbolDictionary {
    entries: Vec<DictionaryEntry>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    /// Upper-case names, parallel to `entries`, for prefix and substring scans.
    upper_names: Vec<String>,
}

impl SymbolDictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let entries = read_rows::<DictionaryEntry>(path.as_ref())?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries = read_rows_from::<DictionaryEntry, R>(reader, Path::new("<reader>"))?;
        Ok(Self::from_entries(entries))
    }

    /// Index entries by ID and by upper-case name. The first entry wins
    /// for duplicate keys.
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let upper_names: Vec<String> = entries.iter().map(|e| e.name.to_uppercase()).collect();

        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_id.entry(entry.id.to_uppercase()).or_insert(index);
            by_name.entry(upper_names[index].clone()).or_insert(index);
        }

        Self {
            entries,
            by_id,
            by_name,
            upper_names,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Entry for an already-masked ID.
    pub fn get_by_id(&self, id: &str) -> Option<&DictionaryEntry> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Entry for a legacy code: masked lookup, then the 'F' frame.
    pub fn lookup_code(&self, code: &str) -> Option<&DictionaryEntry> {
        let masked = masked_prefix(code);
        if let Some(entry) = self.get_by_id(&masked) {
            return Some(entry);
        }

        let friendly: String = masked
            .chars()
            .enumerate()
            .map(|(i, c)| if i == 1 { 'F' } else { c })
            .collect();
        log::debug!("No dictionary entry for {}, retrying as {}", masked, friendly);
        self.get_by_id(&friendly)
    }

    /// Entry whose name equals `upper_name` (already upper-cased).
    pub fn find_by_name(&self, upper_name: &str) -> Option<&DictionaryEntry> {
        self.by_name.get(upper_name).map(|&index| &self.entries[index])
    }

    /// First entry, in load order, whose name starts with `upper_name`.
    pub fn find_by_name_prefix(&self, upper_name: &str) -> Option<&DictionaryEntry> {
        self.upper_names
            .iter()
            .position(|name| name.starts_with(upper_name))
            .map(|index| &self.entries[index])
    }

    /// First entry, in load order, whose name contains `upper_name`.
    pub fn find_by_name_containing(&self, upper_name: &str) -> Option<&DictionaryEntry> {
        self.upper_names
            .iter()
            .position(|name| name.contains(upper_name))
            .map(|index| &self.entries[index])
    }
}
