//! Name -> legacy code cache.
//!
//! Seeded with names that never appear in the dictionary in a matchable
//! form, then grown with every fuzzy match so repeated names skip the
//! dictionary scan. Entries are never evicted.

use std::collections::HashMap;
use std::sync::RwLock;

/// Names whose dictionary spelling differs from how features are named.
const SEEDED_OVERRIDES: &[(&str, &str)] = &[
    ("STRYKER BATTALION", "SFGPUCII---F---"),
    ("STRYKER CAVALRY TROOP", "SFGPUCRRL--E---"),
    ("FIELD ARTILLERY BATTALION", "SFGPUCF----F---"),
    ("STRYKER HEADQUARTERS COMPANY", "SFGPUH-----E---"),
    ("BRIGADE SUPPORT BATTALION", "SFGPU------F---"),
    ("INFANTRY PLATOON F", "SFGPUCI----D---"),
];

/// Thread-safe, unbounded name -> code cache.
///
/// Reads share the lock; inserts take it exclusively. A poisoned lock is
/// treated as a cache miss on read and a dropped insert on write.
#[derive(Debug, Default)]
pub struct NameOverrideCache {
    entries: RwLock<HashMap<String, String>>,
}

impl NameOverrideCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding the built-in overrides.
    pub fn with_overrides() -> Self {
        let entries = SEEDED_OVERRIDES
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Code cached for an upper-cased name.
    pub fn get(&self, name: &str) -> Option<String> {
        if let Ok(entries) = self.entries.read() {
            return entries.get(name).cloned();
        }
        log::warn!("Name cache lock poisoned, skipping lookup of '{}'", name);
        None
    }

    /// Remember `code` for an upper-cased name. An existing entry is kept.
    pub fn insert(&self, name: &str, code: &str) {
        match self.entries.write() {
            Ok(mut entries) => {
                if !entries.contains_key(name) {
                    log::debug!("Adding to name cache: [{}, {}]", name, code);
                    entries.insert(name.to_string(), code.to_string());
                }
            }
            Err(e) => log::warn!("Could not add '{}' to name cache: {}", name, e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current entries, for inspecting or persisting what the
    /// resolver has learned.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}
