//! Free-text symbol name -> legacy code resolution.
//!
//! Resolution order, first hit wins:
//! 1. name cache (built-in overrides plus earlier fuzzy matches)
//! 2. exact dictionary name, ignoring case
//! 3. steps 1-2 again with a trailing affiliation letter, "LEFT" or "RIGHT"
//!    removed
//! 4. first dictionary name starting with the name
//! 5. first dictionary name containing the name
//!
//! Matches from steps 3-5 are added to the cache under the name as given.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Affiliation, GeometryType};
use crate::tables::{echelon_label_suffix, SymbolDictionary};
use crate::validator::is_valid_shape;

use super::name_cache::NameOverrideCache;

/// Appended by feature-append tools to disambiguate names ("Infantry F~2").
const NAME_SEPARATOR: char = '~';

lazy_static! {
    static ref AFFILIATION_SUFFIX: Regex =
        Regex::new(r"^(.*) [FHNU]$").expect("affiliation suffix pattern is a valid regex");
    static ref LEFT_SUFFIX: Regex =
        Regex::new(r"^(.*)LEFT$").expect("left suffix pattern is a valid regex");
    static ref RIGHT_SUFFIX: Regex =
        Regex::new(r"^(.*)RIGHT$").expect("right suffix pattern is a valid regex");
}

/// Upper-case, cut at the separator, trim.
pub fn normalize_name(name: &str) -> String {
    let upper = name.to_uppercase();
    upper
        .split(NAME_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Remove one trailing affiliation letter, "LEFT" or "RIGHT".
fn strip_name_suffix(name: &str) -> Option<String> {
    [&*AFFILIATION_SUFFIX, &*LEFT_SUFFIX, &*RIGHT_SUFFIX]
        .into_iter()
        .find_map(|pattern| pattern.captures(name))
        .and_then(|captures| captures.get(1))
        .map(|stem| stem.as_str().trim().to_string())
        .filter(|stem| !stem.is_empty())
}

/// How a name was matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NameMatch {
    Cached,
    Exact,
    Fuzzy,
}

/// Resolves symbol names against the dictionary and the name cache.
pub struct SymbolNameResolver {
    dictionary: Arc<SymbolDictionary>,
    cache: NameOverrideCache,
}

impl SymbolNameResolver {
    /// A resolver whose cache starts with the built-in overrides.
    pub fn new(dictionary: Arc<SymbolDictionary>) -> Self {
        Self::with_cache(dictionary, NameOverrideCache::with_overrides())
    }

    pub fn with_cache(dictionary: Arc<SymbolDictionary>, cache: NameOverrideCache) -> Self {
        Self { dictionary, cache }
    }

    pub fn cache(&self) -> &NameOverrideCache {
        &self.cache
    }

    /// Resolve a name to a legacy code.
    ///
    /// A recognized `echelon` label overwrites positions 10-11 and a
    /// recognized `affiliation` label overwrites position 1. When nothing
    /// matches, the default code for `geometry` is returned.
    pub fn resolve(
        &self,
        name: &str,
        echelon: &str,
        affiliation: &str,
        geometry: GeometryType,
    ) -> String {
        let affiliation = parse_affiliation(affiliation);
        let normalized = normalize_name(name);

        let found = if normalized.is_empty() {
            None
        } else {
            self.find(&normalized)
        };

        match found {
            Some((base, how)) if is_valid_shape(&base) => {
                if how == NameMatch::Fuzzy {
                    self.cache.insert(&normalized, &base);
                }
                adjust_code(&base, echelon, affiliation)
            }
            found => {
                let default = geometry.default_sidc();
                log::warn!(
                    "Could not map '{}' to a valid SIDC{} - returning default: {}",
                    normalized,
                    found
                        .map(|(code, _)| format!(" (candidate {})", code))
                        .unwrap_or_default(),
                    default
                );
                match affiliation {
                    Some(affiliation) => with_char_at(default, 1, affiliation.legacy_char()),
                    None => default.to_string(),
                }
            }
        }
    }

    fn find(&self, name: &str) -> Option<(String, NameMatch)> {
        if let Some(found) = self.find_exact(name) {
            return Some(found);
        }

        let stripped = strip_name_suffix(name);
        if let Some(stripped) = &stripped {
            log::debug!("Retrying '{}' as '{}'", name, stripped);
            if let Some((code, _)) = self.find_exact(stripped) {
                return Some((code, NameMatch::Fuzzy));
            }
        }

        let search = stripped.as_deref().unwrap_or(name);
        self.dictionary
            .find_by_name_prefix(search)
            .or_else(|| self.dictionary.find_by_name_containing(search))
            .map(|entry| (dictionary_code(&entry.symbol_id), NameMatch::Fuzzy))
    }

    fn find_exact(&self, name: &str) -> Option<(String, NameMatch)> {
        if let Some(code) = self.cache.get(name) {
            return Some((code, NameMatch::Cached));
        }
        self.dictionary
            .find_by_name(name)
            .map(|entry| (dictionary_code(&entry.symbol_id), NameMatch::Exact))
    }
}

/// Dictionary codes may carry '*' for a wildcard affiliation.
fn dictionary_code(symbol_id: &str) -> String {
    symbol_id.replace('*', "-")
}

fn parse_affiliation(label: &str) -> Option<Affiliation> {
    if label.trim().is_empty() {
        return None;
    }
    let parsed = Affiliation::from_label(label);
    if parsed.is_none() {
        log::warn!("Ignoring unrecognized affiliation '{}'", label);
    }
    parsed
}

fn adjust_code(base: &str, echelon: &str, affiliation: Option<Affiliation>) -> String {
    let mut code = base.to_string();

    if let Some(suffix) = echelon_label_suffix(echelon) {
        code = format!("{}{}{}", &code[..10], suffix, &code[12..]);
    }

    if let Some(affiliation) = affiliation {
        let expected = affiliation.legacy_char();
        if !code[1..].starts_with(expected) {
            log::debug!(
                "Unexpected affiliation char in {}, setting {}",
                code,
                expected
            );
            code = with_char_at(&code, 1, expected);
        }
    }

    code
}

fn with_char_at(code: &str, index: usize, ch: char) -> String {
    code.chars()
        .enumerate()
        .map(|(i, c)| if i == index { ch } else { c })
        .collect()
}
