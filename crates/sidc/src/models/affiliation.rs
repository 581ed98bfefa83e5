use std::fmt;

use serde::{Deserialize, Serialize};

/// Frame affiliation of a symbol.
///
/// Legacy codes carry a richer set of affiliation characters (pending,
/// assumed friend, suspect, joker, ...). Each of them is drawn with one of
/// these four frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Affiliation {
    Friendly,
    Hostile,
    Neutral,
    Unknown,
}

impl Affiliation {
    /// Search order used when inferring an affiliation from free text.
    const ALL: [Affiliation; 4] = [
        Affiliation::Friendly,
        Affiliation::Hostile,
        Affiliation::Neutral,
        Affiliation::Unknown,
    ];

    /// Upper-case label, e.g. "HOSTILE".
    pub fn label(self) -> &'static str {
        match self {
            Self::Friendly => "FRIENDLY",
            Self::Hostile => "HOSTILE",
            Self::Neutral => "NEUTRAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Affiliation character written at index 1 of a legacy code.
    pub fn legacy_char(self) -> char {
        match self {
            Self::Friendly => 'F',
            Self::Hostile => 'H',
            Self::Neutral => 'N',
            Self::Unknown => 'U',
        }
    }

    /// Parse a label ("HOSTILE") or a single frame letter ("H"), ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|affiliation| {
            affiliation.label().eq_ignore_ascii_case(label)
                || (label.len() == 1
                    && label.eq_ignore_ascii_case(&affiliation.legacy_char().to_string()))
        })
    }

    /// Frame drawn for a legacy affiliation character.
    pub fn from_legacy_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'U' | 'P' | 'G' | 'W' | '-' => Some(Self::Unknown),
            'H' | 'S' => Some(Self::Hostile),
            'N' | 'L' => Some(Self::Neutral),
            'F' | 'M' | 'A' | 'D' | 'J' | 'K' => Some(Self::Friendly),
            _ => None,
        }
    }

    /// Infer an affiliation from a dataset name or path
    /// (".../Hostile_Units" -> Hostile).
    ///
    /// Falls back to Friendly when no label appears in the name.
    pub fn infer_from_dataset_name(name: &str) -> Self {
        let upper = name.to_uppercase();
        match Self::ALL
            .into_iter()
            .find(|affiliation| upper.contains(affiliation.label()))
        {
            Some(affiliation) => affiliation,
            None => {
                log::warn!(
                    "Could not determine affiliation from '{}', defaulting to {}",
                    name,
                    Self::Friendly
                );
                Self::Friendly
            }
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
