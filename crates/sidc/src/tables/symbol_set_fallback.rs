//! Generic legacy codes per Delta symbol set.
//!
//! Used as the last resort when no mapping row exists for a symbol set and
//! entity: the caller at least gets a frame in the right battle dimension.

/// Symbol set -> (family name, generic legacy code).
static SYMBOL_SET_FALLBACKS: &[(&str, &str, &str)] = &[
    ("01", "Air", "SUAP-----------"),
    ("02", "Air Missile", "SUAPW----------"),
    ("05", "Space", "SUPP-----------"),
    ("10", "Land Unit", "SUGPU----------"),
    ("11", "Land Civilian Unit/Organization", "SUGPU----------"),
    ("15", "Land Equipment", "SUGPE----------"),
    ("20", "Land Installation", "SUGPI----------"),
    ("27", "Dismounted Individual", "SUGPU----------"),
    ("30", "Sea Surface", "SUSP-----------"),
    ("35", "Sea Subsurface", "SUUP-----------"),
    ("36", "Mine Warfare", "SUUPWM---------"),
    ("50", "Signals Intelligence - Space", "IUPP-----------"),
    ("51", "Signals Intelligence - Air", "IUAP-----------"),
    ("52", "Signals Intelligence - Land", "IUGP-----------"),
    ("53", "Signals Intelligence - Surface", "IUSP-----------"),
    ("54", "Signals Intelligence - Subsurface", "IUUP-----------"),
];

/// A generic legacy code for a symbol set family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolSetFallback {
    pub symbol_set: &'static str,
    pub family: &'static str,
    pub code: &'static str,
}

/// Generic legacy code for a symbol set, if the family has one.
pub fn symbol_set_fallback(symbol_set: &str) -> Option<SymbolSetFallback> {
    SYMBOL_SET_FALLBACKS
        .iter()
        .find(|(candidate, _, _)| *candidate == symbol_set)
        .map(|(symbol_set, family, code)| SymbolSetFallback {
            symbol_set,
            family,
            code,
        })
}
