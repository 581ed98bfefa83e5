//! Structural validation of legacy (15-character) codes.
//!
//! Checks each position against the character classes allowed by the legacy
//! grammar:
//! - coding scheme
//! - affiliation
//! - battle dimension / category
//! - status
//! - six function characters
//! - two symbol modifier characters
//! - two country characters
//! - order of battle
//!
//! A code that passes is well formed; it is not necessarily a real symbol.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEGACY_SIDC_SHAPE: Regex = Regex::new(
        r"^[SGWIOE][PUAFNSHGWMDLJKO\-][PAGSUFXTMOEVLIRNZC\-][APCDXF\-][A-Z0-9\-]{6}[A-Z\-]{2}[A-Z0-9\-]{2}[AECGNSX\-]$"
    )
    .expect("legacy SIDC pattern is a valid regex");
}

/// Whether `code` has the positional shape of a legacy code.
pub fn is_valid_shape(code: &str) -> bool {
    LEGACY_SIDC_SHAPE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_codes() {
        assert!(is_valid_shape("SFGPUCI--------"));
        assert!(is_valid_shape("SFGAUCI---AAUSG"));
        assert!(is_valid_shape("GHGPGPWA------X"));
        assert!(is_valid_shape("GUGPGLB-------X"));
        assert!(is_valid_shape("WAS-PL----P----"));
    }

    #[test]
    fn test_malformed_codes() {
        // Wrong length
        assert!(!is_valid_shape("SFGPUCI"));
        assert!(!is_valid_shape(""));
        // Unknown coding scheme
        assert!(!is_valid_shape("XFGPUCI--------"));
        // Wildcard affiliation is not a code
        assert!(!is_valid_shape("S*GPUCI--------"));
        // Lower case
        assert!(!is_valid_shape("sfgpuci--------"));
        // Bad order of battle
        assert!(!is_valid_shape("SFGPUCI-------Z"));
    }
}
