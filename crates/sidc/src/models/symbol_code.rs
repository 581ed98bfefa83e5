//! The current-generation (Delta) symbol identification code.
//!
//! A Delta code is a fixed-width, 20-character record made of ten
//! zero-padded fields:
//!
//! ```text
//!  0-1   version
//!  2     real_exercise_sim   (context)
//!  3     affiliation         (standard identity)
//!  4-5   symbol_set
//!  6     status              (operational condition)
//!  7     hq_tf_fd            (headquarters / task force / dummy)
//!  8-9   echelon_mobility
//! 10-15  entity_code
//! 16-17  modifier1
//! 18-19  modifier2
//! ```
//!
//! The 8-character short form is `symbol_set` + `entity_code`; the other
//! fields take their defaults when a short code is expanded.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::{Result, SidcError};

use super::attributes::DeltaAttributes;

/// Length of a full Delta code.
pub const FULL_CODE_LENGTH: usize = 20;

/// Length of a short Delta code (symbol set + entity).
pub const SHORT_CODE_LENGTH: usize = 8;

/// Symbol set value of a code that has not been resolved.
pub const UNSET_SYMBOL_SET: &str = "00";

const VERSION_WIDTH: usize = 2;
const REAL_EXERCISE_SIM_WIDTH: usize = 1;
const AFFILIATION_WIDTH: usize = 1;
const SYMBOL_SET_WIDTH: usize = 2;
const STATUS_WIDTH: usize = 1;
const HQ_TF_FD_WIDTH: usize = 1;
const ECHELON_MOBILITY_WIDTH: usize = 2;
const ENTITY_CODE_WIDTH: usize = 6;
const MODIFIER_WIDTH: usize = 2;

/// A Delta symbol identification code, split into its fields.
///
/// Every field is stored zero-left-padded to its declared width, so
/// [`full_code`](Self::full_code) is always exactly 20 characters. Setters
/// ignore values wider than the field and keep the prior value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolIdCode {
    version: String,
    real_exercise_sim: String,
    affiliation: String,
    symbol_set: String,
    status: String,
    hq_tf_fd: String,
    echelon_mobility: String,
    entity_code: String,
    modifier1: String,
    modifier2: String,
}

/// Stores `value` into `field`, zero-padded to `width`.
///
/// Values wider than the field are discarded.
fn assign(field: &mut String, value: &str, width: usize) {
    if value.len() > width {
        log::debug!(
            "Ignoring value '{}' wider than its {}-character field",
            value,
            width
        );
        return;
    }
    *field = format!("{:0>width$}", value, width = width);
}

macro_rules! code_field {
    ($(#[$doc:meta])* $name:ident, $setter:ident, $width:ident) => {
        $(#[$doc])*
        pub fn $name(&self) -> &str {
            &self.$name
        }

        #[doc = concat!("Sets `", stringify!($name), "`; values wider than the field are ignored.")]
        pub fn $setter(&mut self, value: &str) {
            assign(&mut self.$name, value, $width);
        }
    };
}

impl SymbolIdCode {
    /// Create a blank code with the documented defaults.
    ///
    /// The blank code has symbol set "00" and is therefore not valid.
    pub fn new() -> Self {
        Self {
            version: "10".to_string(),
            real_exercise_sim: "0".to_string(),
            affiliation: "1".to_string(),
            symbol_set: UNSET_SYMBOL_SET.to_string(),
            status: "0".to_string(),
            hq_tf_fd: "0".to_string(),
            echelon_mobility: "00".to_string(),
            entity_code: "000000".to_string(),
            modifier1: "00".to_string(),
            modifier2: "00".to_string(),
        }
    }

    /// Split a 20-character code into its fields.
    pub fn decode(code: &str) -> Result<Self> {
        let length = code.chars().count();
        if length != FULL_CODE_LENGTH {
            return Err(SidcError::BadLength {
                expected: "20",
                actual: length,
            });
        }
        if !code.is_ascii() {
            return Err(SidcError::InvalidCode(code.to_string()));
        }

        let mut symbol = Self::new();
        symbol.set_version(&code[0..2]);
        symbol.set_real_exercise_sim(&code[2..3]);
        symbol.set_affiliation(&code[3..4]);
        symbol.set_symbol_set(&code[4..6]);
        symbol.set_status(&code[6..7]);
        symbol.set_hq_tf_fd(&code[7..8]);
        symbol.set_echelon_mobility(&code[8..10]);
        symbol.set_entity_code(&code[10..16]);
        symbol.set_modifier1(&code[16..18]);
        symbol.set_modifier2(&code[18..20]);
        Ok(symbol)
    }

    /// Expand an 8-character short code (symbol set + entity).
    pub fn expand_short(code: &str) -> Result<Self> {
        let length = code.chars().count();
        if length != SHORT_CODE_LENGTH {
            return Err(SidcError::BadLength {
                expected: "8",
                actual: length,
            });
        }
        if !code.is_ascii() {
            return Err(SidcError::InvalidCode(code.to_string()));
        }

        let mut symbol = Self::new();
        symbol.set_symbol_set(&code[0..2]);
        symbol.set_entity_code(&code[2..8]);
        Ok(symbol)
    }

    /// Parse either a short (8) or a full (20) code.
    pub fn parse(code: &str) -> Result<Self> {
        match code.chars().count() {
            SHORT_CODE_LENGTH => Self::expand_short(code),
            FULL_CODE_LENGTH => Self::decode(code),
            actual => Err(SidcError::BadLength {
                expected: "8 or 20",
                actual,
            }),
        }
    }

    /// Concatenate the fields into the 20-character code.
    pub fn full_code(&self) -> String {
        let mut code = String::with_capacity(FULL_CODE_LENGTH);
        code.push_str(&self.version);
        code.push_str(&self.real_exercise_sim);
        code.push_str(&self.affiliation);
        code.push_str(&self.symbol_set);
        code.push_str(&self.status);
        code.push_str(&self.hq_tf_fd);
        code.push_str(&self.echelon_mobility);
        code.push_str(&self.entity_code);
        code.push_str(&self.modifier1);
        code.push_str(&self.modifier2);
        code
    }

    /// The 8-character short form (symbol set + entity).
    pub fn short_code(&self) -> String {
        format!("{}{}", self.symbol_set, self.entity_code)
    }

    /// A code is valid once its symbol set has been assigned.
    pub fn is_valid(&self) -> bool {
        self.symbol_set != UNSET_SYMBOL_SET
    }

    /// Tagged field dump for diagnostics, e.g. `SS:10:E:121100:M1:00:M2:00:AF:3:ST:1`.
    ///
    /// Optional fields only appear when they differ from their default.
    /// This is not a code and cannot be parsed back.
    pub fn human_readable_code(&self) -> String {
        let mut readable = format!(
            "SS:{}:E:{}:M1:{}:M2:{}:AF:{}",
            self.symbol_set, self.entity_code, self.modifier1, self.modifier2, self.affiliation
        );

        if self.real_exercise_sim != "0" {
            readable.push_str(":RES:");
            readable.push_str(&self.real_exercise_sim);
        }
        if self.status != "0" {
            readable.push_str(":ST:");
            readable.push_str(&self.status);
        }
        if self.echelon_mobility != "00" {
            readable.push_str(":EM:");
            readable.push_str(&self.echelon_mobility);
        }
        if self.hq_tf_fd != "0" {
            readable.push_str(":HTD:");
            readable.push_str(&self.hq_tf_fd);
        }

        readable
    }

    /// Per-field attribute values, or `None` for an invalid code.
    pub fn attributes(&self) -> Option<DeltaAttributes> {
        if !self.is_valid() {
            return None;
        }

        Some(DeltaAttributes {
            context: self.real_exercise_sim.clone(),
            identity: self.affiliation.clone(),
            symbol_set: self.symbol_set.clone(),
            operational_condition: self.status.clone(),
            indicator: self.hq_tf_fd.clone(),
            echelon: self.echelon_mobility.clone(),
            entity: self.entity_code.clone(),
            modifier1: self.modifier1.clone(),
            modifier2: self.modifier2.clone(),
        })
    }

    code_field!(
        /// Digits 1-2.
        version,
        set_version,
        VERSION_WIDTH
    );
    code_field!(
        /// Digit 3: reality / exercise / simulation context.
        real_exercise_sim,
        set_real_exercise_sim,
        REAL_EXERCISE_SIM_WIDTH
    );
    code_field!(
        /// Digit 4: standard identity.
        affiliation,
        set_affiliation,
        AFFILIATION_WIDTH
    );
    code_field!(
        /// Digits 5-6.
        symbol_set,
        set_symbol_set,
        SYMBOL_SET_WIDTH
    );
    code_field!(
        /// Digit 7: operational condition.
        status,
        set_status,
        STATUS_WIDTH
    );
    code_field!(
        /// Digit 8.
        hq_tf_fd,
        set_hq_tf_fd,
        HQ_TF_FD_WIDTH
    );
    code_field!(
        /// Digits 9-10.
        echelon_mobility,
        set_echelon_mobility,
        ECHELON_MOBILITY_WIDTH
    );
    code_field!(
        /// Digits 11-16.
        entity_code,
        set_entity_code,
        ENTITY_CODE_WIDTH
    );
    code_field!(
        /// Digits 17-18.
        modifier1,
        set_modifier1,
        MODIFIER_WIDTH
    );
    code_field!(
        /// Digits 19-20.
        modifier2,
        set_modifier2,
        MODIFIER_WIDTH
    );
}

impl Default for SymbolIdCode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolIdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_code())
    }
}

impl FromStr for SymbolIdCode {
    type Err = SidcError;

    fn from_str(code: &str) -> Result<Self> {
        Self::parse(code)
    }
}

impl Serialize for SymbolIdCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_code())
    }
}

/// Split a 20-character Delta code into its fields.
pub fn decode_delta(code: &str) -> Result<SymbolIdCode> {
    SymbolIdCode::decode(code)
}

/// Concatenate a Delta code's fields.
pub fn encode_delta(symbol: &SymbolIdCode) -> String {
    symbol.full_code()
}
