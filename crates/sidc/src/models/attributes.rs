use serde::{Deserialize, Serialize};

/// Delta code fields as the per-feature attribute values used by symbol
/// attribute tables.
///
/// Serialized names match the attribute column names (`symbolset`,
/// `operationalcondition`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaAttributes {
    pub context: String,
    pub identity: String,
    #[serde(rename = "symbolset")]
    pub symbol_set: String,
    #[serde(rename = "operationalcondition")]
    pub operational_condition: String,
    pub indicator: String,
    pub echelon: String,
    pub entity: String,
    pub modifier1: String,
    pub modifier2: String,
}

impl DeltaAttributes {
    /// Attribute column names, in output order.
    pub const COLUMNS: [&'static str; 9] = [
        "context",
        "identity",
        "symbolset",
        "operationalcondition",
        "indicator",
        "echelon",
        "entity",
        "modifier1",
        "modifier2",
    ];

    /// Attribute values, in the order of [`COLUMNS`](Self::COLUMNS).
    pub fn values(&self) -> [&str; 9] {
        [
            &self.context,
            &self.identity,
            &self.symbol_set,
            &self.operational_condition,
            &self.indicator,
            &self.echelon,
            &self.entity,
            &self.modifier1,
            &self.modifier2,
        ]
    }

    /// Value for a single attribute column.
    pub fn get(&self, column: &str) -> Option<&str> {
        Self::COLUMNS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .map(|index| self.values()[index])
    }
}
