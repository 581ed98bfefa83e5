use std::fmt;

use serde::{Deserialize, Serialize};

/// Default legacy code for a point feature that could not be resolved.
pub const DEFAULT_POINT_SIDC: &str = "SUGPU----------";
/// Default legacy code for a line feature that could not be resolved.
pub const DEFAULT_LINE_SIDC: &str = "GUGPGLB-------X";
/// Default legacy code for an area feature that could not be resolved.
pub const DEFAULT_AREA_SIDC: &str = "GUGPGAG-------X";

/// Geometry class of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GeometryType {
    Point,
    Line,
    Area,
    #[default]
    Unknown,
}

impl GeometryType {
    /// Geometry from the single-character dictionary class (P/L/A).
    pub fn from_dictionary_char(class: &str) -> Self {
        match class.trim() {
            "P" | "p" => Self::Point,
            "L" | "l" => Self::Line,
            "A" | "a" => Self::Area,
            _ => Self::Unknown,
        }
    }

    /// Geometry from a label such as "Point", "Line" or "Area" (case ignored).
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "point" => Self::Point,
            "line" => Self::Line,
            "area" => Self::Area,
            _ => Self::Unknown,
        }
    }

    /// Geometry from a feature shape type ("Point", "Polyline", "Polygon").
    ///
    /// Unrecognized shape types are treated as points.
    pub fn from_shape_type(shape_type: &str) -> Self {
        match shape_type.trim() {
            "Polyline" => Self::Line,
            "Polygon" => Self::Area,
            _ => Self::Point,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Line => "Line",
            Self::Area => "Area",
            Self::Unknown => "Unknown",
        }
    }

    /// Legacy code used when a feature of this geometry cannot be resolved.
    ///
    /// Unknown geometry uses the point default.
    pub fn default_sidc(self) -> &'static str {
        match self {
            Self::Line => DEFAULT_LINE_SIDC,
            Self::Area => DEFAULT_AREA_SIDC,
            Self::Point | Self::Unknown => DEFAULT_POINT_SIDC,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
