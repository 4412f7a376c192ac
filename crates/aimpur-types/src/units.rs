use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseVariantError;

/// Unit the room itself is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementUnit {
    /// Linear feet, square feet, cubic feet.
    #[default]
    Feet,
    /// Meters, square meters, cubic meters.
    Meters,
}

impl MeasurementUnit {
    /// Every variant, in display order.
    pub const ALL: [Self; 2] = [Self::Feet, Self::Meters];

    /// Wire name of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feet => "feet",
            Self::Meters => "meters",
        }
    }

    /// Whether the unit is metric.
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Meters)
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementUnit {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feet" | "ft" => Ok(Self::Feet),
            "meters" | "m" => Ok(Self::Meters),
            _ => Err(ParseVariantError::new("measurement unit", s, &["feet", "meters"])),
        }
    }
}

/// Unit the tile face is measured in. Independent of [`MeasurementUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileSizeUnit {
    /// Inches.
    #[default]
    Inches,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
}

impl TileSizeUnit {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Inches, Self::Cm, Self::Mm];

    /// Wire name of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Cm => "cm",
            Self::Mm => "mm",
        }
    }
}

impl fmt::Display for TileSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileSizeUnit {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inches" | "in" => Ok(Self::Inches),
            "cm" => Ok(Self::Cm),
            "mm" => Ok(Self::Mm),
            _ => Err(ParseVariantError::new("tile size unit", s, &["inches", "cm", "mm"])),
        }
    }
}
