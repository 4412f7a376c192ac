use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseVariantError;

/// Paint sheen. Coverage per container falls from flat to gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintFinish {
    /// No shine, hides imperfections.
    Flat,
    /// Slight sheen, easy to clean.
    #[default]
    Eggshell,
    /// Soft sheen, durable.
    Satin,
    /// Shiny, moisture resistant.
    SemiGloss,
    /// High shine, very durable.
    Gloss,
}

impl PaintFinish {
    /// Every variant, from highest to lowest coverage.
    pub const ALL: [Self; 5] =
        [Self::Flat, Self::Eggshell, Self::Satin, Self::SemiGloss, Self::Gloss];

    /// Wire name of the finish.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Eggshell => "eggshell",
            Self::Satin => "satin",
            Self::SemiGloss => "semi-gloss",
            Self::Gloss => "gloss",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat/Matte",
            Self::Eggshell => "Eggshell",
            Self::Satin => "Satin",
            Self::SemiGloss => "Semi-Gloss",
            Self::Gloss => "Gloss",
        }
    }
}

impl fmt::Display for PaintFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaintFinish {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|finish| finish.as_str() == normalized).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|finish| finish.as_str()).collect();
            ParseVariantError::new("paint finish", s, &names)
        })
    }
}

/// Floor plan shape of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomShape {
    /// Standard rectangular room.
    #[default]
    Rectangle,
    /// Rectangle with equal length and width.
    Square,
    /// Two connected rectangles.
    LShape,
    /// Round room.
    Circular,
}

impl RoomShape {
    /// Every variant, in display order.
    pub const ALL: [Self; 4] = [Self::Rectangle, Self::Square, Self::LShape, Self::Circular];

    /// Wire name of the shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::LShape => "l-shape",
            Self::Circular => "circular",
        }
    }
}

impl fmt::Display for RoomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomShape {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "rectangle" | "rectangular" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            "l-shape" | "lshape" | "l-shaped" => Ok(Self::LShape),
            "circular" | "circle" => Ok(Self::Circular),
            _ => Err(ParseVariantError::new(
                "room shape",
                s,
                &["rectangle", "square", "l-shape", "circular"],
            )),
        }
    }
}

/// Coarse room size class derived from floor area in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomCategory {
    /// Up to 150 sq ft.
    Small,
    /// Up to 300 sq ft.
    Medium,
    /// Up to 500 sq ft.
    Large,
    /// Above 500 sq ft.
    ExtraLarge,
}

impl RoomCategory {
    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra Large",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance standing, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Below 60%.
    Failing,
    /// 60% up to 70%.
    Critical,
    /// 70% up to 75%.
    Warning,
    /// 75% up to 80%.
    Satisfactory,
    /// 80% up to 90%.
    Good,
    /// 90% and above.
    Excellent,
}

impl AttendanceStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Failing => "failing",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Satisfactory => "satisfactory",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Failing => "Failing",
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Satisfactory => "Satisfactory",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Short advice shown next to the label.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Failing => "Immediate action needed",
            Self::Critical => "Below requirements",
            Self::Warning => "Close to minimum",
            Self::Satisfactory => "Meeting requirements",
            Self::Good => "Good attendance record",
            Self::Excellent => "Outstanding attendance!",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_finish_accepts_loose_spelling() {
        assert_eq!("semi-gloss".parse::<PaintFinish>().unwrap(), PaintFinish::SemiGloss);
        assert_eq!("Semi_Gloss".parse::<PaintFinish>().unwrap(), PaintFinish::SemiGloss);
        assert!("matte".parse::<PaintFinish>().is_err());
    }

    #[test]
    fn test_room_shape_wire_names() {
        assert_eq!(serde_json::to_string(&RoomShape::LShape).unwrap(), "\"l-shape\"");
        for shape in RoomShape::ALL {
            assert_eq!(shape.as_str().parse::<RoomShape>().unwrap(), shape);
        }
    }

    #[test]
    fn test_room_category_ordering() {
        assert!(RoomCategory::Small < RoomCategory::Medium);
        assert!(RoomCategory::Large < RoomCategory::ExtraLarge);
        assert_eq!(RoomCategory::ExtraLarge.to_string(), "extra-large");
    }

    #[test]
    fn test_attendance_status_ordering_and_text() {
        assert!(AttendanceStatus::Failing < AttendanceStatus::Critical);
        assert!(AttendanceStatus::Good < AttendanceStatus::Excellent);
        assert_eq!(AttendanceStatus::Satisfactory.label(), "Satisfactory");
        assert_eq!(AttendanceStatus::Warning.message(), "Close to minimum");
        let wire = serde_json::to_string(&AttendanceStatus::Excellent).unwrap();
        assert_eq!(wire, "\"excellent\"");
    }
}
