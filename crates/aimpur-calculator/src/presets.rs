//! Canned room and tile sizes offered as one-click starting points.

use serde::Serialize;

/// Typical room dimensions, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomPreset {
    pub name: &'static str,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub description: &'static str,
}

impl RoomPreset {
    const fn new(
        name: &'static str,
        length: f64,
        width: f64,
        height: f64,
        description: &'static str,
    ) -> Self {
        Self { name, length, width, height, description }
    }
}

/// Common tile face sizes, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilePreset {
    pub name: &'static str,
    pub length: f64,
    pub width: f64,
    pub label: &'static str,
}

pub const ROOM_PRESETS: &[RoomPreset] = &[
    RoomPreset::new("bedroom", 12.0, 12.0, 8.0, "Standard bedroom - 144 sq ft"),
    RoomPreset::new("master-bedroom", 16.0, 14.0, 9.0, "Master bedroom - 224 sq ft"),
    RoomPreset::new("living-room", 18.0, 14.0, 9.0, "Living room - 252 sq ft"),
    RoomPreset::new("kitchen", 12.0, 10.0, 8.0, "Standard kitchen - 120 sq ft"),
    RoomPreset::new("bathroom", 8.0, 5.0, 8.0, "Full bathroom - 40 sq ft"),
    RoomPreset::new("office", 10.0, 10.0, 8.0, "Home office - 100 sq ft"),
    RoomPreset::new("dining-room", 14.0, 12.0, 9.0, "Dining room - 168 sq ft"),
];

pub const TILE_PRESETS: &[TilePreset] = &[
    TilePreset { name: "12x12", length: 12.0, width: 12.0, label: "12\" × 12\"" },
    TilePreset { name: "18x18", length: 18.0, width: 18.0, label: "18\" × 18\"" },
    TilePreset { name: "24x24", length: 24.0, width: 24.0, label: "24\" × 24\"" },
    TilePreset { name: "12x24", length: 12.0, width: 24.0, label: "12\" × 24\"" },
    TilePreset { name: "6x24", length: 6.0, width: 24.0, label: "6\" × 24\" (Plank)" },
    TilePreset { name: "8x48", length: 8.0, width: 48.0, label: "8\" × 48\" (Plank)" },
    TilePreset { name: "4x12", length: 4.0, width: 12.0, label: "4\" × 12\" (Subway)" },
    TilePreset { name: "3x6", length: 3.0, width: 6.0, label: "3\" × 6\" (Subway)" },
];

pub fn room_preset(name: &str) -> Option<&'static RoomPreset> {
    ROOM_PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

pub fn tile_preset(name: &str) -> Option<&'static TilePreset> {
    TILE_PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
