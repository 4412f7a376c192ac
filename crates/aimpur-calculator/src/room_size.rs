//! Room geometry for rectangular, square, L-shaped and circular floor plans.

use std::f64::consts::PI;

use aimpur_types::{MeasurementUnit, RoomCategory, RoomShape};
use serde::{Deserialize, Serialize};

use crate::units::{
    area_to_square_feet, ceil_count, is_positive_finite, length_to_feet, volume_to_cubic_feet,
};

/// Flat coverage used for the quick paint estimate, in sq ft per gallon. Deliberately coarser
/// than the finish-specific table in [`crate::paint`].
pub const PAINT_COVERAGE_PER_GALLON: f64 = 350.0;
/// Standard broadloom carpet roll width in feet.
pub const CARPET_ROLL_WIDTH_FT: f64 = 12.0;
/// Standard ceiling height in feet.
pub const DEFAULT_HEIGHT_FT: f64 = 8.0;

const SMALL_MAX_SQ_FT: f64 = 150.0;
const MEDIUM_MAX_SQ_FT: f64 = 300.0;
const LARGE_MAX_SQ_FT: f64 = 500.0;

/// Floor plan dimensions, one variant per [`RoomShape`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum RoomDimensions {
    Rectangle {
        length: f64,
        width: f64,
    },
    Square {
        side: f64,
    },
    LShape {
        length1: f64,
        width1: f64,
        length2: f64,
        width2: f64,
    },
    Circular {
        diameter: f64,
    },
}

impl RoomDimensions {
    pub const fn shape(&self) -> RoomShape {
        match self {
            Self::Rectangle { .. } => RoomShape::Rectangle,
            Self::Square { .. } => RoomShape::Square,
            Self::LShape { .. } => RoomShape::LShape,
            Self::Circular { .. } => RoomShape::Circular,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSizeResult {
    pub floor_area: f64,
    pub wall_area: f64,
    pub perimeter: f64,
    pub ceiling_area: f64,
    pub volume: f64,
    pub volume_cubic_feet: f64,
    /// Walls plus ceiling.
    pub paintable_area: f64,
    pub paint_gallons: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carpet_rolls: Option<u64>,
    pub room_category: RoomCategory,
    pub recommended_furniture: &'static [&'static str],
}

pub fn room_category(floor_area_sq_ft: f64) -> RoomCategory {
    if floor_area_sq_ft <= SMALL_MAX_SQ_FT {
        RoomCategory::Small
    } else if floor_area_sq_ft <= MEDIUM_MAX_SQ_FT {
        RoomCategory::Medium
    } else if floor_area_sq_ft <= LARGE_MAX_SQ_FT {
        RoomCategory::Large
    } else {
        RoomCategory::ExtraLarge
    }
}

pub const fn furniture_recommendations(category: RoomCategory) -> &'static [&'static str] {
    match category {
        RoomCategory::Small => &[
            "Twin or full-size bed",
            "Compact desk or nightstand",
            "Small wardrobe or dresser",
            "Reading chair (optional)",
        ],
        RoomCategory::Medium => &[
            "Queen or full-size bed",
            "Standard desk with chair",
            "Dresser and nightstands",
            "Accent chair or small seating area",
        ],
        RoomCategory::Large => &[
            "King or queen-size bed",
            "Large desk with storage",
            "Full dresser set with mirror",
            "Seating area with 2-3 chairs",
            "Additional storage furniture",
        ],
        RoomCategory::ExtraLarge => &[
            "King-size bed with headboard",
            "Executive desk setup",
            "Complete dresser ensemble",
            "Full seating area with sofa/chairs",
            "Entertainment center or bookshelf",
            "Multiple storage solutions",
        ],
    }
}

/// Rolls laid over a `ceil(width / 12) x ceil(length / 12)` grid. `None` when the grid
/// is too large to count.
fn carpet_rolls(width: f64, length: f64, unit: MeasurementUnit) -> Option<u64> {
    let across = ceil_count(length_to_feet(width, unit) / CARPET_ROLL_WIDTH_FT)?;
    let along = ceil_count(length_to_feet(length, unit) / CARPET_ROLL_WIDTH_FT)?;
    across.checked_mul(along)
}

/// Fields every shape derives the same way once floor area and perimeter are known.
///
/// `None` when any derived quantity overflows to infinity or a count does not fit.
fn derive_result(
    floor_area: f64,
    perimeter: f64,
    height: f64,
    unit: MeasurementUnit,
    carpet_rolls: Option<u64>,
) -> Option<RoomSizeResult> {
    let wall_area = perimeter * height;
    let volume = floor_area * height;
    let paintable_area = wall_area + floor_area;
    let volume_cubic_feet = volume_to_cubic_feet(volume, unit);
    let paintable_sq_ft = area_to_square_feet(paintable_area, unit);
    let derived = [floor_area, perimeter, volume_cubic_feet, paintable_sq_ft];
    if !derived.into_iter().all(f64::is_finite) {
        return None;
    }

    let category = room_category(area_to_square_feet(floor_area, unit));
    Some(RoomSizeResult {
        floor_area,
        wall_area,
        perimeter,
        ceiling_area: floor_area,
        volume,
        volume_cubic_feet,
        paintable_area,
        paint_gallons: ceil_count(paintable_sq_ft / PAINT_COVERAGE_PER_GALLON)?,
        carpet_rolls,
        room_category: category,
        recommended_furniture: furniture_recommendations(category),
    })
}

pub fn calculate_rectangular_room(
    length: f64,
    width: f64,
    height: f64,
    unit: MeasurementUnit,
) -> Option<RoomSizeResult> {
    if ![length, width, height].into_iter().all(is_positive_finite) {
        return None;
    }
    let floor_area = length * width;
    let perimeter = 2.0 * (length + width);
    let rolls = carpet_rolls(width, length, unit)?;
    derive_result(floor_area, perimeter, height, unit, Some(rolls))
}

pub fn calculate_square_room(
    side: f64,
    height: f64,
    unit: MeasurementUnit,
) -> Option<RoomSizeResult> {
    calculate_rectangular_room(side, side, height, unit)
}

/// L-shaped room modelled as two non-overlapping rectangles.
///
/// The perimeter `l1 + w1 + l2 + w2 + |l1 - l2| + |w1 - w2|` approximates the outer
/// boundary and is only exact for particular alignments of the two rectangles.
/// Carpet is estimated over the bounding `max(l) x max(w)` grid.
pub fn calculate_l_shape_room(
    length1: f64,
    width1: f64,
    length2: f64,
    width2: f64,
    height: f64,
    unit: MeasurementUnit,
) -> Option<RoomSizeResult> {
    if ![length1, width1, length2, width2, height].into_iter().all(is_positive_finite) {
        return None;
    }
    let floor_area = length1 * width1 + length2 * width2;
    let perimeter = length1
        + width1
        + length2
        + width2
        + (length1 - length2).abs()
        + (width1 - width2).abs();
    let rolls = carpet_rolls(width1.max(width2), length1.max(length2), unit)?;
    derive_result(floor_area, perimeter, height, unit, Some(rolls))
}

/// Circular room. No carpet estimate: the roll grid does not apply to a round floor.
pub fn calculate_circular_room(
    diameter: f64,
    height: f64,
    unit: MeasurementUnit,
) -> Option<RoomSizeResult> {
    if !is_positive_finite(diameter) || !is_positive_finite(height) {
        return None;
    }
    let radius = diameter / 2.0;
    let floor_area = PI * radius * radius;
    let perimeter = 2.0 * PI * radius;
    derive_result(floor_area, perimeter, height, unit, None)
}

pub fn calculate_room(
    dimensions: &RoomDimensions,
    height: f64,
    unit: MeasurementUnit,
) -> Option<RoomSizeResult> {
    match *dimensions {
        RoomDimensions::Rectangle { length, width } => {
            calculate_rectangular_room(length, width, height, unit)
        }
        RoomDimensions::Square { side } => calculate_square_room(side, height, unit),
        RoomDimensions::LShape { length1, width1, length2, width2 } => {
            calculate_l_shape_room(length1, width1, length2, width2, height, unit)
        }
        RoomDimensions::Circular { diameter } => calculate_circular_room(diameter, height, unit),
    }
}
