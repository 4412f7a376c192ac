//! Tile, box and cost estimate for a floor or wall.

use aimpur_types::{MeasurementUnit, TileSizeUnit};
use serde::{Deserialize, Serialize};

use crate::units::{area_to_square_feet, ceil_count, is_positive_finite, tile_size_to_inches};

/// Default grout line in inches.
pub const DEFAULT_GAP_SIZE_IN: f64 = 0.25;
/// Default waste allowance in percent.
pub const DEFAULT_WASTE_PERCENTAGE: f64 = 10.0;

const INCHES_PER_FOOT: f64 = 12.0;

/// Inputs for [`calculate_tiles`].
///
/// The room is given either as `total_area` or as `room_length` x `room_width`; a usable
/// `total_area` wins. `price_per_box` and `price_per_tile` are alternatives: box pricing is
/// used whenever boxes can be counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileParams {
    pub room_length: Option<f64>,
    pub room_width: Option<f64>,
    pub total_area: Option<f64>,
    pub measurement_unit: MeasurementUnit,
    pub tile_length: f64,
    pub tile_width: f64,
    pub tile_size_unit: TileSizeUnit,
    /// Grout gap in inches, added to both tile dimensions.
    pub gap_size: f64,
    pub waste_percentage: f64,
    pub tiles_per_box: Option<f64>,
    pub price_per_box: Option<f64>,
    pub price_per_tile: Option<f64>,
}

impl TileParams {
    /// Room given by its total area, with the default gap and waste and no pricing.
    pub fn for_area(total_area: f64, tile_length: f64, tile_width: f64) -> Self {
        Self {
            room_length: None,
            room_width: None,
            total_area: Some(total_area),
            measurement_unit: MeasurementUnit::Feet,
            tile_length,
            tile_width,
            tile_size_unit: TileSizeUnit::Inches,
            gap_size: DEFAULT_GAP_SIZE_IN,
            waste_percentage: DEFAULT_WASTE_PERCENTAGE,
            tiles_per_box: None,
            price_per_box: None,
            price_per_tile: None,
        }
    }

    /// Room given by length and width, with the default gap and waste and no pricing.
    pub fn for_room(room_length: f64, room_width: f64, tile_length: f64, tile_width: f64) -> Self {
        Self {
            room_length: Some(room_length),
            room_width: Some(room_width),
            total_area: None,
            ..Self::for_area(0.0, tile_length, tile_width)
        }
    }

    /// Room area in the caller's unit, if either form of input is usable.
    pub fn resolve_room_area(&self) -> Option<f64> {
        if let Some(area) = self.total_area.filter(|a| is_positive_finite(*a)) {
            return Some(area);
        }
        match (self.room_length, self.room_width) {
            (Some(l), Some(w)) if is_positive_finite(l) && is_positive_finite(w) => Some(l * w),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileResult {
    /// Room area in square feet.
    pub room_area: f64,
    /// Footprint of one tile plus grout, in square feet.
    pub tile_area: f64,
    pub tiles_needed: u64,
    pub tiles_with_waste: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes_needed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_sq_unit: Option<f64>,
}

/// Returns `None` when the room area cannot be resolved, a tile dimension is not positive,
/// or the gap or waste allowance is negative or non-finite.
pub fn calculate_tiles(params: &TileParams) -> Option<TileResult> {
    let room_area = area_to_square_feet(params.resolve_room_area()?, params.measurement_unit);

    if !is_positive_finite(params.tile_length) || !is_positive_finite(params.tile_width) {
        return None;
    }
    let gap = params.gap_size;
    let waste = params.waste_percentage;
    if !gap.is_finite() || gap < 0.0 || !waste.is_finite() || waste < 0.0 {
        return None;
    }

    let effective_length = tile_size_to_inches(params.tile_length, params.tile_size_unit) + gap;
    let effective_width = tile_size_to_inches(params.tile_width, params.tile_size_unit) + gap;
    let tile_area = (effective_length / INCHES_PER_FOOT) * (effective_width / INCHES_PER_FOOT);

    let tiles_needed = ceil_count(room_area / tile_area)?;
    let tiles_with_waste = ceil_count(tiles_needed as f64 * (1.0 + waste / 100.0))?;

    let boxes_needed = match params.tiles_per_box.filter(|n| is_positive_finite(*n)) {
        Some(per_box) => Some(ceil_count(tiles_with_waste as f64 / per_box)?),
        None => None,
    };

    let price_per_box = params.price_per_box.filter(|p| is_positive_finite(*p));
    let price_per_tile = params.price_per_tile.filter(|p| is_positive_finite(*p));
    let total_cost = match (boxes_needed, price_per_box, price_per_tile) {
        (Some(boxes), Some(price), _) => Some(boxes as f64 * price),
        (_, _, Some(price)) => Some(tiles_with_waste as f64 * price),
        _ => None,
    };
    if total_cost.is_some_and(|cost| !cost.is_finite()) {
        return None;
    }

    Some(TileResult {
        room_area,
        tile_area,
        tiles_needed,
        tiles_with_waste,
        boxes_needed,
        total_cost,
        cost_per_sq_unit: total_cost.map(|cost| cost / room_area),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_floor() {
        let result = calculate_tiles(&TileParams::for_area(300.0, 12.0, 12.0)).unwrap();
        assert!((result.tile_area - (12.25f64 / 12.0).powi(2)).abs() < 1e-12);
        assert_eq!(result.tiles_needed, 288);
        assert_eq!(result.tiles_with_waste, 317);
        assert_eq!(result.boxes_needed, None);
        assert_eq!(result.total_cost, None);
    }

    #[test]
    fn test_total_area_wins_over_dimensions() {
        let params = TileParams {
            room_length: Some(5.0),
            room_width: Some(5.0),
            ..TileParams::for_area(300.0, 12.0, 12.0)
        };
        assert_eq!(params.resolve_room_area(), Some(300.0));

        let params =
            TileParams { total_area: Some(0.0), ..TileParams::for_room(20.0, 15.0, 12.0, 12.0) };
        assert_eq!(params.resolve_room_area(), Some(300.0));
    }

    #[test]
    fn test_box_pricing() {
        let params = TileParams {
            tiles_per_box: Some(10.0),
            price_per_box: Some(25.0),
            price_per_tile: Some(99.0),
            ..TileParams::for_area(300.0, 12.0, 12.0)
        };
        let result = calculate_tiles(&params).unwrap();
        assert_eq!(result.boxes_needed, Some(32));
        assert_eq!(result.total_cost, Some(800.0));
        assert!((result.cost_per_sq_unit.unwrap() - 800.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_per_tile_pricing_without_box_size() {
        let params = TileParams {
            price_per_box: Some(25.0),
            price_per_tile: Some(2.0),
            ..TileParams::for_area(300.0, 12.0, 12.0)
        };
        let result = calculate_tiles(&params).unwrap();
        assert_eq!(result.boxes_needed, None);
        assert_eq!(result.total_cost, Some(634.0));
    }

    #[test]
    fn test_metric_room_and_tile() {
        let params = TileParams {
            measurement_unit: MeasurementUnit::Meters,
            tile_size_unit: TileSizeUnit::Cm,
            gap_size: 0.0,
            waste_percentage: 0.0,
            ..TileParams::for_room(3.0, 2.0, 30.48, 30.48)
        };
        let result = calculate_tiles(&params).unwrap();
        assert!((result.room_area - 6.0 * 10.764).abs() < 1e-9);
        assert!((result.tile_area - 1.0).abs() < 1e-12);
        assert_eq!(result.tiles_needed, 65);
        assert_eq!(result.tiles_with_waste, 65);
    }

    #[test]
    fn test_millimeter_tiles() {
        // 300 x 600 mm is 11.81 x 23.62 in, plus the quarter-inch gap on each side
        let params = TileParams {
            tile_size_unit: TileSizeUnit::Mm,
            ..TileParams::for_area(300.0, 300.0, 600.0)
        };
        let result = calculate_tiles(&params).unwrap();
        let expected_area = (300.0 / 25.4 + 0.25) / 12.0 * ((600.0 / 25.4 + 0.25) / 12.0);
        assert!((result.tile_area - expected_area).abs() < 1e-12);
        assert_eq!(result.tiles_needed, 151);
        assert_eq!(result.tiles_with_waste, 167);
    }

    #[test]
    fn test_uncountable_tile_totals_yield_no_result() {
        assert!(calculate_tiles(&TileParams::for_area(1e300, 1.0, 1.0)).is_none());

        let pricey = TileParams {
            price_per_tile: Some(f64::MAX),
            ..TileParams::for_area(300.0, 12.0, 12.0)
        };
        assert!(calculate_tiles(&pricey).is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        let base = TileParams::for_area(300.0, 12.0, 12.0);
        assert!(calculate_tiles(&TileParams { total_area: None, ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams { total_area: Some(-1.0), ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams { tile_length: 0.0, ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams { tile_width: f64::NAN, ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams { gap_size: -0.1, ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams { waste_percentage: -5.0, ..base.clone() }).is_none());
        assert!(calculate_tiles(&TileParams::for_room(10.0, 0.0, 12.0, 12.0)).is_none());
    }
}
