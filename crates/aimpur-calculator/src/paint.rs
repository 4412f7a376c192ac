//! Paint and primer quantity for a rectangular room.

use aimpur_types::{MeasurementUnit, PaintFinish};
use serde::{Deserialize, Serialize};

use crate::units::{area_to_square_feet, area_to_volume, ceil_count, is_positive_finite};

/// Area one container covers per coat: sq ft per gallon and sq m per liter.
/// The two figures are independent empirical values, not conversions of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    pub per_gallon: f64,
    pub per_liter: f64,
}

impl Coverage {
    /// Coverage figure matching the measurement unit.
    pub const fn for_unit(self, unit: MeasurementUnit) -> f64 {
        match unit {
            MeasurementUnit::Feet => self.per_gallon,
            MeasurementUnit::Meters => self.per_liter,
        }
    }
}

pub const PRIMER_COVERAGE: Coverage = Coverage { per_gallon: 350.0, per_liter: 10.5 };

/// Deducted per door, in square units of the active measurement unit.
pub const STANDARD_DOOR_AREA: f64 = 20.0;
/// Deducted per window, in square units of the active measurement unit.
pub const STANDARD_WINDOW_AREA: f64 = 15.0;
/// Primer is priced at this fraction of the topcoat price.
pub const PRIMER_PRICE_FACTOR: f64 = 0.8;

pub const DEFAULT_COATS: u32 = 2;
pub const DEFAULT_DOORS: u32 = 2;
pub const DEFAULT_WINDOWS: u32 = 2;

pub const fn coverage_for(finish: PaintFinish) -> Coverage {
    match finish {
        PaintFinish::Flat | PaintFinish::Eggshell => {
            Coverage { per_gallon: 400.0, per_liter: 12.0 }
        }
        PaintFinish::Satin | PaintFinish::SemiGloss => {
            Coverage { per_gallon: 350.0, per_liter: 10.5 }
        }
        PaintFinish::Gloss => Coverage { per_gallon: 300.0, per_liter: 9.0 },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintParams {
    pub room_length: f64,
    pub room_width: f64,
    pub room_height: f64,
    pub measurement_unit: MeasurementUnit,
    pub paint_ceiling: bool,
    pub doors: u32,
    pub windows: u32,
    pub finish: PaintFinish,
    pub coats: u32,
    pub needs_primer: bool,
    /// Price per gallon (feet) or liter (meters). Ignored unless positive.
    pub price_per_gallon: Option<f64>,
}

impl PaintParams {
    /// Room with the tool's defaults: eggshell, two coats, two doors, two windows, walls only.
    pub fn new(room_length: f64, room_width: f64, room_height: f64) -> Self {
        Self {
            room_length,
            room_width,
            room_height,
            measurement_unit: MeasurementUnit::Feet,
            paint_ceiling: false,
            doors: DEFAULT_DOORS,
            windows: DEFAULT_WINDOWS,
            finish: PaintFinish::Eggshell,
            coats: DEFAULT_COATS,
            needs_primer: false,
            price_per_gallon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintResult {
    /// Net paintable area in square feet, after door and window deductions.
    pub total_area: f64,
    pub paint_needed_per_coat: f64,
    pub total_paint_needed: f64,
    pub cans_needed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer_needed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer_cans_needed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_area: Option<f64>,
}

/// Paint needed for four walls (and optionally the ceiling) of a rectangular room.
///
/// Returns `None` unless length, width and height are positive finite numbers and at
/// least one coat is requested. Door and window deductions never take the area below zero.
pub fn calculate_paint(params: &PaintParams) -> Option<PaintResult> {
    let PaintParams { room_length: l, room_width: w, room_height: h, .. } = *params;
    if ![l, w, h].into_iter().all(is_positive_finite) || params.coats == 0 {
        return None;
    }

    let wall_area = 2.0 * (l * h) + 2.0 * (w * h);
    let ceiling_area = if params.paint_ceiling { l * w } else { 0.0 };
    let openings = f64::from(params.doors) * STANDARD_DOOR_AREA
        + f64::from(params.windows) * STANDARD_WINDOW_AREA;
    let net_area = (wall_area + ceiling_area - openings).max(0.0);

    let unit = params.measurement_unit;
    let total_area = area_to_square_feet(net_area, unit);

    let coverage = coverage_for(params.finish).for_unit(unit);
    let paint_needed_per_coat = area_to_volume(total_area, coverage);
    let total_paint_needed = paint_needed_per_coat * f64::from(params.coats);
    let cans_needed = ceil_count(total_paint_needed)?;

    let (primer_needed, primer_cans_needed) = if params.needs_primer {
        let primer = area_to_volume(total_area, PRIMER_COVERAGE.for_unit(unit));
        (Some(primer), Some(ceil_count(primer)?))
    } else {
        (None, None)
    };

    let price = params.price_per_gallon.filter(|p| is_positive_finite(*p));
    let (total_cost, cost_per_area) = match price {
        Some(price) => {
            let primer_cost =
                primer_cans_needed.map_or(0.0, |cans| cans as f64 * price * PRIMER_PRICE_FACTOR);
            let cost = cans_needed as f64 * price + primer_cost;
            if !cost.is_finite() {
                return None;
            }
            let per_area = (total_area > 0.0).then(|| cost / total_area);
            (Some(cost), per_area)
        }
        None => (None, None),
    };

    Some(PaintResult {
        total_area,
        paint_needed_per_coat,
        total_paint_needed,
        cans_needed,
        primer_needed,
        primer_cans_needed,
        total_cost,
        cost_per_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_room() -> PaintParams {
        PaintParams::new(12.0, 10.0, 8.0)
    }

    #[test]
    fn test_reference_room() {
        let result = calculate_paint(&reference_room()).unwrap();
        assert_eq!(result.total_area, 282.0);
        assert!((result.paint_needed_per_coat - 0.705).abs() < 1e-12);
        assert!((result.total_paint_needed - 1.41).abs() < 1e-12);
        assert_eq!(result.cans_needed, 2);
        assert_eq!(result.primer_needed, None);
        assert_eq!(result.total_cost, None);
        assert_eq!(result.cost_per_area, None);
    }

    #[test]
    fn test_ceiling_primer_and_cost() {
        let params = PaintParams {
            paint_ceiling: true,
            needs_primer: true,
            price_per_gallon: Some(40.0),
            ..reference_room()
        };
        let result = calculate_paint(&params).unwrap();
        // 352 walls + 120 ceiling - 70 openings
        assert_eq!(result.total_area, 402.0);
        assert_eq!(result.cans_needed, 3);
        assert_eq!(result.primer_cans_needed, Some(2));
        assert!((result.primer_needed.unwrap() - 402.0 / 350.0).abs() < 1e-12);
        // 3 * 40 + 2 * 32
        assert_eq!(result.total_cost, Some(184.0));
        assert!((result.cost_per_area.unwrap() - 184.0 / 402.0).abs() < 1e-12);
    }

    #[test]
    fn test_finish_changes_coverage() {
        let gloss = PaintParams { finish: PaintFinish::Gloss, coats: 1, ..reference_room() };
        let result = calculate_paint(&gloss).unwrap();
        assert!((result.paint_needed_per_coat - 282.0 / 300.0).abs() < 1e-12);
        assert_eq!(result.cans_needed, 1);
    }

    #[test]
    fn test_coverage_decreases_towards_gloss() {
        let per_gallon: Vec<f64> =
            PaintFinish::ALL.iter().map(|f| coverage_for(*f).per_gallon).collect();
        assert!(per_gallon.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_metric_room_uses_per_liter_coverage() {
        let params = PaintParams {
            measurement_unit: MeasurementUnit::Meters,
            doors: 0,
            windows: 0,
            coats: 1,
            ..PaintParams::new(4.0, 3.0, 2.5)
        };
        let result = calculate_paint(&params).unwrap();
        let net_sq_ft = 35.0 * 10.764;
        assert!((result.total_area - net_sq_ft).abs() < 1e-9);
        assert!((result.paint_needed_per_coat - net_sq_ft / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_primer_uses_per_liter_coverage() {
        let params = PaintParams {
            measurement_unit: MeasurementUnit::Meters,
            doors: 0,
            windows: 0,
            needs_primer: true,
            ..PaintParams::new(4.0, 3.0, 2.5)
        };
        let result = calculate_paint(&params).unwrap();
        // 35 m2 walls, 376.74 after conversion, over 10.5 per liter
        let primer = result.primer_needed.unwrap();
        assert!((primer - 35.0 * 10.764 / 10.5).abs() < 1e-9);
        assert_eq!(result.primer_cans_needed, Some(36));
    }

    #[test]
    fn test_uncountable_paint_totals_yield_no_result() {
        assert!(calculate_paint(&PaintParams::new(1e200, 1e200, 1e200)).is_none());

        let pricey = PaintParams { price_per_gallon: Some(f64::MAX), ..reference_room() };
        assert!(calculate_paint(&pricey).is_none());
    }

    #[test]
    fn test_openings_larger_than_walls_clamp_to_zero() {
        let params = PaintParams {
            doors: 10,
            windows: 10,
            price_per_gallon: Some(30.0),
            ..PaintParams::new(2.0, 2.0, 2.0)
        };
        let result = calculate_paint(&params).unwrap();
        assert_eq!(result.total_area, 0.0);
        assert_eq!(result.cans_needed, 0);
        assert_eq!(result.total_cost, Some(0.0));
        assert_eq!(result.cost_per_area, None);
    }

    #[test]
    fn test_non_positive_price_omits_cost() {
        for price in [0.0, -3.0, f64::NAN] {
            let params = PaintParams { price_per_gallon: Some(price), ..reference_room() };
            let result = calculate_paint(&params).unwrap();
            assert_eq!(result.total_cost, None);
            assert_eq!(result.cost_per_area, None);
        }
    }

    #[test]
    fn test_invalid_dimensions_or_coats() {
        let rooms = [
            (0.0, 10.0, 8.0),
            (12.0, -1.0, 8.0),
            (12.0, 10.0, f64::NAN),
            (f64::INFINITY, 10.0, 8.0),
        ];
        for (l, w, h) in rooms {
            assert!(calculate_paint(&PaintParams::new(l, w, h)).is_none());
        }
        assert!(calculate_paint(&PaintParams { coats: 0, ..reference_room() }).is_none());
    }
}
