//! Fixed-constant unit conversions shared by the calculators.
//!
//! Inputs are assumed to be validated by the caller; nothing here rounds or rejects.

use aimpur_types::{MeasurementUnit, TileSizeUnit};

/// Square feet in one square meter.
pub const SQ_FT_PER_SQ_M: f64 = 10.764;
/// Feet in one meter.
pub const FT_PER_M: f64 = 3.281;
/// Cubic feet in one cubic meter.
pub const CU_FT_PER_CU_M: f64 = 35.315;
/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Centimeters in one inch.
pub const CM_PER_INCH: f64 = 2.54;

pub fn area_to_square_feet(value: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::Meters => value * SQ_FT_PER_SQ_M,
        MeasurementUnit::Feet => value,
    }
}

pub fn length_to_feet(value: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::Meters => value * FT_PER_M,
        MeasurementUnit::Feet => value,
    }
}

pub fn volume_to_cubic_feet(value: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::Meters => value * CU_FT_PER_CU_M,
        MeasurementUnit::Feet => value,
    }
}

pub fn tile_size_to_inches(value: f64, unit: TileSizeUnit) -> f64 {
    match unit {
        TileSizeUnit::Mm => value / MM_PER_INCH,
        TileSizeUnit::Cm => value / CM_PER_INCH,
        TileSizeUnit::Inches => value,
    }
}

/// Containers of paint or primer needed to cover `area` once.
pub fn area_to_volume(area: f64, coverage_per_unit: f64) -> f64 {
    area / coverage_per_unit
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Shared precondition for every dimension input.
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// 2^64, the first whole number a `u64` cannot hold.
const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Whole units needed to cover a fractional quantity.
///
/// Negative quantities count as zero. `None` when the count is NaN or does not fit in a
/// `u64`, so an oversized input never turns into a clamped or wrapped answer.
pub(crate) fn ceil_count(value: f64) -> Option<u64> {
    whole_count(value.ceil())
}

/// Largest whole number of units within a fractional quantity; same limits as [`ceil_count`].
pub(crate) fn floor_count(value: f64) -> Option<u64> {
    whole_count(value.floor())
}

fn whole_count(value: f64) -> Option<u64> {
    if value.is_nan() || value >= COUNT_LIMIT {
        return None;
    }
    Some(value.max(0.0) as u64)
}
