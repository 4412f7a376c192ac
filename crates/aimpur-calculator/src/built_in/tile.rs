//! Tile Calculator
//!
//! The room is `total_area`, or `room_length` x `room_width`. The tile face is
//! `tile_length` x `tile_width` in `tile_size_unit`, or a `tile_preset` such as `12x24`
//! (inches). A preset fixes the tile face, so it cannot be combined with `tile_length`,
//! `tile_width` or a non-inch `tile_size_unit`. Pricing is per box (needs `tiles_per_box`)
//! or per tile.

use std::collections::HashMap;

use aimpur_types::{FactValue, MeasurementUnit, TileSizeUnit};

use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin, to_fact_value};
use crate::presets::tile_preset;
use crate::tile::{DEFAULT_GAP_SIZE_IN, DEFAULT_WASTE_PERCENTAGE, TileParams, calculate_tiles};
use crate::types::{CalculatorError, CalculatorFieldType, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("room_length", CalculatorFieldType::Float),
    FieldSpec::optional("room_width", CalculatorFieldType::Float),
    FieldSpec::optional("total_area", CalculatorFieldType::Float),
    FieldSpec::optional("unit", CalculatorFieldType::Choice),
    FieldSpec::optional("tile_preset", CalculatorFieldType::Choice),
    FieldSpec::optional("tile_length", CalculatorFieldType::Float),
    FieldSpec::optional("tile_width", CalculatorFieldType::Float),
    FieldSpec::optional("tile_size_unit", CalculatorFieldType::Choice),
    FieldSpec::optional("gap_size", CalculatorFieldType::Float),
    FieldSpec::optional("waste_percentage", CalculatorFieldType::Float),
    FieldSpec::optional("tiles_per_box", CalculatorFieldType::Float),
    FieldSpec::optional("price_per_box", CalculatorFieldType::Float),
    FieldSpec::optional("price_per_tile", CalculatorFieldType::Float),
];

#[derive(Debug, Default)]
pub struct TileCalculator;

impl CalculatorPlugin for TileCalculator {
    fn name(&self) -> &str {
        "tile"
    }

    fn description(&self) -> &str {
        "Tiles, boxes and cost for an area including grout gap and waste allowance"
    }

    fn fields(&self) -> &[FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &HashMap<String, &FactValue>) -> CalculationResult {
        let inputs = CalculatorInputs::new(args);

        let preset = match args.get("tile_preset").filter(|v| !v.is_blank()) {
            Some(value) => {
                let name = value.as_string();
                Some(tile_preset(&name).ok_or_else(|| {
                    CalculatorError::invalid_value(
                        "tile_preset",
                        format!("unknown tile preset '{name}'"),
                    )
                })?)
            }
            None => None,
        };

        let (tile_length, tile_width, tile_size_unit) = match preset {
            Some(preset) => {
                let fixed = ["tile_length", "tile_width"];
                if let Some(name) = fixed.into_iter().find(|name| inputs.is_given(name)) {
                    return Err(CalculatorError::invalid_value(
                        name,
                        "cannot be combined with tile_preset",
                    ));
                }
                let unit = inputs.choice_or("tile_size_unit", TileSizeUnit::Inches)?;
                if unit != TileSizeUnit::Inches {
                    return Err(CalculatorError::invalid_value(
                        "tile_size_unit",
                        "tile presets are measured in inches",
                    ));
                }
                (preset.length, preset.width, TileSizeUnit::Inches)
            }
            None => (
                inputs.required_f64("tile_length")?,
                inputs.required_f64("tile_width")?,
                inputs.choice_or("tile_size_unit", TileSizeUnit::Inches)?,
            ),
        };

        let params = TileParams {
            room_length: inputs.optional_f64("room_length")?,
            room_width: inputs.optional_f64("room_width")?,
            total_area: inputs.optional_f64("total_area")?,
            measurement_unit: inputs.choice_or("unit", MeasurementUnit::Feet)?,
            tile_length,
            tile_width,
            tile_size_unit,
            gap_size: inputs.optional_f64("gap_size")?.unwrap_or(DEFAULT_GAP_SIZE_IN),
            waste_percentage: inputs
                .optional_f64("waste_percentage")?
                .unwrap_or(DEFAULT_WASTE_PERCENTAGE),
            tiles_per_box: inputs.optional_f64("tiles_per_box")?,
            price_per_box: inputs.optional_f64("price_per_box")?,
            price_per_tile: inputs.optional_f64("price_per_tile")?,
        };

        let result =
            calculate_tiles(&params).ok_or_else(|| CalculatorError::invalid_input(self.name()))?;
        to_fact_value(&result)
    }
}
