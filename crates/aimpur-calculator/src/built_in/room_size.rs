//! Room Size Calculator
//!
//! `shape` selects which dimensions are read:
//!   * `rectangle`: `length`, `width`
//!   * `square`: `side` (or `length`)
//!   * `l-shape`: `length1`, `width1`, `length2`, `width2`
//!   * `circular`: `diameter`
//!
//! A `preset` name (e.g. `bedroom`) supplies rectangle dimensions and height in feet;
//! explicit values still win. Presets are rectangles, so combining one with any other
//! `shape` is rejected.

use std::collections::HashMap;

use aimpur_types::{FactValue, MeasurementUnit, RoomShape};

use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin, to_fact_value};
use crate::presets::{RoomPreset, room_preset};
use crate::room_size::{RoomDimensions, calculate_room};
use crate::types::{CalculatorError, CalculatorFieldType, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("shape", CalculatorFieldType::Choice),
    FieldSpec::optional("preset", CalculatorFieldType::Choice),
    FieldSpec::optional("unit", CalculatorFieldType::Choice),
    FieldSpec::optional("height", CalculatorFieldType::Float),
    FieldSpec::optional("length", CalculatorFieldType::Float),
    FieldSpec::optional("width", CalculatorFieldType::Float),
    FieldSpec::optional("side", CalculatorFieldType::Float),
    FieldSpec::optional("length1", CalculatorFieldType::Float),
    FieldSpec::optional("width1", CalculatorFieldType::Float),
    FieldSpec::optional("length2", CalculatorFieldType::Float),
    FieldSpec::optional("width2", CalculatorFieldType::Float),
    FieldSpec::optional("diameter", CalculatorFieldType::Float),
];

#[derive(Debug, Default)]
pub struct RoomSizeCalculator;

impl RoomSizeCalculator {
    fn dimensions(
        inputs: &CalculatorInputs<'_>,
        shape: RoomShape,
        preset: Option<&RoomPreset>,
    ) -> Result<RoomDimensions, CalculatorError> {
        let with_preset = |name: &str, fallback: Option<f64>| -> Result<f64, CalculatorError> {
            match (inputs.optional_f64(name)?, fallback) {
                (Some(value), _) | (None, Some(value)) => Ok(value),
                (None, None) => Err(CalculatorError::missing_field(name)),
            }
        };

        Ok(match shape {
            RoomShape::Rectangle => RoomDimensions::Rectangle {
                length: with_preset("length", preset.map(|p| p.length))?,
                width: with_preset("width", preset.map(|p| p.width))?,
            },
            RoomShape::Square => RoomDimensions::Square {
                side: match inputs.optional_f64("side")? {
                    Some(side) => side,
                    None => inputs.required_f64("length")?,
                },
            },
            RoomShape::LShape => RoomDimensions::LShape {
                length1: inputs.required_f64("length1")?,
                width1: inputs.required_f64("width1")?,
                length2: inputs.required_f64("length2")?,
                width2: inputs.required_f64("width2")?,
            },
            RoomShape::Circular => RoomDimensions::Circular {
                diameter: inputs.required_f64("diameter")?,
            },
        })
    }
}

impl CalculatorPlugin for RoomSizeCalculator {
    fn name(&self) -> &str {
        "room_size"
    }

    fn description(&self) -> &str {
        "Floor, wall and paintable area, volume, paint and carpet estimates for a room"
    }

    fn fields(&self) -> &[FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &HashMap<String, &FactValue>) -> CalculationResult {
        let inputs = CalculatorInputs::new(args);
        let preset = match args.get("preset").filter(|v| !v.is_blank()) {
            Some(value) => {
                let name = value.as_string();
                Some(room_preset(&name).ok_or_else(|| {
                    CalculatorError::invalid_value(
                        "preset",
                        format!("unknown room preset '{name}'"),
                    )
                })?)
            }
            None => None,
        };

        let shape = inputs.choice_or("shape", RoomShape::Rectangle)?;
        if preset.is_some() && shape != RoomShape::Rectangle {
            return Err(CalculatorError::invalid_value(
                "shape",
                format!("room presets are rectangles, got '{shape}'"),
            ));
        }
        let dimensions = Self::dimensions(&inputs, shape, preset)?;
        let height = match (inputs.optional_f64("height")?, preset) {
            (Some(height), _) => height,
            (None, Some(preset)) => preset.height,
            (None, None) => return Err(CalculatorError::missing_field("height")),
        };
        let unit = inputs.choice_or("unit", MeasurementUnit::Feet)?;

        let result = calculate_room(&dimensions, height, unit)
            .ok_or_else(|| CalculatorError::invalid_input(self.name()))?;

        let mut value = to_fact_value(&result)?;
        if let FactValue::Object(fields) = &mut value {
            fields.insert("shape".to_string(), FactValue::from(dimensions.shape().as_str()));
            fields.insert(
                "room_category_label".to_string(),
                FactValue::from(result.room_category.label()),
            );
        }
        Ok(value)
    }
}
