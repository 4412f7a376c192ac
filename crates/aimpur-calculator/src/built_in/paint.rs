//! Paint Calculator
//!
//! Room `length`, `width` and `height` are required. Everything else falls back to the
//! tool defaults: feet, eggshell, two coats, two doors, two windows, walls only, no primer.
//! The chosen finish is echoed back with its display label.

use std::collections::HashMap;

use aimpur_types::{FactValue, MeasurementUnit, PaintFinish};

use crate::paint::{DEFAULT_COATS, DEFAULT_DOORS, DEFAULT_WINDOWS, PaintParams, calculate_paint};
use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin, to_fact_value};
use crate::types::{CalculatorError, CalculatorFieldType, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("length", CalculatorFieldType::Float),
    FieldSpec::required("width", CalculatorFieldType::Float),
    FieldSpec::required("height", CalculatorFieldType::Float),
    FieldSpec::optional("unit", CalculatorFieldType::Choice),
    FieldSpec::optional("paint_ceiling", CalculatorFieldType::Boolean),
    FieldSpec::optional("doors", CalculatorFieldType::Integer),
    FieldSpec::optional("windows", CalculatorFieldType::Integer),
    FieldSpec::optional("finish", CalculatorFieldType::Choice),
    FieldSpec::optional("coats", CalculatorFieldType::Integer),
    FieldSpec::optional("needs_primer", CalculatorFieldType::Boolean),
    FieldSpec::optional("price_per_gallon", CalculatorFieldType::Float),
];

#[derive(Debug, Default)]
pub struct PaintCalculator;

impl CalculatorPlugin for PaintCalculator {
    fn name(&self) -> &str {
        "paint"
    }

    fn description(&self) -> &str {
        "Paint and primer cans for the walls and ceiling of a rectangular room"
    }

    fn fields(&self) -> &[FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &HashMap<String, &FactValue>) -> CalculationResult {
        let inputs = CalculatorInputs::new(args);
        let params = PaintParams {
            room_length: inputs.required_f64("length")?,
            room_width: inputs.required_f64("width")?,
            room_height: inputs.required_f64("height")?,
            measurement_unit: inputs.choice_or("unit", MeasurementUnit::Feet)?,
            paint_ceiling: inputs.bool_or("paint_ceiling", false)?,
            doors: inputs.optional_count("doors")?.unwrap_or(DEFAULT_DOORS),
            windows: inputs.optional_count("windows")?.unwrap_or(DEFAULT_WINDOWS),
            finish: inputs.choice_or("finish", PaintFinish::Eggshell)?,
            coats: inputs.optional_count("coats")?.unwrap_or(DEFAULT_COATS),
            needs_primer: inputs.bool_or("needs_primer", false)?,
            price_per_gallon: inputs.optional_f64("price_per_gallon")?,
        };

        let result =
            calculate_paint(&params).ok_or_else(|| CalculatorError::invalid_input(self.name()))?;

        let mut value = to_fact_value(&result)?;
        if let FactValue::Object(fields) = &mut value {
            fields.insert("finish".to_string(), FactValue::from(params.finish.as_str()));
            fields.insert("finish_label".to_string(), FactValue::from(params.finish.label()));
        }
        Ok(value)
    }
}
