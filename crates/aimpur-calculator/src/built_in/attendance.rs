//! Attendance Calculator
//!
//! Inputs:
//!   * `total` - classes held so far
//!   * `attended` - classes attended so far
//!   * `required` - optional target percentage in (0, 100]
//!
//! Besides the core result, the output carries the standing's label and message and a
//! `projection` of the percentage over the next twenty classes, all attended.

use std::collections::HashMap;

use aimpur_types::FactValue;

use crate::attendance::{PROJECTION_CLASSES, attendance_projection, calculate_attendance};
use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin, to_fact_value};
use crate::types::{CalculatorError, CalculatorFieldType, FieldSpec};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("total", CalculatorFieldType::Float),
    FieldSpec::required("attended", CalculatorFieldType::Float),
    FieldSpec::optional("required", CalculatorFieldType::Float),
];

#[derive(Debug, Default)]
pub struct AttendanceCalculator;

impl CalculatorPlugin for AttendanceCalculator {
    fn name(&self) -> &str {
        "attendance"
    }

    fn description(&self) -> &str {
        "Attendance percentage and classes needed or skippable for a target"
    }

    fn fields(&self) -> &[FieldSpec] {
        FIELDS
    }

    fn calculate(&self, args: &HashMap<String, &FactValue>) -> CalculationResult {
        let inputs = CalculatorInputs::new(args);
        let total = inputs.required_f64("total")?;
        let attended = inputs.required_f64("attended")?;
        let required = inputs.optional_f64("required")?;

        let result = calculate_attendance(total, attended, required)
            .ok_or_else(|| CalculatorError::invalid_input(self.name()))?;
        let projection = attendance_projection(total, attended, PROJECTION_CLASSES)
            .ok_or_else(|| CalculatorError::invalid_input(self.name()))?;

        let mut value = to_fact_value(&result)?;
        if let FactValue::Object(fields) = &mut value {
            fields.insert(
                "current_percentage_display".to_string(),
                FactValue::String(result.display_percentage()),
            );
            fields.insert("status_label".to_string(), FactValue::from(result.status.label()));
            fields.insert("status_message".to_string(), FactValue::from(result.status.message()));
            fields.insert("projection".to_string(), to_fact_value(&projection)?);
        }
        Ok(value)
    }
}
