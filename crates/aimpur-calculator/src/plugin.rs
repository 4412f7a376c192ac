use aimpur_types::FactValue;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::types::{CalculatorError, ErrorCode, FieldSpec};

pub type CalculationResult = Result<FactValue, CalculatorError>;

/// A trait for calculator plugins.
pub trait CalculatorPlugin: Send + Sync {
    /// The name of the calculator.
    fn name(&self) -> &str;

    /// One-line summary shown in listings.
    fn description(&self) -> &str;

    /// Arguments the calculator reads.
    fn fields(&self) -> &[FieldSpec];

    /// Performs the calculation.
    fn calculate(&self, args: &HashMap<String, &FactValue>) -> CalculationResult;
}

/// Typed access to plugin arguments.
///
/// Numbers may arrive as integers, floats or form text; a blank string or `Null` counts as
/// not supplied.
#[derive(Debug)]
pub struct CalculatorInputs<'a> {
    args: &'a HashMap<String, &'a FactValue>,
}

impl<'a> CalculatorInputs<'a> {
    pub fn new(args: &'a HashMap<String, &'a FactValue>) -> Self {
        Self { args }
    }

    fn get(&self, name: &str) -> Option<&'a FactValue> {
        self.args.get(name).copied().filter(|value| !value.is_blank())
    }

    pub fn is_given(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn optional_f64(&self, name: &str) -> Result<Option<f64>, CalculatorError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_number()
                .map(Some)
                .ok_or_else(|| CalculatorError::invalid_type(name, "number", value)),
        }
    }

    /// A required number. Present but non-numeric text reads as NaN and is left to the
    /// calculator's own validation.
    pub fn required_f64(&self, name: &str) -> Result<f64, CalculatorError> {
        self.optional_f64(name)?.ok_or_else(|| CalculatorError::missing_field(name))
    }

    pub fn optional_count(&self, name: &str) -> Result<Option<u32>, CalculatorError> {
        let Some(value) = self.optional_f64(name)? else {
            return Ok(None);
        };
        let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
        if whole && value <= f64::from(u32::MAX) {
            Ok(Some(value as u32))
        } else {
            Err(CalculatorError::invalid_value(name, "expected a whole number of at least 0"))
        }
    }

    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, CalculatorError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| CalculatorError::invalid_type(name, "boolean", value)),
        }
    }

    pub fn choice_or<T>(&self, name: &str, default: T) -> Result<T, CalculatorError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            None => Ok(default),
            Some(FactValue::String(s)) => {
                s.parse().map_err(|e| CalculatorError::invalid_value(name, e))
            }
            Some(other) => Err(CalculatorError::invalid_type(name, "string", other)),
        }
    }
}

/// Converts a calculator result struct into the `FactValue` handed back to callers.
pub(crate) fn to_fact_value<T: Serialize>(result: &T) -> CalculationResult {
    let unrepresentable = |e: &dyn std::fmt::Display| {
        CalculatorError::new(ErrorCode::InvalidInput, format!("unrepresentable result: {e}"))
    };
    let json = serde_json::to_value(result).map_err(|e| unrepresentable(&e))?;
    FactValue::try_from(&json).map_err(|e| unrepresentable(&e))
}
