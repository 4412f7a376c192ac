use aimpur_types::FactValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// Built-in Calculator Error Handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("Calculator error: {message}")]
pub struct CalculatorError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, FactValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    MissingRequiredField,
    InvalidFieldType,
    InvalidFieldValue,
    /// Arguments were well formed but the calculator produced no result.
    InvalidInput,
    UnknownCalculator,
}

impl CalculatorError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), details: None }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<FactValue>) -> Self {
        self.details.get_or_insert_with(HashMap::new).insert(key.to_string(), value.into());
        self
    }

    pub fn missing_field(name: &str) -> Self {
        Self::new(ErrorCode::MissingRequiredField, format!("Required input '{name}' was not found"))
            .with_detail("field", name)
    }

    pub fn invalid_type(name: &str, expected: &str, found: &FactValue) -> Self {
        Self::new(
            ErrorCode::InvalidFieldType,
            format!(
                "Input '{name}' was found, but it is not a {expected} (got {})",
                found.type_name()
            ),
        )
        .with_detail("field", name)
    }

    pub fn invalid_value(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidFieldValue, format!("Invalid value for '{name}': {reason}"))
            .with_detail("field", name)
    }

    pub fn invalid_input(calculator: &str) -> Self {
        Self::new(
            ErrorCode::InvalidInput,
            format!("Insufficient or invalid input for the {calculator} calculator"),
        )
        .with_detail("calculator", calculator)
    }

    pub fn unknown_calculator(name: &str) -> Self {
        Self::new(ErrorCode::UnknownCalculator, format!("calculator '{name}' not found"))
            .with_detail("calculator", name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: CalculatorFieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, field_type: CalculatorFieldType) -> Self {
        Self { name, field_type, required: true }
    }

    pub const fn optional(name: &'static str, field_type: CalculatorFieldType) -> Self {
        Self { name, field_type, required: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorFieldType {
    Integer,
    Float,
    Boolean,
    /// One of a fixed set of wire names.
    Choice,
}
