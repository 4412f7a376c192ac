//! Aimpur Types
//!
//! This crate defines the value types shared across the Aimpur workspace
//! (currently `aimpur-calculator` and `aimpur-api`): the dynamic `FactValue`
//! used to pass arguments to named calculators, and the closed enumerations
//! (units, finishes, shapes, categories, attendance standing) that select formulas and constants.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(missing_docs)]

mod catalog;
mod types;
mod units;

pub use catalog::{AttendanceStatus, PaintFinish, RoomCategory, RoomShape};
pub use types::FactValue;
pub use units::{MeasurementUnit, TileSizeUnit};

use thiserror::Error;

/// Returned when a wire name does not match any variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseVariantError {
    /// Enumeration being parsed, e.g. `measurement unit`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma separated list of accepted wire names.
    pub expected: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str, names: &[&str]) -> Self {
        Self { kind, value: value.to_string(), expected: names.join(", ") }
    }
}
