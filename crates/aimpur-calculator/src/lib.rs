#![deny(clippy::all)]
//! Calculators behind the Aimpur tools.
//!
//! Each calculator is a pure function from a parameter struct to `Some(result)`, or `None`
//! when the input cannot produce a meaningful answer:
//!
//! - [`attendance::calculate_attendance`]
//! - [`paint::calculate_paint`]
//! - [`room_size::calculate_room`] and the per-shape functions
//! - [`tile::calculate_tiles`]
//!
//! The same calculators are registered by name in [`Calculator`] for front-ends that pass
//! loosely typed form input as [`FactValue`] arguments.

pub mod attendance;
pub mod built_in;
pub mod calculator;
pub mod paint;
pub mod plugin;
pub mod plugin_manager;
pub mod presets;
pub mod room_size;
pub mod tile;
pub mod types;
pub mod units;

pub use aimpur_types::FactValue;
pub use calculator::{Calculator, CalculatorInfo};
pub use plugin::{CalculationResult, CalculatorPlugin};
pub use types::{CalculatorError, ErrorCode};
