use std::collections::HashMap;

use aimpur_types::FactValue;
use serde::Serialize;
use tracing::debug;

use crate::built_in::{
    attendance::AttendanceCalculator, paint::PaintCalculator, room_size::RoomSizeCalculator,
    tile::TileCalculator,
};
use crate::plugin::CalculationResult;
use crate::plugin_manager::PluginManager;
use crate::types::{CalculatorError, FieldSpec};

/// Listing entry for a registered calculator.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    pub name: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

/// Registry of named calculators. Immutable once built, so it can be shared freely.
pub struct Calculator {
    plugin_manager: PluginManager,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(AttendanceCalculator));
        plugin_manager.register(Box::new(PaintCalculator));
        plugin_manager.register(Box::new(RoomSizeCalculator));
        plugin_manager.register(Box::new(TileCalculator));
        Self { plugin_manager }
    }

    pub fn calculate(
        &self,
        calculator_name: &str,
        args: &HashMap<String, &FactValue>,
    ) -> CalculationResult {
        let Some(plugin) = self.plugin_manager.get(calculator_name) else {
            debug!(calculator = calculator_name, "unknown calculator requested");
            return Err(CalculatorError::unknown_calculator(calculator_name));
        };

        let result = plugin.calculate(args);
        match &result {
            Ok(_) => {
                debug!(calculator = calculator_name, inputs = args.len(), "calculation succeeded")
            }
            Err(e) => debug!(
                calculator = calculator_name,
                code = ?e.code,
                error = %e.message,
                "calculation rejected"
            ),
        }
        result
    }

    /// Convenience for callers holding owned arguments.
    pub fn calculate_owned(
        &self,
        calculator_name: &str,
        args: &HashMap<String, FactValue>,
    ) -> CalculationResult {
        let refs: HashMap<String, &FactValue> =
            args.iter().map(|(k, v)| (k.clone(), v)).collect();
        self.calculate(calculator_name, &refs)
    }

    pub fn contains(&self, calculator_name: &str) -> bool {
        self.plugin_manager.get(calculator_name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugin_manager.iter().map(|p| p.name()).collect()
    }

    pub fn describe(&self) -> Vec<CalculatorInfo> {
        self.plugin_manager
            .iter()
            .map(|p| CalculatorInfo {
                name: p.name().to_string(),
                description: p.description().to_string(),
                fields: p.fields().to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorCode;

    #[test]
    fn test_registers_all_built_ins_in_name_order() {
        let calculator = Calculator::new();
        assert_eq!(calculator.names(), vec!["attendance", "paint", "room_size", "tile"]);
        assert!(calculator.contains("tile"));
        assert!(!calculator.contains("add"));
    }

    #[test]
    fn test_unknown_calculator() {
        let err = Calculator::new().calculate("wallpaper", &HashMap::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCalculator);
        assert_eq!(err.message, "calculator 'wallpaper' not found");
    }

    #[test]
    fn test_describe_lists_required_fields() {
        let info = Calculator::new().describe();
        let paint = info.iter().find(|i| i.name == "paint").unwrap();
        let required: Vec<&str> =
            paint.fields.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, vec!["length", "width", "height"]);
    }
}
