use crate::plugin::CalculatorPlugin;
use std::collections::BTreeMap;

pub struct PluginManager {
    plugins: BTreeMap<String, Box<dyn CalculatorPlugin>>,
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginManager {
    pub fn new() -> Self {
        Self { plugins: BTreeMap::new() }
    }

    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    pub fn get(&self, name: &str) -> Option<&dyn CalculatorPlugin> {
        self.plugins.get(name).map(|p| p.as_ref())
    }

    /// Registered plugins in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CalculatorPlugin> {
        self.plugins.values().map(|p| p.as_ref())
    }
}
