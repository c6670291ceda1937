use std::collections::BTreeMap;

use crate::theme::palettes::reference_palettes;
use crate::theme::tokens::ThemeTokenSet;

/// Named themes available to the service. Built once at startup, then shared
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeTokenSet>,
}

impl ThemeRegistry {
    pub fn with_reference_palettes() -> Self {
        let mut registry = Self::default();
        for (name, theme) in reference_palettes() {
            registry.insert(name, theme);
        }
        registry
    }

    /// Registers (or replaces) a theme. Names are case-insensitive.
    pub fn insert(&mut self, name: &str, theme: ThemeTokenSet) -> Option<ThemeTokenSet> {
        self.themes.insert(name.trim().to_lowercase(), theme)
    }

    pub fn get(&self, name: &str) -> Option<&ThemeTokenSet> {
        self.themes.get(&name.trim().to_lowercase())
    }

    /// Sorted theme names.
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }
}
