//! Lookup of built-in themes by name

use super::{definitions, Theme};

/// Ordered collection of built-in themes
pub struct ThemeRegistry {
    themes: Vec<(String, Theme)>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let themes = [definitions::rollcall(), definitions::terminal()]
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        Self { themes }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, theme)| theme)
    }

    /// Get a theme by name, falling back to the default
    pub fn get_or_default(&self, name: &str) -> Theme {
        match self.get(name) {
            Some(theme) => theme.clone(),
            None => {
                tracing::warn!(theme = %name, "Unknown theme, using default");
                definitions::rollcall()
            }
        }
    }

    /// Name of the theme after `current`, wrapping around
    pub fn next_name(&self, current: &str) -> String {
        let idx = self
            .themes
            .iter()
            .position(|(n, _)| n == current)
            .map(|i| (i + 1) % self.themes.len())
            .unwrap_or(0);
        self.themes[idx].0.clone()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let registry = ThemeRegistry::new();
        assert!(registry.get("rollcall").is_some());
        assert!(registry.get("terminal").is_some());
        assert!(registry.get("nope").is_none());
        assert_eq!(registry.get_or_default("nope").name, "rollcall");
    }

    #[test]
    fn test_next_name_wraps() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.next_name("rollcall"), "terminal");
        assert_eq!(registry.next_name("terminal"), "rollcall");
        assert_eq!(registry.next_name("unknown"), "rollcall");
    }
}
