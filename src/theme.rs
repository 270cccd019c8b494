//! Color themes for rendering the portfolio. Instead of writing palette
//! values into some ambient global, selection goes through an explicit
//! `ThemeContext` that callers pass down: set on selection, read on render.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub glow_primary: String,
    pub glow_secondary: String,
}

impl Theme {
    fn new(name: &str, primary: &str, secondary: &str, glow_primary: &str, glow_secondary: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            glow_primary: glow_primary.to_string(),
            glow_secondary: glow_secondary.to_string(),
        }
    }
}

/// Owns the available palettes and the current selection.
pub struct ThemeContext {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeContext {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes, current: 0 }
    }

    /// Select a theme by name (case-insensitive). Returns false and
    /// leaves the selection unchanged when no palette matches.
    pub fn select(&mut self, name: &str) -> bool {
        match self
            .themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
        {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.current]
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(vec![
            Theme::new("Default", "#ef4444", "#06b6d4", "rgba(239, 68, 68, 0.5)", "rgba(6, 182, 212, 0.5)"),
            Theme::new("Forest", "#22c55e", "#f97316", "rgba(34, 197, 94, 0.5)", "rgba(249, 115, 22, 0.5)"),
            Theme::new("Violet", "#8b5cf6", "#ec4899", "rgba(139, 92, 246, 0.5)", "rgba(236, 72, 153, 0.5)"),
            Theme::new("Ocean", "#3b82f6", "#14b8a6", "rgba(59, 130, 246, 0.5)", "rgba(20, 184, 166, 0.5)"),
        ])
    }
}
