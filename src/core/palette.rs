// src/core/palette.rs

//! Display colors for sentiment labels.
//!
//! The backend is free to answer `"Emocionado."`, `"EMOCIONADO"` or
//! `" emocionado "` for the same sentiment, so lookups go through
//! [`normalize_label`] on both the table keys and the incoming label.
//! Anything not in the table gets the fallback color.

use ratatui::style::Color;
use std::collections::HashMap;

/// Built-in table, as `(label, hex color)`.
pub static DEFAULT_COLORS: &[(&str, &str)] = &[
    ("EMOCIONADO", "#3380ff"),
    ("POSITIVO", "#33ff57"),
    ("NEGATIVO", "#ff5733"),
    ("NEUTRAL", "#ffaa00"),
];

pub const DEFAULT_FALLBACK: &str = "#ffffff";

/// Canonical form of a label: trimmed, trailing periods dropped, uppercased.
pub fn normalize_label(label: &str) -> String {
    label.trim().trim_end_matches('.').trim_end().to_uppercase()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl Palette {
    pub fn new(fallback: Color) -> Self {
        Self { colors: HashMap::new(), fallback }
    }

    /// Same table, different fallback color.
    pub fn with_fallback(mut self, fallback: Color) -> Self {
        self.fallback = fallback;
        self
    }

    /// Adds or replaces the color for `label`.
    pub fn insert(&mut self, label: &str, color: Color) {
        self.colors.insert(normalize_label(label), color);
    }

    pub fn color_for(&self, label: &str) -> Color {
        self.colors
            .get(&normalize_label(label))
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> Color {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut palette = Palette::new(DEFAULT_FALLBACK.parse().unwrap_or(Color::White));
        for (label, hex) in DEFAULT_COLORS {
            if let Ok(color) = hex.parse() {
                palette.insert(label, color);
            }
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_normalized() {
        assert_eq!(normalize_label("  Emocionado. "), "EMOCIONADO");
        assert_eq!(normalize_label("NEGATIVO..."), "NEGATIVO");
        assert_eq!(normalize_label("neutral"), "NEUTRAL");
    }

    #[test]
    fn default_table_matches_backend_variants() {
        let palette = Palette::default();
        assert_eq!(palette.len(), DEFAULT_COLORS.len());
        assert_eq!(palette.color_for("EMOCIONADO."), Color::Rgb(0x33, 0x80, 0xff));
        assert_eq!(palette.color_for("emocionado"), Color::Rgb(0x33, 0x80, 0xff));
        assert_eq!(palette.color_for("Negativo."), Color::Rgb(0xff, 0x57, 0x33));
    }

    #[test]
    fn unknown_label_falls_back() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("FURIOSO"), Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(palette.color_for(""), palette.fallback());
    }

    #[test]
    fn insert_overrides_default() {
        let mut palette = Palette::default();
        palette.insert("neutral.", Color::Gray);
        assert_eq!(palette.color_for("NEUTRAL"), Color::Gray);
    }
}
