//! Layout style configuration.
//!
//! Formatting constants (divider thickness, margins, fill factors) live in
//! these structs instead of inline literals so layouts stay testable at
//! arbitrary scales. All styles serialize, so demos and tests can load them
//! from JSON.

use crate::scene::Color;
use serde::{Deserialize, Serialize};

/// Styling of an individual sticky note.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteStyle {
    /// Note panel color. Classic sticky yellow.
    pub color: Color,
    /// Note text color.
    pub text_color: Color,
    /// Per-character share of the note edge the text may occupy; the text is
    /// scaled so its widest line spans `longest_line_chars * size * text_fill`.
    pub text_fill: f32,
}

impl Default for NoteStyle {
    fn default() -> Self {
        Self {
            color: [1.0, 0.9, 0.3, 1.0],
            text_color: [0.1, 0.1, 0.1, 1.0],
            text_fill: 0.2,
        }
    }
}

/// Styling of the note table grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Thickness of divider lines, in world units.
    pub divider_thickness: f32,
    /// Divider line color.
    pub divider_color: Color,
    /// Column header text color.
    pub header_color: Color,
    /// Fraction of a column's width the shared header font may occupy.
    pub header_fill: f32,
    /// Fraction of the smaller cell dimension a note may occupy.
    pub note_fill: f32,
    /// Sticky note styling.
    pub note: NoteStyle,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            divider_thickness: 0.005,
            divider_color: [0.2, 0.2, 0.2, 1.0],
            header_color: [0.1, 0.1, 0.1, 1.0],
            header_fill: 0.8,
            note_fill: 0.9,
            note: NoteStyle::default(),
        }
    }
}

/// Styling and fixed dimensions of the board composite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStyle {
    /// Board width, in world units.
    pub width: f32,
    /// Board height, in world units.
    pub height: f32,
    /// Margin between the board's top edge and the title.
    pub title_margin: f32,
    /// Per-character size of the title label.
    pub title_size_per_char: f32,
    /// Title text color.
    pub title_color: Color,
    /// Background panel color.
    pub background_color: Color,
    /// Background panel opacity.
    pub background_opacity: f32,
    /// Plane visualization mesh color.
    pub plane_color: Color,
    /// Plane visualization mesh opacity; starts invisible.
    pub plane_opacity: f32,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 0.45,
            title_margin: 0.02,
            title_size_per_char: 0.03,
            title_color: [0.1, 0.1, 0.1, 1.0],
            background_color: [1.0, 1.0, 1.0, 1.0],
            background_opacity: 0.9,
            plane_color: [0.4, 0.6, 1.0, 0.5],
            plane_opacity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_style_defaults() {
        let style = TableStyle::default();
        assert_eq!(style.divider_thickness, 0.005);
        assert_eq!(style.header_fill, 0.8);
        assert_eq!(style.note_fill, 0.9);
        assert_eq!(style.note.text_fill, 0.2);
    }

    #[test]
    fn test_board_style_serde_roundtrip() {
        let style = BoardStyle {
            width: 1.2,
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        let back: BoardStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, 1.2);
        assert_eq!(back.background_opacity, style.background_opacity);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style: TableStyle = serde_json::from_str(r#"{"note_fill": 0.5}"#).unwrap();
        assert_eq!(style.note_fill, 0.5);
        assert_eq!(style.divider_thickness, 0.005);
    }
}
