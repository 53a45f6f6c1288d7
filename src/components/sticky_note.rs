//! Sticky note: a square panel with left-anchored wrapped text.

use super::TEXT_DEPTH;
use crate::config::NoteStyle;
use crate::error::LayoutError;
use crate::scene::{bounds, Geometry, Node};
use crate::text::TextMeasurer;
use glam::Vec3;

/// Create a sticky note of edge length `size`.
///
/// The text is scaled so its widest line spans
/// `longest_line_chars * size * text_fill`, vertically centered but anchored
/// to the note's left edge so lines read from the same margin.
pub fn sticky_note(
    text: &str,
    size: f32,
    style: &NoteStyle,
    measurer: &dyn TextMeasurer,
) -> Result<Node, LayoutError> {
    if size <= 0.0 {
        return Err(LayoutError::InvalidDimension(size));
    }
    let extents = measurer.measure(text);
    if extents.width <= 0.0 {
        return Err(LayoutError::EmptyText);
    }
    let longest_line_chars = text
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let ratio = (longest_line_chars as f32 * size * style.text_fill) / extents.width;

    let mut note = super::panel(size, size, style.color)?.with_name("note");

    let mut text_node = Node::new(Geometry::Text {
        text: text.to_string(),
        raw_width: extents.width,
        raw_height: extents.height,
        depth: TEXT_DEPTH,
        color: style.text_color,
    })
    .with_scale(Vec3::new(ratio, ratio, 1.0));
    bounds::center_vertical(&mut text_node);
    // Left edge of the panel, not horizontally centered.
    text_node.transform.position.x = -size / 2.0;

    note.add_child(text_node);
    Ok(note)
}
