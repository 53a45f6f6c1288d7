//! Text label fitted to a target width.

use super::TEXT_DEPTH;
use crate::error::LayoutError;
use crate::scene::{bounds, Color, Geometry, Node};
use crate::text::TextMeasurer;
use glam::Vec3;

/// Create a text label uniformly scaled so its width equals `target_width`,
/// centered on both axes.
///
/// The scale ratio is applied to X and Y only; extrusion depth along Z is
/// preserved. Empty or zero-width text is rejected rather than dividing by
/// zero.
pub fn label(
    text: &str,
    target_width: f32,
    color: Color,
    measurer: &dyn TextMeasurer,
) -> Result<Node, LayoutError> {
    let extents = measurer.measure(text);
    if extents.width <= 0.0 {
        return Err(LayoutError::EmptyText);
    }
    if target_width <= 0.0 {
        return Err(LayoutError::InvalidDimension(target_width));
    }
    let ratio = target_width / extents.width;

    let mut node = Node::new(Geometry::Text {
        text: text.to_string(),
        raw_width: extents.width,
        raw_height: extents.height,
        depth: TEXT_DEPTH,
        color,
    })
    .with_scale(Vec3::new(ratio, ratio, 1.0));
    bounds::center(&mut node);
    Ok(node)
}

/// Convenience form: the target width is `char_count * size_per_char`.
pub fn label_sized(
    text: &str,
    size_per_char: f32,
    color: Color,
    measurer: &dyn TextMeasurer,
) -> Result<Node, LayoutError> {
    let target_width = text.chars().count() as f32 * size_per_char;
    label(text, target_width, color, measurer)
}
