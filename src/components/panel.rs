//! Flat rectangle primitive.

use crate::error::LayoutError;
use crate::scene::{Color, Geometry, Node};

/// Create a flat rectangle of the given dimensions and fill color.
pub fn panel(width: f32, height: f32, color: Color) -> Result<Node, LayoutError> {
    if width <= 0.0 {
        return Err(LayoutError::InvalidDimension(width));
    }
    if height <= 0.0 {
        return Err(LayoutError::InvalidDimension(height));
    }
    Ok(Node::new(Geometry::Plane {
        width,
        height,
        color,
    }))
}
