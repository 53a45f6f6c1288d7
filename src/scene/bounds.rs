//! Bounding and centering helpers.
//!
//! Extents are the node's local bounding box multiplied by its current scale.
//! The centering helpers re-position a node so that its bounding box is
//! centered on the parent origin; they set the position outright, so they are
//! idempotent as long as the bounding box does not change between calls.

use super::Node;

/// Scaled width of the node's own geometry.
pub fn width(node: &Node) -> f32 {
    node.local_extents().0 * node.transform.scale.x
}

/// Scaled height of the node's own geometry.
pub fn height(node: &Node) -> f32 {
    node.local_extents().1 * node.transform.scale.y
}

/// Align the node's horizontal center with the parent origin.
pub fn center_horizontal(node: &mut Node) {
    node.transform.position.x = -width(node) / 2.0;
}

/// Align the node's vertical center with the parent origin.
pub fn center_vertical(node: &mut Node) {
    node.transform.position.y = -height(node) / 2.0;
}

/// Center the node on both axes.
pub fn center(node: &mut Node) {
    center_horizontal(node);
    center_vertical(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Geometry;
    use glam::Vec3;

    fn text_node(raw_width: f32, raw_height: f32) -> Node {
        Node::new(Geometry::Text {
            text: "x".into(),
            raw_width,
            raw_height,
            depth: 0.01,
            color: [1.0; 4],
        })
    }

    #[test]
    fn test_width_applies_scale() {
        let node = text_node(4.0, 2.0).with_scale(Vec3::new(0.5, 0.5, 1.0));
        assert_eq!(width(&node), 2.0);
        assert_eq!(height(&node), 1.0);
    }

    #[test]
    fn test_center_offsets_by_half_extent() {
        let mut node = text_node(4.0, 2.0);
        center(&mut node);
        assert_eq!(node.transform.position.x, -2.0);
        assert_eq!(node.transform.position.y, -1.0);
    }

    #[test]
    fn test_center_is_idempotent_for_fixed_bounds() {
        let mut node = text_node(4.0, 2.0);
        center(&mut node);
        let first = node.transform.position;
        center(&mut node);
        assert_eq!(node.transform.position, first);
    }
}
