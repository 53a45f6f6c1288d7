//! Owning scene tree handed to the host renderer.
//!
//! The board is assembled as a tree of [`Node`]s. Each node owns its children
//! outright; there is no global node registry and no parent back-reference.
//! The host framework consumes the tree either directly or through
//! [`flatten`], which produces world-space draw items.

pub mod bounds;

use glam::{Affine3A, Quat, Vec3};

/// RGBA color, linear, 0..=1 per channel.
pub type Color = [f32; 4];

/// Transform relative to the parent node.
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Affine map from this node's local space into its parent's space.
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Geometry payload attached to a node.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Flat rectangle centered on the node origin.
    Plane {
        /// Extent along local X.
        width: f32,
        /// Extent along local Y.
        height: f32,
        /// Fill color.
        color: Color,
    },
    /// Extruded text. Extents are the raw (un-scaled) bounding box reported
    /// by the measurer; the bounding box starts at the node origin and grows
    /// toward +X/+Y.
    Text {
        /// Text content; may contain newlines.
        text: String,
        /// Raw width of the widest line.
        raw_width: f32,
        /// Raw height over all lines.
        raw_height: f32,
        /// Extrusion depth along local Z.
        depth: f32,
        /// Fill color.
        color: Color,
    },
    /// Polygon outlining a detected plane's extent, in the anchor's local
    /// X/Z plane.
    PolygonMesh {
        /// Boundary vertices.
        vertices: Vec<Vec3>,
        /// Fill color.
        color: Color,
    },
}

impl Geometry {
    /// Local bounding extents along X and Y, before the node's scale.
    pub fn extents(&self) -> (f32, f32) {
        match self {
            Geometry::Plane { width, height, .. } => (*width, *height),
            Geometry::Text {
                raw_width,
                raw_height,
                ..
            } => (*raw_width, *raw_height),
            Geometry::PolygonMesh { vertices, .. } => {
                let mut min = Vec3::splat(f32::MAX);
                let mut max = Vec3::splat(f32::MIN);
                for v in vertices {
                    min = min.min(*v);
                    max = max.max(*v);
                }
                if vertices.is_empty() {
                    (0.0, 0.0)
                } else {
                    (max.x - min.x, max.y - min.y)
                }
            }
        }
    }
}

/// A node in the board's scene subtree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Optional debug name.
    pub name: Option<String>,

    /// Transform relative to the parent.
    pub transform: Transform3D,

    /// Geometry drawn at this node, if any. Group nodes carry none.
    pub geometry: Option<Geometry>,

    /// Node opacity, multiplied down the tree.
    pub opacity: f32,

    /// Whether this node (and its subtree) is drawn.
    pub visible: bool,

    /// Child nodes, exclusively owned.
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: None,
            transform: Transform3D::default(),
            geometry: None,
            opacity: 1.0,
            visible: true,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Create a node carrying geometry.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            ..Default::default()
        }
    }

    /// Create an empty group node.
    pub fn group() -> Self {
        Self::default()
    }

    /// Builder: set the debug name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the local position.
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder: set the local scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    /// Builder: set the local rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Builder: set the opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Attach a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Local bounding extents of this node's geometry, before scale.
    /// Group nodes report zero; children are not included.
    pub fn local_extents(&self) -> (f32, f32) {
        self.geometry.as_ref().map_or((0.0, 0.0), Geometry::extents)
    }

    /// Total node count of this subtree, self included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// A world-space draw item produced by flattening a subtree.
#[derive(Debug, Clone)]
pub struct DrawItem<'a> {
    /// Composed local-to-world transform.
    pub world: Affine3A,
    /// Geometry to draw.
    pub geometry: &'a Geometry,
    /// Opacity multiplied along the path from the root.
    pub opacity: f32,
}

/// Flatten a subtree into world-space draw items, in depth-first order.
///
/// Invisible subtrees are skipped entirely; group nodes contribute only
/// their transform.
pub fn flatten(node: &Node) -> Vec<DrawItem<'_>> {
    let mut items = Vec::new();
    flatten_into(node, Affine3A::IDENTITY, 1.0, &mut items);
    items
}

fn flatten_into<'a>(
    node: &'a Node,
    parent: Affine3A,
    parent_opacity: f32,
    items: &mut Vec<DrawItem<'a>>,
) {
    if !node.visible {
        return;
    }
    let world = parent * node.transform.to_affine();
    let opacity = parent_opacity * node.opacity;
    if let Some(geometry) = &node.geometry {
        items.push(DrawItem {
            world,
            geometry,
            opacity,
        });
    }
    for child in &node.children {
        flatten_into(child, world, opacity, items);
    }
}
