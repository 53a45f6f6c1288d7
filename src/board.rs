//! Board composite anchored to a detected plane.

use crate::components::{label_sized, panel};
use crate::config::BoardStyle;
use crate::error::LayoutError;
use crate::scene::{bounds, Geometry, Node};
use crate::table::StickyNoteTable;
use crate::text::TextMeasurer;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// A real-world flat surface reported by the host AR framework.
#[derive(Debug, Clone)]
pub struct PlaneAnchor {
    /// Host-assigned anchor identifier.
    pub id: u64,
    /// Center of the plane in world space.
    pub center: Vec3,
    /// Extent along the plane's local X and Z axes.
    pub extent: (f32, f32),
    /// Boundary polygon in anchor-local coordinates. Empty means the host
    /// supplied only the extent rectangle.
    pub boundary: Vec<Vec3>,
}

impl PlaneAnchor {
    /// Describe an anchor by center and extent.
    pub fn new(id: u64, center: Vec3, extent: (f32, f32)) -> Self {
        Self {
            id,
            center,
            extent,
            boundary: Vec::new(),
        }
    }

    /// Builder: attach the host's boundary polygon.
    pub fn with_boundary(mut self, boundary: Vec<Vec3>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Boundary polygon, synthesized from the extent when the host supplied
    /// none.
    pub fn boundary_polygon(&self) -> Vec<Vec3> {
        if !self.boundary.is_empty() {
            return self.boundary.clone();
        }
        let (hx, hz) = (self.extent.0 / 2.0, self.extent.1 / 2.0);
        vec![
            Vec3::new(-hx, 0.0, -hz),
            Vec3::new(hx, 0.0, -hz),
            Vec3::new(hx, 0.0, hz),
            Vec3::new(-hx, 0.0, hz),
        ]
    }
}

/// The top-level visual composite: plane mesh, background panel, title and
/// table, anchored at a detected plane's center.
///
/// Built once per detected plane; dropping the board drops the whole owned
/// subtree, mirroring the host removing the anchor.
#[derive(Debug, Clone)]
pub struct Board {
    anchor_id: u64,
    title: String,
    style: BoardStyle,
    table: StickyNoteTable,
    root: Node,
}

impl Board {
    /// Build a board with the default style.
    pub fn build(
        anchor: &PlaneAnchor,
        title: impl Into<String>,
        table: StickyNoteTable,
        measurer: &dyn TextMeasurer,
    ) -> Result<Self, LayoutError> {
        Self::build_with_style(anchor, title, table, BoardStyle::default(), measurer)
    }

    /// Build a board with an explicit style.
    pub fn build_with_style(
        anchor: &PlaneAnchor,
        title: impl Into<String>,
        table: StickyNoteTable,
        style: BoardStyle,
        measurer: &dyn TextMeasurer,
    ) -> Result<Self, LayoutError> {
        let title = title.into();
        let root = assemble(anchor, &title, &table, &style, measurer)?;
        tracing::info!(
            anchor = anchor.id,
            title = %title,
            nodes = root.subtree_len(),
            "built board"
        );
        Ok(Self {
            anchor_id: anchor.id,
            title,
            style,
            table,
            root,
        })
    }

    /// Build the demo board: ToDo/Ongoing/Done columns with sample notes.
    pub fn sample(anchor: &PlaneAnchor, measurer: &dyn TextMeasurer) -> Result<Self, LayoutError> {
        let style = BoardStyle::default();
        let table_width = style.width * 0.9;
        let table_height = style.height * 0.7;
        let mut table = StickyNoteTable::new(
            table_width,
            table_height,
            vec!["ToDo".into(), "Ongoing".into(), "Done".into()],
        )?;
        table.add_note("企画書を書く", 0, 1)?;
        table.add_note("バグ修正\n#1234", 1, 1)?;
        table.add_note("code\nreview", 1, 2)?;
        table.add_note("リリース準備", 2, 1)?;
        Self::build_with_style(anchor, "かんばん", table, style, measurer)
    }

    /// Rebuild the subtree against an updated anchor.
    pub fn rebuild(
        &mut self,
        anchor: &PlaneAnchor,
        measurer: &dyn TextMeasurer,
    ) -> Result<(), LayoutError> {
        self.root = assemble(anchor, &self.title, &self.table, &self.style, measurer)?;
        self.anchor_id = anchor.id;
        Ok(())
    }

    /// Anchor this board is attached to.
    pub fn anchor_id(&self) -> u64 {
        self.anchor_id
    }

    /// Board title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The table housed by this board.
    pub fn table(&self) -> &StickyNoteTable {
        &self.table
    }

    /// Root of the owned scene subtree.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Assemble the board subtree: plane mesh, then the flat-lying background
/// panel carrying the title and the table.
fn assemble(
    anchor: &PlaneAnchor,
    title: &str,
    table: &StickyNoteTable,
    style: &BoardStyle,
    measurer: &dyn TextMeasurer,
) -> Result<Node, LayoutError> {
    let mut root = Node::group().with_name("board").at(anchor.center);

    // Plane extent visualization, invisible until the host fades it in.
    let mesh = Node::new(Geometry::PolygonMesh {
        vertices: anchor.boundary_polygon(),
        color: style.plane_color,
    })
    .with_name("plane-mesh")
    .with_opacity(style.plane_opacity);
    root.add_child(mesh);

    // Background panel, rotated to lie flat on the plane.
    let mut background = panel(style.width, style.height, style.background_color)?
        .with_name("background")
        .with_rotation(Quat::from_rotation_x(-FRAC_PI_2))
        .with_opacity(style.background_opacity);

    // Title near the top margin.
    let title_label = label_sized(title, style.title_size_per_char, style.title_color, measurer)?;
    let title_height = bounds::height(&title_label);
    let mut title_cell = Node::group().with_name("title").at(Vec3::new(
        0.0,
        style.height / 2.0 - style.title_margin - title_height / 2.0,
        0.0,
    ));
    title_cell.add_child(title_label);
    background.add_child(title_cell);

    // Table below the title, separated by twice the title margin plus the
    // title's own height.
    let table_top = style.height / 2.0 - (2.0 * style.title_margin + title_height);
    let table_height = table.grid().height;
    let table_node = table
        .build(measurer)?
        .at(Vec3::new(0.0, table_top - table_height / 2.0, 0.0));
    background.add_child(table_node);

    root.add_child(background);
    Ok(root)
}
