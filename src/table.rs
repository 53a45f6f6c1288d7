//! Sticky-note table: column headers, dividers and cell-placed notes.

use crate::components::{label_sized, panel, sticky_note};
use crate::config::TableStyle;
use crate::error::LayoutError;
use crate::layout::GridLayout;
use crate::scene::Node;
use crate::text::TextMeasurer;
use glam::Vec3;

/// Default number of rows in a table.
pub const DEFAULT_ROWS: usize = 6;

/// A note placed at a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Note text; may contain newlines.
    pub text: String,
    /// Target column, 0-based.
    pub column: usize,
    /// Target row, 0-based from the top.
    pub row: usize,
}

/// Grid of columns x rows housing sticky notes.
///
/// Headers occupy the top row; dividers separate columns from each other and
/// the header row from the note area. Notes land at integer cell coordinates.
#[derive(Debug, Clone)]
pub struct StickyNoteTable {
    width: f32,
    height: f32,
    columns: Vec<String>,
    rows: usize,
    style: TableStyle,
    notes: Vec<Note>,
}

impl StickyNoteTable {
    /// Create a table with the default row count.
    ///
    /// Column names must be non-empty: the shared header scale is derived
    /// from the longest name, and an empty name could not be fitted.
    pub fn new(width: f32, height: f32, columns: Vec<String>) -> Result<Self, LayoutError> {
        // Validates dimensions and the column count.
        GridLayout::new(width, height, columns.len(), DEFAULT_ROWS)?;
        if columns.iter().any(|name| name.is_empty()) {
            return Err(LayoutError::EmptyText);
        }
        Ok(Self {
            width,
            height,
            columns,
            rows: DEFAULT_ROWS,
            style: TableStyle::default(),
            notes: Vec::new(),
        })
    }

    /// Builder: set the row count.
    pub fn with_rows(mut self, rows: usize) -> Result<Self, LayoutError> {
        if rows == 0 {
            return Err(LayoutError::NoRows);
        }
        self.rows = rows;
        Ok(self)
    }

    /// Builder: set the style.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Cell geometry of this table.
    pub fn grid(&self) -> GridLayout {
        GridLayout {
            width: self.width,
            height: self.height,
            columns: self.columns.len(),
            rows: self.rows,
        }
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Placed notes, in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Edge length of a sticky note: fits a cell with the style's margin.
    pub fn note_size(&self) -> f32 {
        let grid = self.grid();
        self.style.note_fill * grid.column_width().min(grid.row_height())
    }

    /// Per-character header size shared by all columns, sized so the longest
    /// column name fits its column.
    pub fn header_size_per_char(&self) -> f32 {
        let longest = self
            .columns
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(1);
        (self.grid().column_width() / longest as f32) * self.style.header_fill
    }

    /// Place a note at `(column, row)`.
    ///
    /// Out-of-range cells are rejected; a silently mispositioned note is a
    /// bug, not a feature. Rows below the header (row >= 1) are the usual
    /// target, but any valid cell is accepted.
    pub fn add_note(
        &mut self,
        text: impl Into<String>,
        column: usize,
        row: usize,
    ) -> Result<(), LayoutError> {
        let text = text.into();
        if text.is_empty() {
            return Err(LayoutError::EmptyText);
        }
        let grid = self.grid();
        if !grid.contains(column, row) {
            return Err(LayoutError::CellOutOfRange {
                column,
                row,
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        self.notes.push(Note { text, column, row });
        Ok(())
    }

    /// Build the table subtree: headers, dividers, then notes.
    pub fn build(&self, measurer: &dyn TextMeasurer) -> Result<Node, LayoutError> {
        let grid = self.grid();
        let column_width = grid.column_width();
        let row_height = grid.row_height();
        let size_per_char = self.header_size_per_char();

        let mut root = Node::group().with_name("table");

        for (i, name) in self.columns.iter().enumerate() {
            let mut cell = Node::group()
                .with_name(format!("header:{name}"))
                .at(Vec3::new(grid.column_position(i), grid.row_position(0), 0.0));
            cell.add_child(label_sized(name, size_per_char, self.style.header_color, measurer)?);
            root.add_child(cell);

            // Vertical divider between this column and the next.
            if i + 1 < self.columns.len() {
                let divider = panel(
                    self.style.divider_thickness,
                    self.height,
                    self.style.divider_color,
                )?
                .at(Vec3::new(grid.column_position(i) + column_width / 2.0, 0.0, 0.0));
                root.add_child(divider);
            }
        }

        // Horizontal divider separating the header row from the note area.
        let header_divider = panel(self.width, self.style.divider_thickness, self.style.divider_color)?
            .at(Vec3::new(0.0, self.height / 2.0 - row_height, 0.0));
        root.add_child(header_divider);

        let note_size = self.note_size();
        for note in &self.notes {
            let (x, y) = grid.cell_center(note.column, note.row)?;
            let node = sticky_note(&note.text, note_size, &self.style.note, measurer)?
                .at(Vec3::new(x, y, 0.0));
            root.add_child(node);
        }

        tracing::debug!(
            columns = self.columns.len(),
            rows = self.rows,
            notes = self.notes.len(),
            "built table subtree"
        );
        Ok(root)
    }
}
