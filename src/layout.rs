//! Centerline-symmetric grid placement.
//!
//! The board's table divides a `width x height` rectangle into `columns x
//! rows` cells. Cell centers are placed symmetrically about the rectangle's
//! center axes: for an odd count the middle cell sits exactly on the axis,
//! for an even count cells pair off mirrored around it. Row 0 is the topmost
//! visual row, consistent with reading order.
//!
//! Column width and row height are always recomputed from the grid's
//! dimensions, never stored.

use crate::error::LayoutError;

/// Cell geometry for a grid filling a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Total grid width.
    pub width: f32,
    /// Total grid height.
    pub height: f32,
    /// Number of columns, >= 1.
    pub columns: usize,
    /// Number of rows, >= 1.
    pub rows: usize,
}

impl GridLayout {
    /// Create a grid, validating dimensions and counts.
    pub fn new(width: f32, height: f32, columns: usize, rows: usize) -> Result<Self, LayoutError> {
        if width <= 0.0 {
            return Err(LayoutError::InvalidDimension(width));
        }
        if height <= 0.0 {
            return Err(LayoutError::InvalidDimension(height));
        }
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        if rows == 0 {
            return Err(LayoutError::NoRows);
        }
        Ok(Self {
            width,
            height,
            columns,
            rows,
        })
    }

    /// Width of one column.
    pub fn column_width(&self) -> f32 {
        self.width / self.columns as f32
    }

    /// Height of one row.
    pub fn row_height(&self) -> f32 {
        self.height / self.rows as f32
    }

    /// X coordinate of a column's center, symmetric about 0.
    pub fn column_position(&self, column: usize) -> f32 {
        centered(column, self.columns, self.column_width())
    }

    /// Y coordinate of a row's center. Row 0 is the topmost row.
    pub fn row_position(&self, row: usize) -> f32 {
        // The symmetric formula counts bottom-up; invert so row 0 reads from
        // the top.
        centered(self.rows - 1 - row, self.rows, self.row_height())
    }

    /// Whether `(column, row)` is a valid cell.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    /// Center of a cell, bounds-checked.
    pub fn cell_center(&self, column: usize, row: usize) -> Result<(f32, f32), LayoutError> {
        if !self.contains(column, row) {
            return Err(LayoutError::CellOutOfRange {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok((self.column_position(column), self.row_position(row)))
    }
}

/// Place the `index`-th of `count` items symmetrically about 0 with spacing
/// `step`. The middle index of an odd count lands exactly on 0.
fn centered(index: usize, count: usize, step: f32) -> f32 {
    let center = (count as f32 - 1.0) / 2.0;
    (index as f32 - center) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_three_columns_unit_width() {
        let grid = GridLayout::new(1.0, 1.0, 3, 6).unwrap();
        assert_eq!(grid.column_position(1), 0.0);
        assert!((grid.column_position(0) + 1.0 / 3.0).abs() < EPS);
        assert!((grid.column_position(2) - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_column_positions_symmetric() {
        for n in 1..8 {
            let grid = GridLayout::new(2.0, 1.0, n, 4).unwrap();
            for i in 0..n {
                let mirror = grid.column_position(i) + grid.column_position(n - 1 - i);
                assert!(mirror.abs() < EPS, "n={n} i={i} mirror={mirror}");
            }
        }
    }

    #[test]
    fn test_row_zero_is_topmost() {
        let grid = GridLayout::new(1.0, 1.0, 3, 6).unwrap();
        let top = grid.row_position(0);
        let bottom = grid.row_position(5);
        assert!(top > bottom);
        for r in 1..6 {
            assert!(grid.row_position(r) < grid.row_position(r - 1));
        }
    }

    #[test]
    fn test_even_row_count_has_no_center_row() {
        let grid = GridLayout::new(1.0, 1.0, 3, 6).unwrap();
        for r in 0..6 {
            assert!(grid.row_position(r).abs() > EPS);
        }
    }

    #[test]
    fn test_cell_sizes_tile_the_rectangle() {
        let grid = GridLayout::new(1.0, 1.0, 3, 6).unwrap();
        assert!((grid.column_width() * 3.0 - 1.0).abs() < EPS);
        assert!((grid.row_height() * 6.0 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_single_column_sits_at_zero() {
        let grid = GridLayout::new(1.0, 1.0, 1, 1).unwrap();
        assert_eq!(grid.column_position(0), 0.0);
        assert_eq!(grid.row_position(0), 0.0);
    }

    #[test]
    fn test_cell_center_rejects_out_of_range() {
        let grid = GridLayout::new(1.0, 1.0, 3, 6).unwrap();
        assert!(grid.cell_center(2, 5).is_ok());
        assert_eq!(
            grid.cell_center(3, 0),
            Err(LayoutError::CellOutOfRange {
                column: 3,
                row: 0,
                columns: 3,
                rows: 6,
            })
        );
        assert!(grid.cell_center(0, 6).is_err());
    }

    #[test]
    fn test_invalid_grid_rejected() {
        assert_eq!(
            GridLayout::new(0.0, 1.0, 3, 6),
            Err(LayoutError::InvalidDimension(0.0))
        );
        assert_eq!(GridLayout::new(1.0, 1.0, 0, 6), Err(LayoutError::NoColumns));
        assert_eq!(GridLayout::new(1.0, 1.0, 3, 0), Err(LayoutError::NoRows));
    }
}
