//! Layout error types.

use thiserror::Error;

/// Errors emitted while building board layout.
///
/// These cover caller-supplied layout parameters only and are always
/// recoverable. Host-framework misconfiguration (missing font file, broken
/// render device) surfaces as `anyhow::Error` at the integration seam
/// instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Text was empty or measured to zero width; scaling it to a target
    /// width would divide by zero.
    #[error("text is empty or has no measurable width")]
    EmptyText,

    /// A width, height or size that must be positive was not.
    #[error("dimension must be positive, got {0}")]
    InvalidDimension(f32),

    /// A table was constructed with no columns.
    #[error("table needs at least one column")]
    NoColumns,

    /// A table was constructed with a zero row count.
    #[error("table needs at least one row")]
    NoRows,

    /// A note targeted a cell outside the grid.
    #[error("cell ({column}, {row}) lies outside the {columns}x{rows} grid")]
    CellOutOfRange {
        /// Requested column index.
        column: usize,
        /// Requested row index.
        row: usize,
        /// Column count of the grid.
        columns: usize,
        /// Row count of the grid.
        rows: usize,
    },
}
