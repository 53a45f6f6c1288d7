//! 3D sticky-note board layout
//!
//! This crate computes the scene-graph layout for a kanban-style sticky-note
//! board anchored to a real-world plane detected by a host AR framework. The
//! host owns plane detection, session management and the render pipeline; this
//! crate owns the deterministic geometry: a title label, a grid of column
//! headers, divider lines, and text-bearing sticky notes, all scaled to fit a
//! fixed-size board.
//!
//! # Features
//!
//! - **Owning scene tree**: every node owns its children; no global registry
//! - **Centerline-symmetric grid**: column/row placement mirrored about the
//!   board's center axes
//! - **Text fitting**: labels and note text uniformly scaled to a target width
//!   measured through a pluggable [`TextMeasurer`]
//! - **Anchor lifecycle**: boards created, rebuilt and dropped as the host
//!   reports plane anchors
//!
//! # Example
//!
//! ```rust
//! use stickyboard::{Board, MonospaceMeasurer, PlaneAnchor, StickyNoteTable};
//! use glam::Vec3;
//!
//! let anchor = PlaneAnchor::new(1, Vec3::ZERO, (1.0, 1.0));
//! let measurer = MonospaceMeasurer::default();
//!
//! let mut table = StickyNoteTable::new(
//!     0.5,
//!     0.35,
//!     vec!["ToDo".into(), "Ongoing".into(), "Done".into()],
//! )
//! .unwrap();
//! table.add_note("write docs", 0, 1).unwrap();
//!
//! let board = Board::build(&anchor, "Sprint 12", table, &measurer).unwrap();
//! assert!(board.root().children.len() >= 2);
//! ```

pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod manager;
pub mod scene;
pub mod table;
pub mod text;

// Re-export commonly used types
pub use board::{Board, PlaneAnchor};
pub use config::{BoardStyle, NoteStyle, TableStyle};
pub use error::LayoutError;
pub use layout::GridLayout;
pub use manager::BoardManager;
pub use scene::{bounds, flatten, Color, DrawItem, Geometry, Node, Transform3D};
pub use table::{Note, StickyNoteTable};
pub use text::{FontMeasurer, MonospaceMeasurer, TextExtents, TextMeasurer};

/// Version of the stickyboard crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
