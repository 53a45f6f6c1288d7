//! Board building blocks: panels, fitted labels, sticky notes.

pub mod label;
pub mod panel;
pub mod sticky_note;

pub use label::{label, label_sized};
pub use panel::panel;
pub use sticky_note::sticky_note;

/// Extrusion depth of text geometry, preserved under X/Y fitting.
pub const TEXT_DEPTH: f32 = 0.01;
