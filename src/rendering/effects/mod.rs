//! Visual effects module
//!
//! Per-square overlays drawn between the board and the pieces: last move,
//! check, drag source and move hints.

pub mod check;
pub mod last_move;
pub mod move_hints;

// Re-export all public items
pub use check::*;
pub use last_move::{drag_source_items, last_move_items};
pub use move_hints::*;
