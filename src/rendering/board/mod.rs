//! Board rendering module
//!
//! Coordinate mapping, palettes, and the board layer of a frame.

pub mod board;
pub mod board_theme;
pub mod coordinates;

// Re-export all public items
pub use board::*;
pub use board_theme::BoardPalette;
pub use coordinates::{BoardGeometry, DisplayCell, Orientation};
