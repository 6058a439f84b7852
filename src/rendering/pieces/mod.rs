//! Chess pieces rendering module
//!
//! Glyph tables and the piece layer of a frame.

pub mod pieces;

// Re-export all public items
pub use pieces::*;
