//! Styling helpers for the egui painter

pub mod colors;
pub mod typography;

pub use colors::*;
pub use typography::*;
