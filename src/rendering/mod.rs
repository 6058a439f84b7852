//! Rendering module - board frames as plain data
//!
//! Nothing in here touches egui or the ECS. [`frame::compose_frame`] turns a
//! position, the interaction state and the view into an ordered list of
//! [`frame::DrawCommand`]s; the painter in [`crate::ui::board_ui`] replays them.
//!
//! # Architecture
//!
//! - `board` - Coordinate mapping, palettes, squares and labels
//! - `effects` - Last move, check, drag source and legal-move hints
//! - `pieces` - Glyph selection and piece placement
//! - `overlays` - Status line and promotion overlay
//! - `frame` - Layer ordering and the [`frame::Frame`] type

pub mod board;
pub mod effects;
pub mod frame;
pub mod overlays;
pub mod pieces;

pub use frame::*;
