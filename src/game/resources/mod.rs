//! Chess game resources - Global game state
//!
//! - [`ChessEngine`] - the position and its history, behind the rules trait
//! - [`BoardInteraction`](crate::game::interaction::BoardInteraction) - the
//!   interaction state machine, defined with its transitions
//!
//! View flags live in [`crate::core::GameSettings`] so they persist.

pub mod engine;

// Re-export all resources for convenience
pub use engine::*;
