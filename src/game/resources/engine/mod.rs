//! Chess engine resource
//!
//! Wraps the rules engine behind the [`crate::game::rules::RulesEngine`] trait.

pub mod engine;

// Re-export all public items
pub use engine::*;
