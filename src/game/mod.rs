//! Chess game logic module
//!
//! Pure logic sits apart from the ECS glue so it can be tested directly.
//!
//! # Module Organization
//!
//! - `types` - Squares, pieces and move commands shared by every layer
//! - `rules` - The [`rules::RulesEngine`] trait and its shakmaty adapter
//! - `interaction` - Drag and promotion state machine
//! - `events` - [`events::BoardInput`], the only input the state machine sees
//! - `resources` - The [`resources::ChessEngine`] resource
//! - `systems` - Input translation, dispatch and screenshots
//! - `plugin` - [`GamePlugin`], which registers all of the above

pub mod error;
pub mod events;
pub mod interaction;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
