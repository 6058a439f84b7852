//! Game plugin - board interaction systems and resources
//!
//! Registers the rules engine, the interaction state machine, the
//! [`BoardInput`] message and the systems that connect them.
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`crate::core::CorePlugin`] - Provides [`crate::core::GameSettings`]
//! - Bevy's `InputPlugin` - Provides `ButtonInput` resources
//!
//! The painter lives in [`crate::ui::UIPlugin`] and only reads what this plugin
//! owns, so headless tests can run the game without it.

use bevy::prelude::*;

use super::events::BoardInput;
use super::interaction::BoardInteraction;
use super::resources::ChessEngine;
use super::system_sets::GameSystems;
use super::systems::*;

/// Game plugin for Big Chess
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChessEngine>()
            .init_resource::<BoardInteraction>()
            .add_message::<BoardInput>()
            .add_message::<CaptureScreenshot>();

        // Input → Execution → Effects
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Effects,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                collect_board_input.in_set(GameSystems::Input),
                dispatch_board_input.in_set(GameSystems::Execution),
                capture_screenshot_system.in_set(GameSystems::Effects),
            ),
        );
    }
}
