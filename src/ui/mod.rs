//! UI module - egui-based drawing
//!
//! The whole window is painted through `bevy_egui`:
//!
//! - **board_ui**: font installation and the frame painter
//! - **styles**: colour conversion and font families
//!
//! # Bevy Egui Integration
//!
//! Painting runs in `EguiPrimaryContextPass`, after every input of the tick
//! has been dispatched in `Update`.

pub mod board_ui;
pub mod styles;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::assets::FontOverride;
use crate::core::error_handling::report_frame_error;
use board_ui::{install_fonts_system, paint_board_system};
use styles::BoardFonts;

/// Paints the board every frame
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardFonts>()
            .init_resource::<FontOverride>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    install_fonts_system.pipe(report_frame_error),
                    paint_board_system.pipe(report_frame_error),
                )
                    .chain(),
            );
    }
}
