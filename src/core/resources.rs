//! Core resources shared by the whole application
//!
//! [`GameSettings`] is the persisted user configuration. [`BoardView`] holds
//! the two flags the keyboard can flip while playing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rendering::board::coordinates::{BoardGeometry, Orientation};

/// Smallest and largest accepted square size in logical pixels
pub const SQUARE_SIZE_RANGE: std::ops::RangeInclusive<f32> = 32.0..=160.0;

/// How the board is looked at, independent of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub orientation: Orientation,
    /// Draw dots and rings on the legal targets of a dragged piece
    pub show_hints: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            orientation: Orientation::Standard,
            show_hints: true,
        }
    }
}

/// User preferences, persisted as JSON
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub view: BoardView,

    /// Whether to highlight last move
    pub highlight_last_move: bool,

    /// Draw a drop shadow under every piece glyph
    pub glyph_shadow: bool,

    /// Board theme
    pub board_theme: BoardTheme,

    /// Side of one board square in logical pixels
    pub square_size: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            view: BoardView::default(),
            highlight_last_move: true,
            glyph_shadow: true,
            board_theme: BoardTheme::Classic,
            square_size: BoardGeometry::default().square_size,
        }
    }
}

impl GameSettings {
    /// Geometry for the configured square size, clamped to the accepted range
    pub fn geometry(&self) -> BoardGeometry {
        let size = if self.square_size.is_finite() {
            self.square_size
                .clamp(*SQUARE_SIZE_RANGE.start(), *SQUARE_SIZE_RANGE.end())
        } else {
            BoardGeometry::default().square_size
        };
        BoardGeometry::with_square_size(size)
    }
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardTheme {
    #[default]
    Classic,
    Modern,
    Wood,
    Marble,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_square_color, dark_square_color)
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Classic => (
                Color::srgb_u8(240, 217, 181), // Cream
                Color::srgb_u8(181, 136, 99),  // Brown
            ),
            BoardTheme::Modern => (
                Color::srgb(0.9, 0.9, 0.9), // Light gray
                Color::srgb(0.3, 0.3, 0.3), // Dark gray
            ),
            BoardTheme::Wood => (
                Color::srgb(0.85, 0.70, 0.55), // Light wood
                Color::srgb(0.55, 0.35, 0.20), // Dark wood
            ),
            BoardTheme::Marble => (
                Color::srgb(0.95, 0.95, 0.95), // White marble
                Color::srgb(0.42, 0.45, 0.50), // Grey vein
            ),
        }
    }
}
