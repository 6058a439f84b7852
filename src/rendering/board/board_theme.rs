//! Board palettes
//!
//! The selected [`BoardTheme`] only decides the two square colours; every
//! other colour (frame, highlights, hints, overlay) is shared by all themes.

use bevy::color::Color;

use crate::core::BoardTheme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPalette {
    pub background: Color,
    pub border: Color,
    pub light: Color,
    pub dark: Color,
    /// Translucent fill over the square a piece was picked up from
    pub drag_source: Color,
    pub last_move: Color,
    pub check: Color,
    pub hint_dot: Color,
    pub hint_ring: Color,
    pub label: Color,
    pub glyph: Color,
    pub glyph_shadow: Color,
    pub scrim: Color,
    pub panel: Color,
    pub choice_box: Color,
    pub title: Color,
}

impl BoardPalette {
    pub fn for_theme(theme: BoardTheme) -> Self {
        let (light, dark) = theme.colors();
        Self {
            background: Color::srgb_u8(24, 24, 28),
            border: Color::srgb_u8(70, 70, 80),
            light,
            dark,
            drag_source: Color::srgba_u8(246, 246, 105, 80),
            last_move: Color::srgba_u8(255, 244, 180, 90),
            check: Color::srgba_u8(255, 120, 120, 110),
            hint_dot: Color::srgb_u8(40, 40, 40),
            hint_ring: Color::srgb_u8(20, 20, 20),
            label: Color::srgb_u8(230, 230, 230),
            glyph: Color::WHITE,
            glyph_shadow: Color::BLACK,
            scrim: Color::srgba_u8(10, 10, 10, 170),
            panel: Color::srgb_u8(230, 230, 230),
            choice_box: Color::srgb_u8(245, 245, 245),
            title: Color::srgb_u8(20, 20, 20),
        }
    }

    pub fn square(&self, light: bool) -> Color {
        if light {
            self.light
        } else {
            self.dark
        }
    }
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self::for_theme(BoardTheme::default())
    }
}
