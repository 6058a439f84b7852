//! Fonts used by the board painter
//!
//! Labels use egui's proportional family. Piece glyphs use a dedicated
//! family that holds the discovered chess font, with egui's own fonts behind
//! it so letter glyphs still render when no chess font was found.

use std::sync::Arc;

use bevy::prelude::Resource;
use bevy_egui::egui;

use crate::assets::GlyphFont;
use crate::rendering::frame::FontRole;
use crate::rendering::pieces::GlyphSet;

pub const GLYPH_FAMILY: &str = "glyphs";

/// Progress of the glyph font installation
///
/// egui applies new font definitions at the start of the next pass, so the
/// glyph family may only be used one pass after it was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontState {
    #[default]
    Pending,
    Requested,
    Active,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct BoardFonts {
    pub glyphs: GlyphSet,
    pub state: FontState,
}

impl BoardFonts {
    pub fn is_active(&self) -> bool {
        self.state == FontState::Active
    }

    /// Glyph table usable this pass
    pub fn glyphs(&self) -> GlyphSet {
        if self.is_active() {
            self.glyphs
        } else {
            GlyphSet::Letters
        }
    }

    pub fn font_id(&self, role: FontRole, size: f32) -> egui::FontId {
        match role {
            FontRole::Glyph if self.is_active() => {
                egui::FontId::new(size, egui::FontFamily::Name(GLYPH_FAMILY.into()))
            }
            _ => egui::FontId::proportional(size),
        }
    }
}

/// Font definitions with the glyph family registered
///
/// Returns the glyph table the definitions can render.
pub fn font_definitions(font: Option<&GlyphFont>) -> (egui::FontDefinitions, GlyphSet) {
    let mut fonts = egui::FontDefinitions::default();
    let mut glyph_chain = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    let glyphs = match font {
        Some(font) => {
            let name = font.name();
            fonts.font_data.insert(
                name.clone(),
                Arc::new(egui::FontData::from_owned(font.bytes.clone())),
            );
            glyph_chain.insert(0, name);
            GlyphSet::Unicode
        }
        None => GlyphSet::Letters,
    };

    fonts
        .families
        .insert(egui::FontFamily::Name(GLYPH_FAMILY.into()), glyph_chain);
    (fonts, glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_glyph_family_only_once_active() {
        let mut fonts = BoardFonts {
            glyphs: GlyphSet::Unicode,
            state: FontState::Requested,
        };
        assert_eq!(fonts.glyphs(), GlyphSet::Letters);
        assert_eq!(
            fonts.font_id(FontRole::Glyph, 20.0).family,
            egui::FontFamily::Proportional
        );

        fonts.state = FontState::Active;
        assert_eq!(fonts.glyphs(), GlyphSet::Unicode);
        assert_eq!(
            fonts.font_id(FontRole::Glyph, 20.0).family,
            egui::FontFamily::Name(GLYPH_FAMILY.into())
        );
    }

    #[test]
    fn test_without_font_letters_are_used() {
        let (fonts, glyphs) = font_definitions(None);
        assert_eq!(glyphs, GlyphSet::Letters);
        assert!(fonts
            .families
            .contains_key(&egui::FontFamily::Name(GLYPH_FAMILY.into())));
    }

    #[test]
    fn test_font_goes_first_in_glyph_family() {
        let font = GlyphFont {
            path: PathBuf::from("/fonts/DejaVuSans.ttf"),
            bytes: vec![0, 1, 0, 0],
        };
        let (fonts, glyphs) = font_definitions(Some(&font));

        assert_eq!(glyphs, GlyphSet::Unicode);
        let family = &fonts.families[&egui::FontFamily::Name(GLYPH_FAMILY.into())];
        assert_eq!(family[0], "DejaVuSans");
        assert!(family.len() > 1, "egui fonts stay as fallback");
        assert!(fonts.font_data.contains_key("DejaVuSans"));
    }
}
