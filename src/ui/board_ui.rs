//! Board painter
//!
//! Rasterises a composed [`Frame`] with egui's painter on the background
//! layer of the primary context, in window logical pixels.
//!
//! Both systems run in `EguiPrimaryContextPass` and return [`FrameResult`];
//! a missing egui context ends the app through the frame error boundary.

use bevy::math::{Rect, Vec2};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::{discover_glyph_font, FontOverride};
use crate::core::{FrameError, FrameResult, GameSettings};
use crate::game::interaction::BoardInteraction;
use crate::game::resources::ChessEngine;
use crate::rendering::frame::{compose_frame, DrawCommand, Frame, FrameStyle};
use crate::ui::styles::{font_definitions, to_color32, BoardFonts, FontState};

fn pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_max(pos(r.min), pos(r.max))
}

fn egui_context(contexts: &mut EguiContexts) -> Result<egui::Context, FrameError> {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.clone())
        .map_err(|e| FrameError::EguiContext(format!("{e:?}")))
}

/// Look up the glyph font once and hand it to egui
pub fn install_fonts_system(
    mut contexts: EguiContexts,
    font_override: Res<FontOverride>,
    mut fonts: ResMut<BoardFonts>,
) -> FrameResult {
    match fonts.state {
        FontState::Active => return Ok(()),
        FontState::Requested => {
            fonts.state = FontState::Active;
            return Ok(());
        }
        FontState::Pending => {}
    }

    let ctx = egui_context(&mut contexts)?;
    let font = match discover_glyph_font(font_override.0.as_deref()) {
        Ok(font) => {
            info!("[FONTS] Piece glyphs from {}", font.path.display());
            Some(font)
        }
        Err(e) => {
            warn!("[FONTS] {:#}; falling back to letter glyphs", e);
            None
        }
    };

    let (definitions, glyphs) = font_definitions(font.as_ref());
    ctx.set_fonts(definitions);
    fonts.glyphs = glyphs;
    fonts.state = FontState::Requested;
    Ok(())
}

/// Compose this tick's frame and paint it
pub fn paint_board_system(
    mut contexts: EguiContexts,
    engine: Res<ChessEngine>,
    interaction: Res<BoardInteraction>,
    settings: Res<GameSettings>,
    fonts: Res<BoardFonts>,
) -> FrameResult {
    let ctx = egui_context(&mut contexts)?;
    let frame = compose_frame(
        &engine.rules().snapshot(),
        interaction.state(),
        &settings.view,
        &settings.geometry(),
        &FrameStyle::from_settings(&settings, fonts.glyphs()),
    );
    paint_frame(&ctx.layer_painter(egui::LayerId::background()), &frame, &fonts);
    Ok(())
}

pub fn paint_frame(painter: &egui::Painter, frame: &Frame, fonts: &BoardFonts) {
    painter.rect_filled(painter.clip_rect(), 0.0, to_color32(frame.background));
    for item in &frame.items {
        paint_command(painter, &item.command, fonts);
    }
}

fn paint_command(painter: &egui::Painter, command: &DrawCommand, fonts: &BoardFonts) {
    match command {
        DrawCommand::Fill {
            rect: r,
            radius,
            color,
        } => {
            painter.rect_filled(rect(*r), *radius, to_color32(*color));
        }
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            painter.circle_filled(pos(*center), *radius, to_color32(*color));
        }
        DrawCommand::Ring {
            center,
            radius,
            width,
            color,
        } => {
            painter.circle_stroke(
                pos(*center),
                *radius,
                egui::Stroke::new(*width, to_color32(*color)),
            );
        }
        DrawCommand::Text {
            text,
            center,
            size,
            color,
            font,
        } => {
            painter.text(
                pos(*center),
                egui::Align2::CENTER_CENTER,
                text,
                fonts.font_id(*font, *size),
                to_color32(*color),
            );
        }
    }
}
