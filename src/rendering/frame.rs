//! Frame composition
//!
//! [`compose_frame`] turns the engine snapshot, the interaction state and the
//! view flags into an ordered list of primitive draw commands. It touches no
//! window and no GPU; the egui painter in [`crate::ui::board_ui`] rasterises
//! the result.
//!
//! Layers are emitted back to front:
//!
//! 1. board frame and squares
//! 2. last move, check
//! 3. file/rank labels
//! 4. drag source, move hints
//! 5. pieces, then the dragged piece at the pointer
//! 6. status line
//! 7. promotion overlay

#[cfg(test)]
mod tests;

use bevy::color::Color;
use bevy::math::{Rect, Vec2};

use crate::core::{BoardView, GameSettings};
use crate::game::interaction::InteractionState;
use crate::game::rules::BoardSnapshot;
use crate::rendering::board::board::{board_items, label_items};
use crate::rendering::board::board_theme::BoardPalette;
use crate::rendering::board::coordinates::BoardGeometry;
use crate::rendering::effects::{check_items, drag_source_items, last_move_items, move_hint_items};
use crate::rendering::pieces::{piece_items, GlyphSet};
use crate::rendering::overlays::{promotion_overlay_items, status_items};

/// Which font a text command needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Label,
    Glyph,
}

/// One primitive, in window pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
        font: FontRole,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Board,
    LastMove,
    Check,
    Labels,
    DragSource,
    Hints,
    Pieces,
    DraggedPiece,
    Status,
    Promotion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameItem {
    pub layer: Layer,
    pub command: DrawCommand,
}

impl FrameItem {
    pub fn new(layer: Layer, command: DrawCommand) -> Self {
        Self { layer, command }
    }
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub items: Vec<FrameItem>,
}

impl Frame {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.command)
    }
}

/// Rendering options that do not change while playing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub palette: BoardPalette,
    pub glyphs: GlyphSet,
    pub highlight_last_move: bool,
    pub glyph_shadow: bool,
}

impl FrameStyle {
    pub fn from_settings(settings: &GameSettings, glyphs: GlyphSet) -> Self {
        Self {
            palette: BoardPalette::for_theme(settings.board_theme),
            glyphs,
            highlight_last_move: settings.highlight_last_move,
            glyph_shadow: settings.glyph_shadow,
        }
    }
}

pub fn compose_frame(
    snapshot: &BoardSnapshot,
    state: &InteractionState,
    view: &BoardView,
    geometry: &BoardGeometry,
    style: &FrameStyle,
) -> Frame {
    let palette = &style.palette;
    let orientation = view.orientation;
    let mut items = board_items(geometry, palette);

    if style.highlight_last_move {
        if let Some(last) = snapshot.last_move {
            items.extend(last_move_items(last, geometry, palette, orientation));
        }
    }
    if let Some(king) = snapshot.check_square {
        items.extend(check_items(king, geometry, palette, orientation));
    }
    items.extend(label_items(geometry, palette, orientation));

    let drag = state.drag();
    if let Some(drag) = drag {
        items.extend(drag_source_items(drag.source, geometry, palette, orientation));
        if view.show_hints {
            items.extend(move_hint_items(
                &drag.legal_targets,
                geometry,
                palette,
                orientation,
            ));
        }
    }

    items.extend(piece_items(
        snapshot,
        drag.map(|d| (d.source, d.pointer)),
        geometry,
        style,
        orientation,
    ));

    items.extend(status_items(snapshot, geometry, palette));

    if state.pending_promotion().is_some() {
        items.extend(promotion_overlay_items(
            snapshot.side_to_move,
            geometry,
            style,
        ));
    }

    Frame {
        background: palette.background,
        items,
    }
}
