//! Piece glyphs
//!
//! Pieces are drawn as text. With a chess-capable font loaded they are the
//! Unicode chess symbols (outlined for white, filled for black); otherwise a
//! single letter in the default font, tinted by colour.

use bevy::color::Color;
use bevy::math::Vec2;

use crate::game::rules::BoardSnapshot;
use crate::game::types::{Piece, PieceColor, PieceType, Square};
use crate::rendering::board::coordinates::{square_to_cell, BoardGeometry, Orientation};
use crate::rendering::frame::{DrawCommand, FontRole, FrameItem, FrameStyle, Layer};

/// Offset of the drop shadow behind each glyph
pub const SHADOW_OFFSET: Vec2 = Vec2::new(3.0, 3.0);

/// Which glyph table the loaded fonts support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    Unicode,
    #[default]
    Letters,
}

impl GlyphSet {
    pub fn glyph(self, piece: Piece) -> char {
        match self {
            GlyphSet::Unicode => unicode_glyph(piece),
            GlyphSet::Letters => piece.piece_type.letter(),
        }
    }

    /// Fill colour of a glyph
    ///
    /// Unicode glyphs already differ in shape, so they share one fill.
    pub fn fill(self, color: PieceColor, unicode_fill: Color) -> Color {
        match (self, color) {
            (GlyphSet::Unicode, _) => unicode_fill,
            (GlyphSet::Letters, PieceColor::White) => Color::srgb_u8(250, 250, 245),
            (GlyphSet::Letters, PieceColor::Black) => Color::srgb_u8(25, 25, 30),
        }
    }
}

fn unicode_glyph(piece: Piece) -> char {
    let (white, black) = match piece.piece_type {
        PieceType::King => ('♔', '♚'),
        PieceType::Queen => ('♕', '♛'),
        PieceType::Rook => ('♖', '♜'),
        PieceType::Bishop => ('♗', '♝'),
        PieceType::Knight => ('♘', '♞'),
        PieceType::Pawn => ('♙', '♟'),
    };
    match piece.color {
        PieceColor::White => white,
        PieceColor::Black => black,
    }
}

/// Glyph (and its shadow) centred on `center`
pub fn glyph_items(
    layer: Layer,
    piece: Piece,
    center: Vec2,
    size: f32,
    style: &FrameStyle,
) -> Vec<FrameItem> {
    let text = style.glyphs.glyph(piece).to_string();
    let mut items = Vec::with_capacity(2);
    if style.glyph_shadow {
        items.push(FrameItem::new(
            layer,
            DrawCommand::Text {
                text: text.clone(),
                center: center + SHADOW_OFFSET,
                size,
                color: style.palette.glyph_shadow,
                font: FontRole::Glyph,
            },
        ));
    }
    items.push(FrameItem::new(
        layer,
        DrawCommand::Text {
            text,
            center,
            size,
            color: style.glyphs.fill(piece.color, style.palette.glyph),
            font: FontRole::Glyph,
        },
    ));
    items
}

/// Every piece on its square, the dragged one last and at the pointer
pub fn piece_items(
    snapshot: &BoardSnapshot,
    dragged: Option<(Square, Vec2)>,
    geometry: &BoardGeometry,
    style: &FrameStyle,
    orientation: Orientation,
) -> Vec<FrameItem> {
    let size = geometry.glyph_font_size();
    let skip = dragged.map(|(source, _)| source);

    let mut items: Vec<FrameItem> = snapshot
        .occupied()
        .filter(|(square, _)| Some(*square) != skip)
        .flat_map(|(square, piece)| {
            let center = geometry.cell_center(square_to_cell(square, orientation));
            glyph_items(Layer::Pieces, piece, center, size, style)
        })
        .collect();

    if let Some((source, pointer)) = dragged {
        if let Some(piece) = snapshot.piece_at(source) {
            items.extend(glyph_items(Layer::DraggedPiece, piece, pointer, size, style));
        }
    }
    items
}
