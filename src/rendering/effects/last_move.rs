//! Last move highlighting
//!
//! Tints the from and to squares of the most recent move.

use crate::game::types::Square;
use crate::rendering::board::coordinates::{square_to_cell, BoardGeometry, Orientation};
use crate::rendering::board::BoardPalette;
use crate::rendering::frame::{DrawCommand, FrameItem, Layer};

/// Translucent fill over one square
pub(crate) fn tint(
    layer: Layer,
    square: Square,
    geometry: &BoardGeometry,
    orientation: Orientation,
    color: bevy::color::Color,
) -> FrameItem {
    FrameItem::new(
        layer,
        DrawCommand::Fill {
            rect: geometry.cell_rect(square_to_cell(square, orientation)),
            radius: 0.0,
            color,
        },
    )
}

pub fn last_move_items(
    (from, to): (Square, Square),
    geometry: &BoardGeometry,
    palette: &BoardPalette,
    orientation: Orientation,
) -> Vec<FrameItem> {
    [from, to]
        .into_iter()
        .map(|square| tint(Layer::LastMove, square, geometry, orientation, palette.last_move))
        .collect()
}

/// Highlight under the piece currently being dragged
pub fn drag_source_items(
    source: Square,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
    orientation: Orientation,
) -> Vec<FrameItem> {
    vec![tint(
        Layer::DragSource,
        source,
        geometry,
        orientation,
        palette.drag_source,
    )]
}
