//! Move hints visualization
//!
//! One indicator per cached legal target of the dragged piece: a small dot for
//! a quiet move, a ring for a capture (en passant included).

use crate::game::interaction::LegalTargets;
use crate::rendering::board::coordinates::{square_to_cell, BoardGeometry, Orientation};
use crate::rendering::board::BoardPalette;
use crate::rendering::frame::{DrawCommand, FrameItem, Layer};

const RING_INSET: f32 = 8.0;
const RING_WIDTH: f32 = 6.0;

pub fn move_hint_items(
    targets: &LegalTargets,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
    orientation: Orientation,
) -> Vec<FrameItem> {
    targets
        .iter()
        .map(|(&target, &is_capture)| {
            let center = geometry.cell_center(square_to_cell(target, orientation));
            let command = if is_capture {
                DrawCommand::Ring {
                    center,
                    radius: geometry.square_size / 2.0 - RING_INSET,
                    width: RING_WIDTH,
                    color: palette.hint_ring,
                }
            } else {
                DrawCommand::Circle {
                    center,
                    radius: geometry.square_size / 10.0,
                    color: palette.hint_dot,
                }
            };
            FrameItem::new(Layer::Hints, command)
        })
        .collect()
}
