//! Check highlight on the king of the side to move

use crate::game::types::Square;
use crate::rendering::board::coordinates::{BoardGeometry, Orientation};
use crate::rendering::board::BoardPalette;
use crate::rendering::effects::last_move::tint;
use crate::rendering::frame::{FrameItem, Layer};

pub fn check_items(
    king: Square,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
    orientation: Orientation,
) -> Vec<FrameItem> {
    vec![tint(Layer::Check, king, geometry, orientation, palette.check)]
}
