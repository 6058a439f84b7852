//! Board layer: frame, squares and coordinate labels

use crate::rendering::board::board_theme::BoardPalette;
use crate::rendering::board::coordinates::{
    file_labels, rank_labels, BoardGeometry, DisplayCell, Orientation,
};
use crate::rendering::frame::{DrawCommand, FontRole, FrameItem, Layer};

/// Rounded frame plus the 64 squares
///
/// Square colours depend on the display cell only, so flipping the board
/// keeps a1 dark and h1 light.
pub fn board_items(geometry: &BoardGeometry, palette: &BoardPalette) -> Vec<FrameItem> {
    let mut items = Vec::with_capacity(65);
    items.push(FrameItem::new(
        Layer::Board,
        DrawCommand::Fill {
            rect: geometry.frame_rect(),
            radius: geometry.frame_radius,
            color: palette.border,
        },
    ));
    items.extend(DisplayCell::all().map(|cell| {
        FrameItem::new(
            Layer::Board,
            DrawCommand::Fill {
                rect: geometry.cell_rect(cell),
                radius: geometry.square_radius,
                color: palette.square(cell.is_light()),
            },
        )
    }));
    items
}

/// Files along the bottom edge, ranks along the left edge
pub fn label_items(
    geometry: &BoardGeometry,
    palette: &BoardPalette,
    orientation: Orientation,
) -> Vec<FrameItem> {
    let label = |text: char, center| {
        FrameItem::new(
            Layer::Labels,
            DrawCommand::Text {
                text: text.to_string(),
                center,
                size: geometry.label_font_size(),
                color: palette.label,
                font: FontRole::Label,
            },
        )
    };

    let files = file_labels(orientation)
        .into_iter()
        .zip(0u8..)
        .map(|(text, col)| label(text, geometry.file_label_center(col)));
    let ranks = rank_labels(orientation)
        .into_iter()
        .zip(0u8..)
        .map(|(text, row)| label(text, geometry.rank_label_center(row)));
    files.chain(ranks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_has_frame_and_64_squares() {
        let items = board_items(&BoardGeometry::default(), &BoardPalette::default());
        assert_eq!(items.len(), 65);
        assert!(matches!(
            items[0].command,
            DrawCommand::Fill { radius, .. } if radius == 18.0
        ));
    }

    #[test]
    fn test_top_left_square_is_light() {
        let palette = BoardPalette::default();
        let items = board_items(&BoardGeometry::default(), &palette);
        match &items[1].command {
            DrawCommand::Fill { color, rect, .. } => {
                assert_eq!(*color, palette.light);
                assert_eq!(rect.min.x, 40.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flipped_labels_start_with_h() {
        let items = label_items(
            &BoardGeometry::default(),
            &BoardPalette::default(),
            Orientation::Flipped,
        );
        assert_eq!(items.len(), 16);
        match &items[0].command {
            DrawCommand::Text { text, .. } => assert_eq!(text, "h"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
