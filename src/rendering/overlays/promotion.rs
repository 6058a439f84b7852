//! Pawn promotion overlay
//!
//! A scrim over the whole window, a centred panel with a title and one box
//! per promotion piece. The layout depends on the geometry only, so the input
//! collector hit-tests clicks against the very rectangles that get drawn.

use bevy::math::{Rect, Vec2};

use crate::game::types::{Piece, PieceColor, PieceType};
use crate::rendering::board::coordinates::BoardGeometry;
use crate::rendering::frame::{DrawCommand, FontRole, FrameItem, FrameStyle, Layer};
use crate::rendering::pieces::glyph_items;

pub const PROMOTION_TITLE: &str = "Choose promotion: Q  R  B  N";

const PANEL_PADDING: f32 = 24.0;
const BOX_GAP: f32 = 16.0;
const TITLE_TOP: f32 = 10.0;
const BOXES_TOP: f32 = 36.0;
const PANEL_BOTTOM: f32 = 28.0;
const PANEL_RADIUS: f32 = 14.0;
const TITLE_SIZE: f32 = 18.0;
/// Glyphs in the boxes get a fixed 2px shadow regardless of settings
const BOX_SHADOW: Vec2 = Vec2::new(2.0, 2.0);

#[derive(Debug, Clone, PartialEq)]
pub struct PromotionLayout {
    pub scrim: Rect,
    pub panel: Rect,
    pub title_center: Vec2,
    /// Boxes in [`PieceType::PROMOTION_CHOICES`] order
    pub boxes: [(Rect, PieceType); 4],
}

impl PromotionLayout {
    pub fn new(geometry: &BoardGeometry) -> Self {
        let window = geometry.window_size();
        let size = geometry.square_size;
        let panel_size = Vec2::new(
            4.0 * size + 3.0 * BOX_GAP + 2.0 * PANEL_PADDING,
            size + BOXES_TOP + PANEL_BOTTOM,
        );
        let panel = Rect::from_center_size(window / 2.0, panel_size);

        let boxes = std::array::from_fn(|i| {
            let min = Vec2::new(
                panel.min.x + PANEL_PADDING + i as f32 * (size + BOX_GAP),
                panel.min.y + BOXES_TOP,
            );
            (
                Rect::from_corners(min, min + Vec2::splat(size)),
                PieceType::PROMOTION_CHOICES[i],
            )
        });

        Self {
            scrim: Rect::from_corners(Vec2::ZERO, window),
            panel,
            title_center: Vec2::new(panel.center().x, panel.min.y + TITLE_TOP + TITLE_SIZE / 2.0),
            boxes,
        }
    }

    /// Promotion piece whose box contains `pixel`
    pub fn choice_at(&self, pixel: Vec2) -> Option<PieceType> {
        self.boxes
            .iter()
            .find(|(rect, _)| rect.contains(pixel))
            .map(|&(_, kind)| kind)
    }
}

pub fn promotion_overlay_items(
    side_to_move: PieceColor,
    geometry: &BoardGeometry,
    style: &FrameStyle,
) -> Vec<FrameItem> {
    let layout = PromotionLayout::new(geometry);
    let palette = &style.palette;
    let fill = |rect, radius, color| {
        FrameItem::new(Layer::Promotion, DrawCommand::Fill { rect, radius, color })
    };

    let mut items = vec![
        fill(layout.scrim, 0.0, palette.scrim),
        fill(layout.panel, PANEL_RADIUS, palette.panel),
        FrameItem::new(
            Layer::Promotion,
            DrawCommand::Text {
                text: PROMOTION_TITLE.to_string(),
                center: layout.title_center,
                size: TITLE_SIZE,
                color: palette.title,
                font: FontRole::Label,
            },
        ),
    ];

    let box_style = FrameStyle {
        glyph_shadow: false,
        ..*style
    };
    for (rect, kind) in layout.boxes {
        items.push(fill(rect, geometry.square_radius, palette.choice_box));
        let piece = Piece::new(side_to_move, kind);
        let center = rect.center();
        let mut glyph = glyph_items(
            Layer::Promotion,
            piece,
            center,
            geometry.glyph_font_size(),
            &box_style,
        );
        // Shadow first so the glyph stays on top
        items.push(FrameItem::new(
            Layer::Promotion,
            DrawCommand::Text {
                text: box_style.glyphs.glyph(piece).to_string(),
                center: center + BOX_SHADOW,
                size: geometry.glyph_font_size(),
                color: palette.glyph_shadow,
                font: FontRole::Glyph,
            },
        ));
        items.append(&mut glyph);
    }
    items
}
