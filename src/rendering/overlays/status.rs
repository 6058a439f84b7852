//! Status line under the board
//!
//! One caption: whose move it is, whether they are in check, or how the game
//! ended as reported by the rules engine.

use crate::game::rules::{BoardSnapshot, GameStatus};
use crate::rendering::board::coordinates::BoardGeometry;
use crate::rendering::board::BoardPalette;
use crate::rendering::frame::{DrawCommand, FontRole, FrameItem, Layer};

pub fn status_text(snapshot: &BoardSnapshot) -> String {
    match snapshot.status {
        GameStatus::Checkmate { winner } => format!("Checkmate - {} wins", winner.name()),
        GameStatus::Stalemate => "Stalemate".to_string(),
        GameStatus::Draw => "Draw - insufficient material".to_string(),
        GameStatus::Ongoing if snapshot.check_square.is_some() => {
            format!("{} to move - check", snapshot.side_to_move.name())
        }
        GameStatus::Ongoing => format!("{} to move", snapshot.side_to_move.name()),
    }
}

pub fn status_items(
    snapshot: &BoardSnapshot,
    geometry: &BoardGeometry,
    palette: &BoardPalette,
) -> Vec<FrameItem> {
    vec![FrameItem::new(
        Layer::Status,
        DrawCommand::Text {
            text: status_text(snapshot),
            center: geometry.status_line_center(),
            size: geometry.label_font_size(),
            color: palette.label,
            font: FontRole::Label,
        },
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::{RulesEngine, ShakmatyEngine};
    use crate::game::types::PieceColor;

    #[test]
    fn test_status_text_variants() {
        let mut snapshot = ShakmatyEngine::new().snapshot();
        assert_eq!(status_text(&snapshot), "White to move");

        snapshot.side_to_move = PieceColor::Black;
        let king = snapshot.occupied().next().map(|(square, _)| square);
        snapshot.check_square = king;
        assert_eq!(status_text(&snapshot), "Black to move - check");

        snapshot.status = GameStatus::Checkmate {
            winner: PieceColor::White,
        };
        assert_eq!(status_text(&snapshot), "Checkmate - White wins");

        snapshot.status = GameStatus::Stalemate;
        assert_eq!(status_text(&snapshot), "Stalemate");
    }
}
