//! [`RulesEngine`] backed by the `shakmaty` crate
//!
//! `shakmaty` positions are immutable values with no move history, so this
//! adapter keeps a stack of earlier positions alongside the squares of each
//! played move. Undo pops that stack; the last-move highlight reads its top.
//!
//! # Castling
//!
//! `shakmaty` encodes castling as king-takes-rook. The board shows and accepts
//! the usual king destination (g-file or c-file) instead, which is what a
//! player drags the king onto.

use shakmaty::{Chess, Color, Move, Position, Role};

use super::{GameStatus, RulesEngine};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{LegalMove, MoveCommand, Piece, PieceColor, PieceType, Square};

/// A position played so far, with enough history to undo
#[derive(Debug, Clone, Default)]
pub struct ShakmatyEngine {
    position: Chess,
    /// Position before each played move, paired with that move's squares
    history: Vec<(Chess, (Square, Square))>,
}

impl ShakmatyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position (with an empty history)
    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    /// The legal `shakmaty` move matching a command, if any
    fn find_move(&self, command: MoveCommand) -> Option<Move> {
        self.position.legal_moves().into_iter().find(|m| {
            move_from(m) == Some(command.from)
                && move_to(m) == Some(command.to)
                && m.promotion().map(piece_type_from_role) == command.promotion
        })
    }
}

impl RulesEngine for ShakmatyEngine {
    fn current_turn(&self) -> PieceColor {
        piece_color_from_engine(self.position.turn())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(to_engine_square(square))
            .map(|piece| Piece::new(piece_color_from_engine(piece.color), piece_type_from_role(piece.role)))
    }

    fn legal_moves_from(&self, square: Square) -> Vec<LegalMove> {
        self.position
            .legal_moves()
            .iter()
            .filter(|m| move_from(m) == Some(square))
            .filter_map(|m| {
                Some(LegalMove {
                    to: move_to(m)?,
                    promotion: m.promotion().map(piece_type_from_role),
                    is_capture: m.is_capture(),
                })
            })
            .collect()
    }

    fn is_legal_move(&self, command: MoveCommand) -> bool {
        self.find_move(command).is_some()
    }

    fn submit_move(&mut self, command: MoveCommand) -> GameResult<()> {
        let Some(m) = self.find_move(command) else {
            return Err(GameError::IllegalMove { command });
        };
        let next = self
            .position
            .clone()
            .play(m)
            .map_err(|_| GameError::IllegalMove { command })?;
        let previous = std::mem::replace(&mut self.position, next);
        self.history.push((previous, (command.from, command.to)));
        tracing::debug!("[RULES] Applied {} ({} plies)", command, self.history.len());
        Ok(())
    }

    fn is_in_check(&self, color: PieceColor) -> bool {
        // Only the side to move can be in check in a legal position
        self.current_turn() == color && self.position.is_check()
    }

    fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.position
            .board()
            .king_of(to_engine_color(color))
            .and_then(|square| from_engine_square(square).ok())
    }

    fn last_move(&self) -> Option<(Square, Square)> {
        self.history.last().map(|(_, squares)| *squares)
    }

    fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some((previous, (from, to))) => {
                self.position = previous;
                tracing::debug!("[RULES] Took back {}{}", from, to);
                true
            }
            None => false,
        }
    }

    fn reset_to_initial_position(&mut self) {
        self.position = Chess::default();
        self.history.clear();
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }

    fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate {
                winner: self.current_turn().opponent(),
            }
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.is_insufficient_material() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }
}

fn move_from(m: &Move) -> Option<Square> {
    m.from().and_then(|square| from_engine_square(square).ok())
}

/// Destination as a player sees it: castling lands on the king's target square
fn move_to(m: &Move) -> Option<Square> {
    match *m {
        Move::Castle { king, rook } => {
            let king = from_engine_square(king).ok()?;
            let rook = from_engine_square(rook).ok()?;
            let file = if rook.file() > king.file() { 6 } else { 2 };
            Square::from_coords(file, king.rank())
        }
        _ => from_engine_square(m.to()).ok(),
    }
}

fn to_engine_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square.index()))
}

fn from_engine_square(square: shakmaty::Square) -> GameResult<Square> {
    let index = u32::from(square);
    u8::try_from(index)
        .ok()
        .and_then(Square::from_index)
        .ok_or(GameError::InvalidSquare { index })
}

fn to_engine_color(color: PieceColor) -> Color {
    match color {
        PieceColor::White => Color::White,
        PieceColor::Black => Color::Black,
    }
}

fn piece_color_from_engine(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

fn piece_type_from_role(role: Role) -> PieceType {
    match role {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King,
    }
}
