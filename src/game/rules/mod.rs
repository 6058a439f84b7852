//! Rules engine seam
//!
//! The board never decides chess legality itself. Everything it needs to know
//! about the position goes through the [`RulesEngine`] trait, so the
//! interaction core and the renderer stay identical whichever move generator
//! sits behind it.
//!
//! - [`RulesEngine`] - the query/command contract
//! - [`BoardSnapshot`] - read model consumed by the renderer
//! - [`ShakmatyEngine`] - implementation backed by the `shakmaty` crate

pub mod shakmaty_engine;


pub use shakmaty_engine::ShakmatyEngine;

use crate::game::error::GameResult;
use crate::game::types::{LegalMove, MoveCommand, Piece, PieceColor, PieceType, Square};

/// Final or running state of the game as the engine reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Checkmate {
        winner: PieceColor,
    },
    Stalemate,
    /// Insufficient material
    Draw,
}

/// Chess rules collaborator
///
/// Queries are cheap and synchronous. `submit_move` only ever receives moves
/// the interaction core has already confirmed through `is_legal_move`, but a
/// rejection must still be reported as an error rather than a panic.
pub trait RulesEngine {
    fn current_turn(&self) -> PieceColor;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Every legal move whose source is `square`
    fn legal_moves_from(&self, square: Square) -> Vec<LegalMove>;

    fn is_legal_move(&self, command: MoveCommand) -> bool;

    fn submit_move(&mut self, command: MoveCommand) -> GameResult<()>;

    fn is_in_check(&self, color: PieceColor) -> bool;

    fn king_square(&self, color: PieceColor) -> Option<Square>;

    /// Source and destination of the most recently applied move
    fn last_move(&self) -> Option<(Square, Square)>;

    /// Take back the last move. Returns `false` when there is no history.
    fn undo_last_move(&mut self) -> bool;

    fn reset_to_initial_position(&mut self);

    /// Number of moves applied since the initial position
    fn history_len(&self) -> usize;

    fn status(&self) -> GameStatus;

    /// Capture everything the renderer needs for one frame
    fn snapshot(&self) -> BoardSnapshot {
        let side_to_move = self.current_turn();
        let mut pieces = [None; 64];
        for square in Square::all() {
            pieces[square.index() as usize] = self.piece_at(square);
        }
        let check_square = if self.is_in_check(side_to_move) {
            self.king_square(side_to_move)
        } else {
            None
        };
        BoardSnapshot {
            pieces,
            side_to_move,
            check_square,
            last_move: self.last_move(),
            history_len: self.history_len(),
            status: self.status(),
        }
    }
}

/// Read-only view of the position for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub pieces: [Option<Piece>; 64],
    pub side_to_move: PieceColor,
    /// King square of the side to move, present only while in check
    pub check_square: Option<Square>,
    pub last_move: Option<(Square, Square)>,
    pub history_len: usize,
    pub status: GameStatus,
}

impl BoardSnapshot {
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces[square.index() as usize]
    }

    /// Occupied squares with their pieces, in index order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

/// Whether moving the piece on `from` to `to` would be a pawn reaching its
/// last rank
///
/// Only the destination rank decides this: a pawn arriving on the last rank
/// can never make a non-promoting move.
pub fn requires_promotion<E: RulesEngine + ?Sized>(engine: &E, from: Square, to: Square) -> bool {
    match engine.piece_at(from) {
        Some(piece) if piece.piece_type == PieceType::Pawn => {
            to.rank() == piece.color.promotion_rank()
        }
        _ => false,
    }
}

/// Whether the engine offers at least one promoting move from `from` to `to`
pub fn has_promoting_move<E: RulesEngine + ?Sized>(engine: &E, from: Square, to: Square) -> bool {
    engine
        .legal_moves_from(from)
        .iter()
        .any(|m| m.to == to && m.promotion.is_some())
}
