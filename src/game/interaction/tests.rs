//! Interaction state machine tests
//!
//! Gestures are fed as pixel positions, exactly as the input collector
//! produces them, so these tests exercise the coordinate mapping together
//! with the transitions.

use super::*;
use crate::game::error::{GameError, GameResult};
use crate::game::rules::{BoardSnapshot, GameStatus, ShakmatyEngine};
use crate::game::types::{LegalMove, Piece, PieceColor};
use crate::rendering::board::coordinates::square_to_cell;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess};

const PROMOTION_FEN: &str = "7k/4P3/8/8/8/8/8/4K3 w - - 0 1";

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).expect("valid square in test")
}

fn context(orientation: Orientation) -> InputContext {
    InputContext {
        geometry: BoardGeometry::default(),
        orientation,
    }
}

/// Centre pixel of a square as drawn under `orientation`
fn pixel_of(name: &str, orientation: Orientation) -> Vec2 {
    BoardGeometry::default().cell_center(square_to_cell(sq(name), orientation))
}

fn engine_from_fen(fen: &str) -> ShakmatyEngine {
    let fen: Fen = fen.parse().expect("valid FEN in test");
    let position: Chess = fen
        .into_position(CastlingMode::Standard)
        .expect("legal position in test");
    ShakmatyEngine::from_position(position)
}

struct Harness<E: RulesEngine> {
    interaction: BoardInteraction,
    engine: E,
    view: BoardView,
}

impl<E: RulesEngine> Harness<E> {
    fn new(engine: E) -> Self {
        Self {
            interaction: BoardInteraction::default(),
            engine,
            view: BoardView::default(),
        }
    }

    fn send(&mut self, input: BoardInput) -> DispatchOutcome {
        let context = context(self.view.orientation);
        self.interaction
            .dispatch(input, &context, &mut self.engine, &mut self.view)
    }

    fn drag(&mut self, from: &str, to: &str) -> DispatchOutcome {
        let orientation = self.view.orientation;
        self.send(BoardInput::PointerDown(pixel_of(from, orientation)));
        self.send(BoardInput::PointerMove(pixel_of(to, orientation)));
        self.send(BoardInput::PointerUp(pixel_of(to, orientation)))
    }

    fn state(&self) -> &InteractionState {
        self.interaction.state()
    }
}

#[test]
fn test_pointer_down_on_own_pawn_starts_drag() {
    //! Idle + press on the white e2 pawn with white to move
    let mut harness = Harness::new(ShakmatyEngine::new());
    let press = pixel_of("e2", Orientation::Standard);

    harness.send(BoardInput::PointerDown(press));

    let drag = harness.state().drag().expect("should be dragging");
    assert_eq!(drag.source, sq("e2"));
    assert_eq!(drag.pointer, press);
    assert_eq!(drag.legal_targets.get(&sq("e3")), Some(&false));
    assert_eq!(drag.legal_targets.get(&sq("e4")), Some(&false));
}

#[test]
fn test_en_passant_target_is_cached_as_capture() {
    //! e5 pawn next to a d5 pawn that just made a double step
    let mut harness = Harness::new(ShakmatyEngine::new());
    for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
        harness.drag(from, to);
    }

    harness.send(BoardInput::PointerDown(pixel_of("e5", Orientation::Standard)));

    let drag = harness.state().drag().expect("should be dragging");
    assert_eq!(harness.engine.piece_at(sq("d6")), None);
    assert_eq!(drag.legal_targets.get(&sq("d6")), Some(&true));
    assert_eq!(drag.legal_targets.get(&sq("e6")), Some(&false));
}

#[test]
fn test_pointer_down_ignores_empty_and_opponent_squares() {
    let mut harness = Harness::new(ShakmatyEngine::new());

    harness.send(BoardInput::PointerDown(pixel_of("e4", Orientation::Standard)));
    assert!(harness.state().is_idle(), "Empty square");

    harness.send(BoardInput::PointerDown(pixel_of("e7", Orientation::Standard)));
    assert!(harness.state().is_idle(), "Black pawn while white to move");

    harness.send(BoardInput::PointerDown(Vec2::new(5.0, 5.0)));
    assert!(harness.state().is_idle(), "Outside the board");
}

#[test]
fn test_pointer_move_only_updates_pointer() {
    let mut harness = Harness::new(ShakmatyEngine::new());
    harness.send(BoardInput::PointerDown(pixel_of("g1", Orientation::Standard)));
    let before = harness.state().drag().cloned().unwrap();

    harness.send(BoardInput::PointerMove(Vec2::new(300.0, 200.0)));

    let after = harness.state().drag().unwrap();
    assert_eq!(after.pointer, Vec2::new(300.0, 200.0));
    assert_eq!(after.source, before.source);
    assert_eq!(after.legal_targets, before.legal_targets);
}

#[test]
fn test_release_on_illegal_target_reverts_to_idle() {
    //! Dragging e2 and dropping on e5 submits nothing
    let mut harness = Harness::new(ShakmatyEngine::new());
    let before = harness.engine.snapshot();

    let outcome = harness.drag("e2", "e5");

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.snapshot(), before);
}

#[test]
fn test_release_outside_board_reverts_to_idle() {
    let mut harness = Harness::new(ShakmatyEngine::new());
    harness.send(BoardInput::PointerDown(pixel_of("e2", Orientation::Standard)));

    let outcome = harness.send(BoardInput::PointerUp(Vec2::new(640.0, 660.0)));

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.history_len(), 0);
}

#[test]
fn test_invalid_gestures_leave_idle_and_board_untouched() {
    let mut harness = Harness::new(ShakmatyEngine::new());
    let before = harness.engine.snapshot();

    harness.drag("e2", "e5");
    harness.drag("g1", "g3");
    harness.drag("e7", "e5");
    harness.send(BoardInput::PointerUp(pixel_of("e4", Orientation::Standard)));
    harness.send(BoardInput::PromotionChoice(PieceType::Queen));
    harness.send(BoardInput::CancelPromotion);

    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.snapshot(), before);
}

#[test]
fn test_legal_release_submits_move() {
    let mut harness = Harness::new(ShakmatyEngine::new());

    let outcome = harness.drag("e2", "e4");

    assert_eq!(
        outcome,
        DispatchOutcome::Moved(MoveCommand::new(sq("e2"), sq("e4"), None))
    );
    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.last_move(), Some((sq("e2"), sq("e4"))));
    assert_eq!(harness.engine.current_turn(), PieceColor::Black);
}

#[test]
fn test_promotion_waits_for_choice_then_submits() {
    //! e7-e8 parks in AwaitingPromotionChoice; Queen completes the move
    let mut harness = Harness::new(engine_from_fen(PROMOTION_FEN));

    let outcome = harness.drag("e7", "e8");

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(harness.state().pending_promotion(), Some((sq("e7"), sq("e8"))));
    assert_eq!(harness.engine.history_len(), 0, "Nothing submitted yet");

    // Ordinary pointer input is ignored while the overlay is open
    harness.send(BoardInput::PointerDown(pixel_of("e1", Orientation::Standard)));
    harness.send(BoardInput::PointerUp(pixel_of("e2", Orientation::Standard)));
    assert_eq!(harness.state().pending_promotion(), Some((sq("e7"), sq("e8"))));
    assert_eq!(harness.engine.history_len(), 0);

    let outcome = harness.send(BoardInput::PromotionChoice(PieceType::Queen));

    assert_eq!(
        outcome,
        DispatchOutcome::Moved(MoveCommand::new(sq("e7"), sq("e8"), Some(PieceType::Queen)))
    );
    assert!(harness.state().is_idle());
    assert_eq!(
        harness.engine.snapshot().piece_at(sq("e8")),
        Some(Piece::new(PieceColor::White, PieceType::Queen))
    );
}

#[test]
fn test_unmatched_promotion_choice_is_discarded() {
    let mut harness = Harness::new(engine_from_fen(PROMOTION_FEN));
    harness.drag("e7", "e8");

    let outcome = harness.send(BoardInput::PromotionChoice(PieceType::King));

    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.history_len(), 0);
}

#[test]
fn test_cancel_promotion_returns_to_idle() {
    let mut harness = Harness::new(engine_from_fen(PROMOTION_FEN));
    harness.drag("e7", "e8");

    harness.send(BoardInput::CancelPromotion);

    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.history_len(), 0);
    assert!(harness.engine.piece_at(sq("e7")).is_some());
}

#[test]
fn test_flipped_orientation_changes_top_left_square() {
    //! The same top-left pixel means a8 normally and h1 once flipped
    let mut harness = Harness::new(ShakmatyEngine::new());
    let top_left = Vec2::new(50.0, 50.0);

    assert_eq!(context(Orientation::Standard).square_at(top_left), Some(sq("a8")));
    harness.send(BoardInput::PointerDown(top_left));
    assert!(harness.state().is_idle(), "a8 holds a black rook");

    harness.send(BoardInput::Global(GlobalAction::ToggleOrientation));
    assert_eq!(harness.view.orientation, Orientation::Flipped);
    assert_eq!(context(Orientation::Flipped).square_at(top_left), Some(sq("h1")));

    harness.send(BoardInput::PointerDown(top_left));
    let drag = harness.state().drag().expect("h1 rook belongs to white");
    assert_eq!(drag.source, sq("h1"));
    assert!(drag.legal_targets.is_empty());
}

#[test]
fn test_undo_while_dragging_forces_idle() {
    let mut harness = Harness::new(ShakmatyEngine::new());
    harness.drag("e2", "e4");
    harness.send(BoardInput::PointerDown(pixel_of("e7", Orientation::Standard)));
    assert!(harness.state().drag().is_some());

    harness.send(BoardInput::Global(GlobalAction::Undo));

    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.history_len(), 0);
    assert_eq!(harness.engine.current_turn(), PieceColor::White);
}

#[test]
fn test_reset_while_awaiting_promotion_forces_idle() {
    let mut harness = Harness::new(engine_from_fen(PROMOTION_FEN));
    harness.drag("e7", "e8");

    harness.send(BoardInput::Global(GlobalAction::Reset));

    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.snapshot().occupied().count(), 32);
}

#[test]
fn test_view_toggles_and_driver_actions() {
    let mut harness = Harness::new(ShakmatyEngine::new());
    assert!(harness.view.show_hints);

    harness.send(BoardInput::Global(GlobalAction::ToggleHints));
    assert!(!harness.view.show_hints);

    assert_eq!(
        harness.send(BoardInput::Global(GlobalAction::CaptureScreenshot)),
        DispatchOutcome::CaptureScreenshot
    );
    assert_eq!(
        harness.send(BoardInput::Global(GlobalAction::Quit)),
        DispatchOutcome::Quit
    );
}

/// Engine that agrees every move is legal but refuses all submissions
struct RefusingEngine(ShakmatyEngine);

impl RulesEngine for RefusingEngine {
    fn current_turn(&self) -> PieceColor {
        self.0.current_turn()
    }
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.0.piece_at(square)
    }
    fn legal_moves_from(&self, square: Square) -> Vec<LegalMove> {
        self.0.legal_moves_from(square)
    }
    fn is_legal_move(&self, _command: MoveCommand) -> bool {
        true
    }
    fn submit_move(&mut self, command: MoveCommand) -> GameResult<()> {
        Err(GameError::IllegalMove { command })
    }
    fn is_in_check(&self, color: PieceColor) -> bool {
        self.0.is_in_check(color)
    }
    fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.0.king_square(color)
    }
    fn last_move(&self) -> Option<(Square, Square)> {
        self.0.last_move()
    }
    fn undo_last_move(&mut self) -> bool {
        self.0.undo_last_move()
    }
    fn reset_to_initial_position(&mut self) {
        self.0.reset_to_initial_position()
    }
    fn history_len(&self) -> usize {
        self.0.history_len()
    }
    fn status(&self) -> GameStatus {
        self.0.status()
    }
}

#[test]
fn test_rejected_submission_is_a_no_op() {
    let mut harness = Harness::new(RefusingEngine(ShakmatyEngine::new()));
    let before: BoardSnapshot = harness.engine.snapshot();

    let outcome = harness.drag("e2", "e4");

    assert_eq!(
        outcome,
        DispatchOutcome::Rejected(MoveCommand::new(sq("e2"), sq("e4"), None))
    );
    assert!(harness.state().is_idle());
    assert_eq!(harness.engine.snapshot(), before);
}
