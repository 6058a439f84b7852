//! Frame composition tests
//!
//! The frame is a plain list of commands, so what the player sees can be
//! asserted without a window: which layers exist, how many hint markers are
//! drawn, where the dragged piece ends up.

use std::collections::BTreeMap;

use super::*;
use crate::game::interaction::{legal_targets, DragState};
use crate::game::rules::{RulesEngine, ShakmatyEngine};
use crate::game::types::{MoveCommand, PieceColor, Square};
use crate::rendering::board::coordinates::{square_to_cell, Orientation};
use crate::rendering::pieces::SHADOW_OFFSET;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).expect("valid square in test")
}

fn style() -> FrameStyle {
    FrameStyle::from_settings(&GameSettings::default(), GlyphSet::Unicode)
}

fn dragging(engine: &ShakmatyEngine, source: &str, pointer: Vec2) -> InteractionState {
    let source = sq(source);
    InteractionState::Dragging(DragState {
        source,
        pointer,
        legal_targets: legal_targets(engine, source),
    })
}

fn compose(engine: &ShakmatyEngine, state: &InteractionState, view: &BoardView) -> Frame {
    compose_frame(
        &engine.snapshot(),
        state,
        view,
        &BoardGeometry::default(),
        &style(),
    )
}

fn text_count(frame: &Frame, layer: Layer) -> usize {
    frame
        .layer(layer)
        .filter(|c| matches!(c, DrawCommand::Text { .. }))
        .count()
}

#[test]
fn test_idle_frame_layers() {
    //! Starting position at rest: board, labels, 32 pieces, status, nothing else
    let engine = ShakmatyEngine::new();
    let frame = compose(&engine, &InteractionState::Idle, &BoardView::default());

    assert_eq!(frame.layer(Layer::Board).count(), 65);
    assert_eq!(frame.layer(Layer::Labels).count(), 16);
    // Glyph plus shadow for every piece
    assert_eq!(text_count(&frame, Layer::Pieces), 64);
    assert_eq!(frame.layer(Layer::Status).count(), 1);
    for layer in [
        Layer::LastMove,
        Layer::Check,
        Layer::DragSource,
        Layer::Hints,
        Layer::DraggedPiece,
        Layer::Promotion,
    ] {
        assert_eq!(frame.layer(layer).count(), 0, "{layer:?} should be empty");
    }
}

#[test]
fn test_layers_are_emitted_back_to_front() {
    let mut engine = ShakmatyEngine::new();
    engine
        .submit_move(MoveCommand::new(sq("e2"), sq("e4"), None))
        .unwrap();
    let state = dragging(&engine, "g8", Vec2::new(300.0, 300.0));
    let frame = compose(&engine, &state, &BoardView::default());

    let order: Vec<Layer> = frame.items.iter().map(|item| item.layer).fold(
        Vec::new(),
        |mut seen, layer| {
            if seen.last() != Some(&layer) {
                seen.push(layer);
            }
            seen
        },
    );
    assert_eq!(
        order,
        vec![
            Layer::Board,
            Layer::LastMove,
            Layer::Labels,
            Layer::DragSource,
            Layer::Hints,
            Layer::Pieces,
            Layer::DraggedPiece,
            Layer::Status,
        ]
    );
}

fn play(engine: &mut ShakmatyEngine, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        engine
            .submit_move(MoveCommand::new(sq(from), sq(to), None))
            .unwrap();
    }
}

/// Centres of the (rings, dots) in the hint layer
fn hint_markers(frame: &Frame) -> (Vec<Vec2>, Vec<Vec2>) {
    let mut rings = Vec::new();
    let mut dots = Vec::new();
    for command in frame.layer(Layer::Hints) {
        match command {
            DrawCommand::Ring { center, .. } => rings.push(*center),
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(*radius, 7.2);
                dots.push(*center);
            }
            other => panic!("unexpected hint command {other:?}"),
        }
    }
    (rings, dots)
}

#[test]
fn test_hint_markers_match_cached_targets() {
    //! One marker per legal target: dots on quiet moves, rings on captures
    let mut engine = ShakmatyEngine::new();
    play(&mut engine, &[("e2", "e4"), ("d7", "d5")]);
    let state = dragging(&engine, "e4", pixel(sq("e4")));
    let frame = compose(&engine, &state, &BoardView::default());

    let targets = &state.drag().unwrap().legal_targets;
    assert_eq!(targets, &BTreeMap::from([(sq("e5"), false), (sq("d5"), true)]));

    let (rings, dots) = hint_markers(&frame);
    assert_eq!(frame.layer(Layer::Hints).count(), targets.len());
    assert_eq!(rings, vec![pixel(sq("d5"))]);
    assert_eq!(dots, vec![pixel(sq("e5"))]);

    // En passant lands on an empty square and still gets a ring
    let mut engine = ShakmatyEngine::new();
    play(
        &mut engine,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    let state = dragging(&engine, "e5", pixel(sq("e5")));
    let frame = compose(&engine, &state, &BoardView::default());

    let (rings, dots) = hint_markers(&frame);
    assert_eq!(rings, vec![pixel(sq("d6"))]);
    assert_eq!(dots, vec![pixel(sq("e6"))]);
}

fn pixel(square: Square) -> Vec2 {
    BoardGeometry::default().cell_center(square_to_cell(square, Orientation::Standard))
}

#[test]
fn test_hints_hidden_when_switched_off() {
    let engine = ShakmatyEngine::new();
    let state = dragging(&engine, "g1", Vec2::new(100.0, 100.0));
    let view = BoardView {
        show_hints: false,
        ..BoardView::default()
    };

    let frame = compose(&engine, &state, &view);

    assert_eq!(frame.layer(Layer::Hints).count(), 0);
    assert_eq!(frame.layer(Layer::DragSource).count(), 1);
}

#[test]
fn test_dragged_piece_follows_pointer() {
    let engine = ShakmatyEngine::new();
    let pointer = Vec2::new(333.0, 222.0);
    let frame = compose(&engine, &dragging(&engine, "g1", pointer), &BoardView::default());

    let centers: Vec<Vec2> = frame
        .layer(Layer::DraggedPiece)
        .filter_map(|c| match c {
            DrawCommand::Text { center, .. } => Some(*center),
            _ => None,
        })
        .collect();

    assert_eq!(centers, vec![pointer + SHADOW_OFFSET, pointer]);
    // Source square is left empty
    assert_eq!(text_count(&frame, Layer::Pieces), 62);
}

#[test]
fn test_check_and_last_move_highlights() {
    let mut engine = ShakmatyEngine::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        engine
            .submit_move(MoveCommand::new(sq(from), sq(to), None))
            .unwrap();
    }
    let frame = compose(&engine, &InteractionState::Idle, &BoardView::default());

    assert_eq!(frame.layer(Layer::LastMove).count(), 2);
    let check: Vec<_> = frame.layer(Layer::Check).collect();
    assert_eq!(check.len(), 1);
    match check[0] {
        DrawCommand::Fill { rect, .. } => assert_eq!(rect.center(), pixel(sq("e1"))),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_last_move_highlight_can_be_disabled() {
    let mut engine = ShakmatyEngine::new();
    engine
        .submit_move(MoveCommand::new(sq("e2"), sq("e4"), None))
        .unwrap();
    let style = FrameStyle {
        highlight_last_move: false,
        ..style()
    };

    let frame = compose_frame(
        &engine.snapshot(),
        &InteractionState::Idle,
        &BoardView::default(),
        &BoardGeometry::default(),
        &style,
    );

    assert_eq!(frame.layer(Layer::LastMove).count(), 0);
}

#[test]
fn test_promotion_overlay_on_top() {
    let engine = ShakmatyEngine::new();
    let state = InteractionState::AwaitingPromotionChoice {
        source: sq("e7"),
        destination: sq("e8"),
    };

    let frame = compose(&engine, &state, &BoardView::default());

    let last = frame.items.last().unwrap();
    assert_eq!(last.layer, Layer::Promotion);
    // Scrim, panel, title, then box + shadow + glyph for four pieces
    assert_eq!(frame.layer(Layer::Promotion).count(), 3 + 4 * 3);
    let white_queen = GlyphSet::Unicode
        .glyph(crate::game::types::Piece::new(PieceColor::White, crate::game::types::PieceType::Queen))
        .to_string();
    assert!(frame.layer(Layer::Promotion).any(
        |c| matches!(c, DrawCommand::Text { text, .. } if *text == white_queen)
    ));
}

#[test]
fn test_flipped_board_moves_pieces_not_square_colours() {
    let engine = ShakmatyEngine::new();
    let flipped = BoardView {
        orientation: Orientation::Flipped,
        ..BoardView::default()
    };
    let standard = compose(&engine, &InteractionState::Idle, &BoardView::default());
    let mirrored = compose(&engine, &InteractionState::Idle, &flipped);

    let board = |frame: &Frame| frame.layer(Layer::Board).cloned().collect::<Vec<_>>();
    assert_eq!(board(&standard), board(&mirrored));
    assert_ne!(
        standard.layer(Layer::Pieces).cloned().collect::<Vec<_>>(),
        mirrored.layer(Layer::Pieces).cloned().collect::<Vec<_>>()
    );
}
