//! Board interaction state machine
//!
//! Tracks what the player is doing with the pointer (nothing, dragging a
//! piece, or choosing a promotion piece) as a single tagged value, and turns
//! one [`BoardInput`] at a time into a new state plus at most one move for the
//! rules engine.
//!
//! # Transitions
//!
//! | State | Input | Result |
//! |---|---|---|
//! | `Idle` | pointer down on a piece of the side to move | `Dragging` |
//! | `Dragging` | pointer move | `Dragging` with the new pointer |
//! | `Dragging` | pointer up on a cached legal target | move submitted, or `AwaitingPromotionChoice` |
//! | `Dragging` | pointer up anywhere else | `Idle` |
//! | `AwaitingPromotionChoice` | promotion choice | move submitted if legal, `Idle` |
//! | `AwaitingPromotionChoice` | cancel | `Idle` |
//!
//! Every other pair leaves the state untouched. Global actions are handled on
//! the side; undo and reset always drop back to `Idle`.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use bevy::math::Vec2;
use bevy::prelude::Resource;
use tracing::{debug, info, warn};

use crate::core::BoardView;
use crate::game::events::{BoardInput, GlobalAction};
use crate::game::rules::{has_promoting_move, requires_promotion, RulesEngine};
use crate::game::types::{MoveCommand, PieceType, Square};
use crate::rendering::board::coordinates::{cell_to_square, BoardGeometry, Orientation};

/// A piece picked up by the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub source: Square,
    /// Live pointer position in window pixels
    pub pointer: Vec2,
    /// Destinations offered by the engine when the drag started
    pub legal_targets: LegalTargets,
}

/// Legal destinations of one piece, each flagged `true` when the move captures
pub type LegalTargets = BTreeMap<Square, bool>;

/// Destinations of every legal move starting on `source`
///
/// En passant counts as a capture even though its destination is empty.
pub fn legal_targets<E: RulesEngine + ?Sized>(engine: &E, source: Square) -> LegalTargets {
    let mut targets = LegalTargets::new();
    for legal in engine.legal_moves_from(source) {
        *targets.entry(legal.to).or_default() |= legal.is_capture;
    }
    targets
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragState),
    AwaitingPromotionChoice {
        source: Square,
        destination: Square,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn drag(&self) -> Option<&DragState> {
        match self {
            InteractionState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn pending_promotion(&self) -> Option<(Square, Square)> {
        match self {
            InteractionState::AwaitingPromotionChoice {
                source,
                destination,
            } => Some((*source, *destination)),
            _ => None,
        }
    }
}

/// Everything besides the engine needed to resolve a pointer position
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    pub geometry: BoardGeometry,
    pub orientation: Orientation,
}

impl InputContext {
    pub fn square_at(&self, pixel: Vec2) -> Option<Square> {
        self.geometry
            .pixel_to_cell(pixel)
            .and_then(|cell| cell_to_square(cell, self.orientation))
    }
}

/// What the driver has to do after an input was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing beyond a possible state change
    Handled,
    /// The engine accepted a move
    Moved(MoveCommand),
    /// The engine refused a move the machine believed legal
    Rejected(MoveCommand),
    CaptureScreenshot,
    Quit,
}

/// Owner of the current [`InteractionState`]
#[derive(Resource, Debug, Default)]
pub struct BoardInteraction {
    state: InteractionState,
}

impl BoardInteraction {
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Drop whatever gesture is in progress
    pub fn force_idle(&mut self) {
        if !self.state.is_idle() {
            debug!("[INPUT] Interaction forced back to idle");
        }
        self.state = InteractionState::Idle;
    }

    /// Process one input and apply its consequences to the engine and view
    pub fn dispatch<E: RulesEngine + ?Sized>(
        &mut self,
        input: BoardInput,
        context: &InputContext,
        engine: &mut E,
        view: &mut BoardView,
    ) -> DispatchOutcome {
        if let BoardInput::Global(action) = input {
            return self.apply_global(action, engine, view);
        }

        let (next, command) = transition(&self.state, input, context, engine);
        self.state = next;

        match command {
            Some(command) => match engine.submit_move(command) {
                Ok(()) => {
                    info!("[INPUT] Played {}", command);
                    DispatchOutcome::Moved(command)
                }
                Err(e) => {
                    warn!("[INPUT] Rules engine rejected {}: {}", command, e);
                    DispatchOutcome::Rejected(command)
                }
            },
            None => DispatchOutcome::Handled,
        }
    }

    fn apply_global<E: RulesEngine + ?Sized>(
        &mut self,
        action: GlobalAction,
        engine: &mut E,
        view: &mut BoardView,
    ) -> DispatchOutcome {
        match action {
            GlobalAction::Undo => {
                self.force_idle();
                if engine.undo_last_move() {
                    info!("[INPUT] Took back last move");
                } else {
                    debug!("[INPUT] Nothing to undo");
                }
                DispatchOutcome::Handled
            }
            GlobalAction::Reset => {
                self.force_idle();
                engine.reset_to_initial_position();
                info!("[INPUT] Board reset to initial position");
                DispatchOutcome::Handled
            }
            GlobalAction::ToggleOrientation => {
                view.orientation = view.orientation.toggled();
                debug!("[INPUT] Orientation now {:?}", view.orientation);
                DispatchOutcome::Handled
            }
            GlobalAction::ToggleHints => {
                view.show_hints = !view.show_hints;
                debug!("[INPUT] Move hints {}", if view.show_hints { "on" } else { "off" });
                DispatchOutcome::Handled
            }
            GlobalAction::CaptureScreenshot => DispatchOutcome::CaptureScreenshot,
            GlobalAction::Quit => DispatchOutcome::Quit,
        }
    }
}

/// Pure transition function: next state and the move to submit, if any
///
/// Global actions never reach this function.
pub fn transition<E: RulesEngine + ?Sized>(
    state: &InteractionState,
    input: BoardInput,
    context: &InputContext,
    engine: &E,
) -> (InteractionState, Option<MoveCommand>) {
    use InteractionState::*;

    match (state, input) {
        (Idle, BoardInput::PointerDown(pointer)) => (begin_drag(pointer, context, engine), None),
        (Dragging(drag), BoardInput::PointerMove(pointer)) => (
            Dragging(DragState {
                pointer,
                ..drag.clone()
            }),
            None,
        ),
        (Dragging(drag), BoardInput::PointerUp(pointer)) => release(drag, pointer, context, engine),
        (
            AwaitingPromotionChoice {
                source,
                destination,
            },
            BoardInput::PromotionChoice(kind),
        ) => (Idle, choose_promotion(*source, *destination, kind, engine)),
        (AwaitingPromotionChoice { .. }, BoardInput::CancelPromotion) => {
            debug!("[PROMOTION] Promotion cancelled");
            (Idle, None)
        }
        (state, _) => (state.clone(), None),
    }
}

fn begin_drag<E: RulesEngine + ?Sized>(
    pointer: Vec2,
    context: &InputContext,
    engine: &E,
) -> InteractionState {
    let Some(source) = context.square_at(pointer) else {
        return InteractionState::Idle;
    };
    match engine.piece_at(source) {
        Some(piece) if piece.color == engine.current_turn() => {
            let legal_targets = legal_targets(engine, source);
            debug!(
                "[INPUT] Picked up {:?} on {} ({} targets)",
                piece.piece_type,
                source,
                legal_targets.len()
            );
            InteractionState::Dragging(DragState {
                source,
                pointer,
                legal_targets,
            })
        }
        _ => InteractionState::Idle,
    }
}

fn release<E: RulesEngine + ?Sized>(
    drag: &DragState,
    pointer: Vec2,
    context: &InputContext,
    engine: &E,
) -> (InteractionState, Option<MoveCommand>) {
    let source = drag.source;
    let Some(destination) = context
        .square_at(pointer)
        .filter(|square| drag.legal_targets.contains_key(square))
    else {
        debug!("[INPUT] Drag from {} dropped off target", source);
        return (InteractionState::Idle, None);
    };

    if requires_promotion(engine, source, destination) {
        if has_promoting_move(engine, source, destination) {
            debug!("[PROMOTION] Awaiting choice for {}{}", source, destination);
            return (
                InteractionState::AwaitingPromotionChoice {
                    source,
                    destination,
                },
                None,
            );
        }
        return (InteractionState::Idle, None);
    }

    let command = MoveCommand::new(source, destination, None);
    if engine.is_legal_move(command) {
        (InteractionState::Idle, Some(command))
    } else {
        (InteractionState::Idle, None)
    }
}

fn choose_promotion<E: RulesEngine + ?Sized>(
    source: Square,
    destination: Square,
    kind: PieceType,
    engine: &E,
) -> Option<MoveCommand> {
    let command = MoveCommand::new(source, destination, Some(kind));
    if engine.is_legal_move(command) {
        Some(command)
    } else {
        debug!("[PROMOTION] {:?} is not a legal choice, discarded", kind);
        None
    }
}
