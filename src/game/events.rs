//! Abstract board input messages
//!
//! Raw Bevy input (mouse buttons, cursor motion, keys) is translated once into
//! [`BoardInput`] by the collection system. Everything downstream, the
//! interaction state machine included, only sees these.

use bevy::prelude::*;

use crate::game::types::PieceType;

/// One input event for the board, in window pixel coordinates
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum BoardInput {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    /// Selector input of the promotion overlay
    PromotionChoice(PieceType),
    /// Close the promotion overlay without moving
    CancelPromotion,
    Global(GlobalAction),
}

/// Actions that do not depend on what the pointer is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    Undo,
    Reset,
    ToggleOrientation,
    ToggleHints,
    CaptureScreenshot,
    Quit,
}
