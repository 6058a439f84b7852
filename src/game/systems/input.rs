//! Input systems
//!
//! [`collect_board_input`] is the only place that looks at raw Bevy input. It
//! turns mouse and keyboard state into [`BoardInput`] messages, resolving the
//! promotion overlay and the key bindings on the way.
//! [`dispatch_board_input`] feeds those messages, in order, to the interaction
//! state machine and carries out the side effects it asks for.
//!
//! | Key | Overlay closed | Overlay open |
//! |---|---|---|
//! | `Q` `R` `B` `N` | `R` resets | promotion choice |
//! | `Escape` | quit | cancel promotion |
//! | `F` `U` `H` `S` | flip, undo, hints, screenshot | same |

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::GameSettings;
use crate::game::events::{BoardInput, GlobalAction};
use crate::game::interaction::{BoardInteraction, DispatchOutcome, InputContext};
use crate::game::resources::ChessEngine;
use crate::game::systems::screenshot::CaptureScreenshot;
use crate::game::types::PieceType;
use crate::rendering::overlays::PromotionLayout;

const BOUND_KEYS: [KeyCode; 9] = [
    KeyCode::Escape,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyB,
    KeyCode::KeyN,
    KeyCode::KeyF,
    KeyCode::KeyU,
    KeyCode::KeyH,
    KeyCode::KeyS,
];

/// Pointer state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// `None` while the cursor is outside the window
    pub cursor: Option<Vec2>,
    pub pressed: bool,
    pub released: bool,
}

/// Board input for one key press
pub fn key_input(key: KeyCode, promotion_open: bool) -> Option<BoardInput> {
    if promotion_open {
        let choice = match key {
            KeyCode::KeyQ => Some(PieceType::Queen),
            KeyCode::KeyR => Some(PieceType::Rook),
            KeyCode::KeyB => Some(PieceType::Bishop),
            KeyCode::KeyN => Some(PieceType::Knight),
            _ => None,
        };
        if let Some(kind) = choice {
            return Some(BoardInput::PromotionChoice(kind));
        }
        if key == KeyCode::Escape {
            return Some(BoardInput::CancelPromotion);
        }
    }

    let action = match key {
        KeyCode::Escape => GlobalAction::Quit,
        KeyCode::KeyF => GlobalAction::ToggleOrientation,
        KeyCode::KeyU => GlobalAction::Undo,
        KeyCode::KeyR => GlobalAction::Reset,
        KeyCode::KeyH => GlobalAction::ToggleHints,
        KeyCode::KeyS => GlobalAction::CaptureScreenshot,
        _ => return None,
    };
    Some(BoardInput::Global(action))
}

/// Board inputs for one frame of pointer activity
///
/// While the overlay is open only a press over one of its boxes matters.
/// A release with the cursor outside the window lands off the board.
pub fn pointer_inputs(
    sample: PointerSample,
    last_cursor: Option<Vec2>,
    overlay: Option<&PromotionLayout>,
) -> Vec<BoardInput> {
    if let Some(layout) = overlay {
        return sample
            .cursor
            .filter(|_| sample.pressed)
            .and_then(|cursor| layout.choice_at(cursor))
            .map(BoardInput::PromotionChoice)
            .into_iter()
            .collect();
    }

    let mut inputs = Vec::new();
    if let Some(cursor) = sample.cursor {
        if last_cursor != Some(cursor) {
            inputs.push(BoardInput::PointerMove(cursor));
        }
        if sample.pressed {
            inputs.push(BoardInput::PointerDown(cursor));
        }
    }
    if sample.released {
        inputs.push(BoardInput::PointerUp(sample.cursor.unwrap_or(Vec2::NEG_ONE)));
    }
    inputs
}

/// Translate raw mouse and keyboard input into [`BoardInput`] messages
pub fn collect_board_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    interaction: Res<BoardInteraction>,
    settings: Res<GameSettings>,
    mut last_cursor: Local<Option<Vec2>>,
    mut inputs: MessageWriter<BoardInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let promotion_open = interaction.state().pending_promotion().is_some();

    for key in BOUND_KEYS.into_iter().filter(|&key| keys.just_pressed(key)) {
        if let Some(input) = key_input(key, promotion_open) {
            inputs.write(input);
        }
    }

    let sample = PointerSample {
        cursor: window.cursor_position(),
        pressed: mouse.just_pressed(MouseButton::Left),
        released: mouse.just_released(MouseButton::Left),
    };
    let overlay = promotion_open.then(|| PromotionLayout::new(&settings.geometry()));
    inputs.write_batch(pointer_inputs(sample, *last_cursor, overlay.as_ref()));

    if sample.cursor.is_some() {
        *last_cursor = sample.cursor;
    }
}

/// Run every pending [`BoardInput`] through the interaction state machine
pub fn dispatch_board_input(
    mut inputs: MessageReader<BoardInput>,
    mut interaction: ResMut<BoardInteraction>,
    mut engine: ResMut<ChessEngine>,
    mut settings: ResMut<GameSettings>,
    mut screenshots: MessageWriter<CaptureScreenshot>,
    mut exit: MessageWriter<AppExit>,
) {
    for input in inputs.read() {
        let mut view = settings.view;
        let context = InputContext {
            geometry: settings.geometry(),
            orientation: view.orientation,
        };

        let outcome = interaction.dispatch(*input, &context, engine.rules_mut(), &mut view);

        if view != settings.view {
            settings.view = view;
        }
        match outcome {
            DispatchOutcome::CaptureScreenshot => {
                screenshots.write(CaptureScreenshot);
            }
            DispatchOutcome::Quit => {
                info!("[INPUT] Quit requested");
                exit.write(AppExit::Success);
            }
            DispatchOutcome::Handled | DispatchOutcome::Moved(_) | DispatchOutcome::Rejected(_) => {}
        }
    }
}
