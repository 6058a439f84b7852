//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - Turn mouse and keyboard state into [`BoardInput`](super::events::BoardInput) messages
//! 2. **Execution** - Feed those messages to the interaction state machine
//! 3. **Effects** - Carry out requests the state machine made (screenshots)
//!
//! Painting happens afterwards in `EguiPrimaryContextPass` and always sees the
//! state left by **Execution** in the same frame.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Raw input translation
    ///
    /// Systems: `collect_board_input`
    Input,

    /// Interaction state machine and rules engine updates
    ///
    /// Systems: `dispatch_board_input`
    Execution,

    /// Side effects requested during execution
    ///
    /// Systems: `capture_screenshot_system`
    Effects,
}
