//! Chess game systems
//!
//! - [`input`] - Raw input translation and the interaction dispatch loop
//! - [`screenshot`] - Saving the window to `screens/`
//!
//! ```text
//! mouse / keyboard ─► collect_board_input ─► BoardInput ─► dispatch_board_input
//!                                                              │
//!                                   CaptureScreenshot ◄────────┤
//!                                   AppExit           ◄────────┘
//! ```
//!
//! Both input systems are thin. The decisions live in
//! [`crate::game::interaction`], which is tested without an `App`.

pub mod input;
pub mod screenshot;

pub use input::*;
pub use screenshot::*;
