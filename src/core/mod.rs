//! Core module - application infrastructure
//!
//! Everything that is not about chess or drawing: persisted settings, the
//! command line, window configuration and the error boundary of the frame
//! loop.
//!
//! ## Resources
//!
//! - [`GameSettings`] - User preferences (view flags, theme, square size)
//! - [`SettingsPath`] - File the settings are persisted to
//! - [`SettingsOrigin`] - Whether they came from that file
//! - [`WindowConfig`] - Window settings derived from the board geometry
//!
//! ## Errors
//!
//! - [`CoreError`] - settings I/O and command line validation
//! - [`FrameError`] - raised by frame systems, handled by
//!   [`error_handling::report_frame_error`]

pub mod cli;
pub mod error;
pub mod error_handling;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use cli::Cli;
pub use error::{CoreError, CoreResult, FrameError, FrameResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::{SettingsOrigin, SettingsPath};
pub use window_config::WindowConfig;
