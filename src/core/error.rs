//! Error types for core module
//!
//! [`CoreError`] covers settings persistence and command line validation.
//! [`FrameError`] is what a frame system returns when it cannot finish; it is
//! reported once by [`crate::core::error_handling::report_frame_error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error at {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    #[error("Square size {size} is outside {min}..={max}")]
    InvalidSquareSize { size: f32, min: f32, max: f32 },

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidLogFilter { filter: String, message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Failure inside a per-frame system
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("egui context unavailable: {0}")]
    EguiContext(String),
}

pub type FrameResult = Result<(), FrameError>;
