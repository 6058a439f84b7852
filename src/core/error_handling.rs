//! Outermost error boundary for frame systems
//!
//! Frame systems return [`FrameResult`] and are piped into
//! [`report_frame_error`]. The first error is logged and turns into a
//! non-zero application exit; nothing is retried.

use bevy::prelude::*;

use super::error::FrameResult;

/// Pipe target for every fallible frame system
pub fn report_frame_error(In(result): In<FrameResult>, mut exit: MessageWriter<AppExit>) {
    if let Err(e) = result {
        error!("[ERROR_HANDLER] Frame system failed: {}", e);
        exit.write(AppExit::from_code(1));
    }
}
