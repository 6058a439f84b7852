//! Window screenshots
//!
//! `S` saves the primary window to `screens/chess_YYYYMMDD_HHMMSS.png`. The
//! capture itself is asynchronous: Bevy reads the frame back from the GPU and
//! the `save_to_disk` observer writes the file a few frames later.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use chrono::{DateTime, Local, TimeZone};

pub const SCREENSHOT_DIR: &str = "screens";

/// Request a capture of the primary window
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureScreenshot;

pub fn screenshot_path<Tz: TimeZone>(dir: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!("chess_{}.png", at.format("%Y%m%d_%H%M%S")))
}

pub fn capture_screenshot_system(
    mut commands: Commands,
    mut requests: MessageReader<CaptureScreenshot>,
) {
    for _ in requests.read() {
        let dir = Path::new(SCREENSHOT_DIR);
        if let Err(e) = fs::create_dir_all(dir) {
            error!("[SCREENSHOT] Cannot create {:?}: {}", dir, e);
            continue;
        }
        let path = screenshot_path(dir, &Local::now());
        info!("[SCREENSHOT] Saving {}", path.display());
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
    }
}
