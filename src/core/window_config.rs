//! Window configuration resource
//!
//! The window is exactly as large as the board plus its margins, so it is
//! derived from [`BoardGeometry`] rather than configured by hand.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

use crate::rendering::board::coordinates::BoardGeometry;

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_geometry(&BoardGeometry::default())
    }
}

impl WindowConfig {
    pub fn from_geometry(geometry: &BoardGeometry) -> Self {
        let size = geometry.window_size();
        Self {
            title: "Big Chess".to_string(),
            width: size.x.round() as u32,
            height: size.y.round() as u32,
            resizable: false,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
