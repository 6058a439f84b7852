//! Core plugin
//!
//! Installs the configuration resources every other plugin reads:
//! [`GameSettings`], the [`SettingsPath`] they persist to, and the
//! [`WindowConfig`] derived from the board geometry. Settings are written back
//! whenever they change.
//!
//! Settings are loaded before the app is built (the window size depends on
//! them), so the plugin receives them ready-made.

use bevy::prelude::*;

use super::settings_persistence::{
    report_settings_origin, save_settings_system, SettingsOrigin, SettingsPath,
};
use super::{GameSettings, WindowConfig};

#[derive(Debug, Clone)]
pub struct CorePlugin {
    pub settings: GameSettings,
    pub settings_path: SettingsPath,
    pub origin: SettingsOrigin,
}

impl CorePlugin {
    pub fn new(settings: GameSettings, settings_path: SettingsPath) -> Self {
        Self {
            settings,
            settings_path,
            origin: SettingsOrigin::default(),
        }
    }

    pub fn with_origin(mut self, origin: SettingsOrigin) -> Self {
        self.origin = origin;
        self
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let window = WindowConfig::from_geometry(&self.settings.geometry());
        info!(
            "[CORE] Board {}px squares, window {}x{}, theme {}",
            self.settings.geometry().square_size,
            window.width,
            window.height,
            self.settings.board_theme.name()
        );

        app.insert_resource(self.settings.clone())
            .insert_resource(self.settings_path.clone())
            .insert_resource(window)
            .insert_resource(self.origin.clone())
            .add_systems(Startup, report_settings_origin)
            .add_systems(Last, save_settings_system);
    }
}
