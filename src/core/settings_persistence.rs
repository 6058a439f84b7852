//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, unless the
//! command line names another file. Without a configuration directory the
//! file lands in the working directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt play

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;

use super::error::{CoreError, CoreResult};
use super::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the settings of this run are read from and written to
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SettingsPath(pub PathBuf);

impl SettingsPath {
    /// Use `explicit` when given, the platform location otherwise
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self(explicit.unwrap_or_else(default_settings_path))
    }
}

fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("org", "bigchess", "bigchess") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    let io_error = |source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(io_error)
}

/// Where the settings of this run came from
///
/// Settings are read before the logger exists, so the outcome is kept and
/// logged by [`report_settings_origin`] once the app runs.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsOrigin {
    File,
    /// No settings file yet
    #[default]
    Defaults,
    /// The file could not be used
    Fallback { reason: String },
}

/// Load settings, falling back to defaults on any failure
pub fn load_settings_or_default(path: &Path) -> (GameSettings, SettingsOrigin) {
    if !path.exists() {
        return (GameSettings::default(), SettingsOrigin::Defaults);
    }
    match read_settings(path) {
        Ok(settings) => (settings, SettingsOrigin::File),
        Err(e) => (
            GameSettings::default(),
            SettingsOrigin::Fallback {
                reason: e.to_string(),
            },
        ),
    }
}

pub fn report_settings_origin(origin: Res<SettingsOrigin>, path: Res<SettingsPath>) {
    match origin.as_ref() {
        SettingsOrigin::File => info!("[SETTINGS] Loaded settings from {:?}", path.0),
        SettingsOrigin::Defaults => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path.0)
        }
        SettingsOrigin::Fallback { reason } => warn!("[SETTINGS] {}. Using defaults.", reason),
    }
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<GameSettings>, path: Res<SettingsPath>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }
    match write_settings(&path.0, &settings) {
        Ok(()) => debug!("[SETTINGS] Saved settings to {:?}", path.0),
        Err(e) => error!("[SETTINGS] Failed to save settings: {}", e),
    }
}
