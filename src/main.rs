use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use bigchess::assets::FontOverride;
use bigchess::core::settings_persistence::load_settings_or_default;
use bigchess::core::{Cli, CorePlugin, SettingsPath, WindowConfig};
use bigchess::game::GamePlugin;
use bigchess::rendering::board::BoardPalette;
use bigchess::ui::UIPlugin;

fn main() -> AppExit {
    let cli = Cli::parse();

    let settings_path = SettingsPath::resolve(cli.settings.clone());
    let (mut settings, origin) = load_settings_or_default(&settings_path.0);
    let configured = cli
        .apply_to(&mut settings)
        .and_then(|()| cli.log_filter());
    let filter = match configured {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("bigchess: {e}");
            return AppExit::from_code(2);
        }
    };

    let window = WindowConfig::from_geometry(&settings.geometry());
    let background = BoardPalette::for_theme(settings.board_theme).background;

    App::new()
        // Core plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    filter,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(background))
        .insert_resource(FontOverride(cli.font.clone()))
        // Game systems
        .add_plugins(CorePlugin::new(settings, settings_path).with_origin(origin))
        .add_plugins(GamePlugin)
        .add_plugins(UIPlugin)
        // Startup systems
        .add_systems(Startup, setup_camera)
        .run()
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
