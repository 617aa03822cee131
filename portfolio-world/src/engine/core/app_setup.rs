use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::animation::sequencer::LaunchSequencer;
use crate::engine::animation::systems::{
    ScrollInput, apply_scroll_input, collect_wheel_input, tick_launch_sequence,
};
use crate::engine::assets::scene_manifest::{SceneManifest, helpers_enabled};
use crate::engine::camera::camera_rig::spawn_camera_rig;
use crate::engine::loading::asset_tracking::track_world_asset_loading;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, load_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::helpers::draw_helpers;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::populate::populate_world;
use crate::engine::scene::torus::spin_system;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::scroll_prompt::sync_scroll_prompt;
// Window and state
use crate::engine::core::app_state::{AppState, transition_to_populating, transition_to_running};
use crate::engine::core::window_config::create_window_config;
// Host page bridge
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["scene.json"]))
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(Color::BLACK));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<LaunchSequencer>()
        .add_event::<ScrollInput>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_populating)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Populating), populate_world)
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::Populating)),
        );

    // Landing animation: frame tick first, then this frame's scroll input.
    app.add_systems(
        Update,
        (
            tick_launch_sequence,
            collect_wheel_input,
            apply_scroll_input,
            sync_scroll_prompt,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(
        Update,
        (
            spin_system,
            track_world_asset_loading,
            fps_notification_system,
        )
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        draw_helpers.run_if(in_state(AppState::Running).and(helpers_enabled)),
    );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera_rig(&mut commands);
    spawn_lighting(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
