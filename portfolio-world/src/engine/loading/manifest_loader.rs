use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::SCENE_MANIFEST_PATH;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Publish the manifest as a resource once it has loaded. A missing or
/// malformed manifest is not fatal: the world is built from defaults.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!(
            "✓ Scene manifest loaded: {} stars, {} labels",
            manifest.star_count,
            manifest.labels.len()
        );
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_loaded = true;
        return;
    }

    if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        error!("Scene manifest failed to load: {}", error);
        warn!("Falling back to the built-in scene");
        commands.insert_resource(SceneManifest::default());
        loading_progress.manifest_loaded = true;
        loading_progress.manifest_fallback = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_common_assets::json::JsonAssetPlugin;
    use std::time::Duration;

    fn manifest_app(path: &'static str) -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin::default(),
            JsonAssetPlugin::<SceneManifest>::new(&["scene.json"]),
        ))
        .init_resource::<LoadingProgress>()
        .add_systems(Update, load_manifest_system);

        let handle = app.world().resource::<AssetServer>().load(path);
        app.insert_resource(ManifestLoader {
            handle: Some(handle),
        });
        app
    }

    fn update_until_loaded(app: &mut App) {
        for _ in 0..500 {
            app.update();
            if app.world().resource::<LoadingProgress>().manifest_loaded {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("manifest never settled");
    }

    #[test]
    fn missing_manifest_falls_back_to_defaults() {
        let mut app = manifest_app("does-not-exist.scene.json");

        update_until_loaded(&mut app);

        let progress = app.world().resource::<LoadingProgress>();
        assert!(progress.manifest_loaded);
        assert!(progress.manifest_fallback);

        let manifest = app.world().resource::<SceneManifest>();
        assert_eq!(manifest, &SceneManifest::default());
    }

    #[test]
    fn shipped_manifest_loads_without_fallback() {
        let mut app = manifest_app(SCENE_MANIFEST_PATH);

        update_until_loaded(&mut app);

        let progress = app.world().resource::<LoadingProgress>();
        assert!(!progress.manifest_fallback);
        assert_eq!(app.world().resource::<SceneManifest>().labels.len(), 1);
    }
}
