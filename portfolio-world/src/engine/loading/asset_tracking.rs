use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::world_assets::{AssetStatus, WorldAssets};
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

/// Report each tracked asset once when it finishes loading or fails.
///
/// Failures are logged and left alone; the rest of the world keeps running
/// without the missing piece.
pub fn track_world_asset_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    mut world_assets: ResMut<WorldAssets>,
    asset_server: Res<AssetServer>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.assets_settled || !loading_progress.scene_populated {
        return;
    }

    for asset in world_assets.tracked_mut() {
        if asset.status.is_settled() {
            continue;
        }

        let state = asset_server.get_load_state(asset.id());
        let status = AssetStatus::from_load_state(state.as_ref());
        if status == asset.status {
            continue;
        }
        asset.status = status;

        match state {
            Some(LoadState::Failed(error)) => {
                error!("Asset '{}' failed to load: {}", asset.name, error);
                rpc_interface.send_notification(
                    "asset_status",
                    serde_json::json!({
                        "name": asset.name,
                        "status": status,
                        "error": error.to_string(),
                    }),
                );
            }
            _ => {
                info!("✓ Asset '{}' loaded", asset.name);
                rpc_interface.send_notification(
                    "asset_status",
                    serde_json::json!({
                        "name": asset.name,
                        "status": status,
                    }),
                );
            }
        }
    }

    if world_assets.all_settled() {
        info!("All world assets settled");
        loading_progress.assets_settled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_manifest::SceneManifest;
    use bevy_common_assets::json::JsonAssetPlugin;
    use constants::path::SCENE_MANIFEST_PATH;
    use std::time::Duration;

    fn tracking_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin::default(),
            JsonAssetPlugin::<SceneManifest>::new(&["scene.json"]),
        ))
        .init_resource::<WebRpcInterface>()
        .insert_resource(LoadingProgress {
            scene_populated: true,
            ..default()
        })
        .add_systems(Update, track_world_asset_loading);
        app
    }

    fn track(app: &mut App, name: &str, path: &'static str) {
        let handle: Handle<SceneManifest> = app.world().resource::<AssetServer>().load(path);
        let mut world_assets = app
            .world_mut()
            .get_resource_or_insert_with(WorldAssets::default);
        world_assets.track(name, handle);
    }

    fn update_until_settled(app: &mut App) {
        for _ in 0..500 {
            app.update();
            if app.world().resource::<LoadingProgress>().assets_settled {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("assets never settled");
    }

    fn status_notifications(app: &App) -> Vec<serde_json::Value> {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .filter(|n| n.method == "asset_status")
            .map(|n| n.params.clone())
            .collect()
    }

    #[test]
    fn missing_asset_is_reported_failed_once() {
        let mut app = tracking_app();
        track(&mut app, "rocket", "missing-rocket.scene.json");

        update_until_settled(&mut app);
        app.update();
        app.update();

        let sent = status_notifications(&app);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["name"], "rocket");
        assert_eq!(sent[0]["status"], "failed");
        assert!(sent[0]["error"].is_string());

        let world_assets = app.world().resource::<WorldAssets>();
        assert_eq!(world_assets.tracked()[0].status, AssetStatus::Failed);
    }

    #[test]
    fn each_asset_reported_once_when_it_settles() {
        let mut app = tracking_app();
        track(&mut app, "manifest", SCENE_MANIFEST_PATH);
        track(&mut app, "backdrop", "missing-backdrop.scene.json");

        update_until_settled(&mut app);
        app.update();

        let sent = status_notifications(&app);
        assert_eq!(sent.len(), 2);

        let manifest = sent.iter().find(|n| n["name"] == "manifest").unwrap();
        assert_eq!(manifest["status"], "loaded");
        assert!(manifest.get("error").is_none());

        let backdrop = sent.iter().find(|n| n["name"] == "backdrop").unwrap();
        assert_eq!(backdrop["status"], "failed");
    }

    #[test]
    fn waits_until_world_is_populated() {
        let mut app = tracking_app();
        app.world_mut().resource_mut::<LoadingProgress>().scene_populated = false;
        track(&mut app, "rocket", "missing-rocket.scene.json");

        for _ in 0..20 {
            app.update();
            std::thread::sleep(Duration::from_millis(5));
        }

        assert!(status_notifications(&app).is_empty());
        assert!(!app.world().resource::<LoadingProgress>().assets_settled);
    }
}
