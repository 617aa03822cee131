use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::assets::world_assets::WorldAssets;
use crate::engine::scene::backdrop::spawn_backdrop;
use crate::engine::scene::rocket::spawn_rocket;
use crate::engine::scene::starfield::spawn_starfield;
use crate::engine::scene::text_labels::spawn_text_labels;
use crate::engine::scene::torus::spawn_torus;

/// Spawn the whole world described by the manifest and start fetching
/// its assets.
pub fn populate_world(
    mut commands: Commands,
    manifest: Res<SceneManifest>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    info!("=== POPULATING PORTFOLIO WORLD ===");

    let mut world_assets = WorldAssets::new(
        asset_server.load(&manifest.label_font),
        asset_server.load(&manifest.backdrop_texture),
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.rocket_model.clone())),
    );
    world_assets.track(manifest.label_font.clone(), world_assets.label_font.clone());
    world_assets.track(
        manifest.backdrop_texture.clone(),
        world_assets.backdrop_texture.clone(),
    );
    world_assets.track(
        manifest.rocket_model.clone(),
        world_assets.rocket_scene.clone(),
    );

    spawn_backdrop(
        &mut commands,
        &mut meshes,
        &mut materials,
        world_assets.backdrop_texture.clone(),
    );
    spawn_starfield(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut rand::thread_rng(),
        manifest.star_count,
        manifest.star_spread,
    );
    spawn_torus(&mut commands, &mut meshes, &mut materials);
    spawn_text_labels(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        world_assets.label_font.clone(),
        &manifest.labels,
    );
    spawn_rocket(
        &mut commands,
        world_assets.rocket_scene.clone(),
        manifest.rocket_colour(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::engine::systems::scroll_prompt::spawn_scroll_prompt;
        spawn_scroll_prompt(&mut commands);
    }

    commands.insert_resource(world_assets);
}
