use bevy::prelude::*;
use bevy::render::render_resource::Face;
use constants::scene::{BACKDROP_RADIUS, BACKDROP_SEGMENTS};

#[derive(Component)]
pub struct Backdrop;

/// Sphere textured on its inside so the scene sits inside the image.
pub fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) {
    commands.spawn((
        Mesh3d(meshes.add(
            Sphere::new(BACKDROP_RADIUS)
                .mesh()
                .uv(BACKDROP_SEGMENTS, BACKDROP_SEGMENTS),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            cull_mode: Some(Face::Front),
            ..default()
        })),
        Transform::IDENTITY,
        Backdrop,
    ));
}
