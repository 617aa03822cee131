use bevy::prelude::*;
use constants::scene::{STAR_COLOUR, STAR_RADIUS, STAR_SEGMENTS};
use rand::Rng;

use crate::engine::assets::scene_manifest::colour_or_default;

#[derive(Component)]
pub struct Star;

/// Uniform position in the cube of edge `spread` centred on the origin.
pub fn random_star_position(rng: &mut impl Rng, spread: f32) -> Vec3 {
    let half = spread * 0.5;
    let mut coordinate = || rng.gen_range(-half..half);
    Vec3::new(coordinate(), coordinate(), coordinate())
}

/// Scatter `count` stars. All stars share one mesh and one material.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
    count: usize,
    spread: f32,
) {
    if count == 0 || spread <= 0.0 {
        warn!("Starfield skipped: count {}, spread {}", count, spread);
        return;
    }

    let mesh = meshes.add(
        Sphere::new(STAR_RADIUS)
            .mesh()
            .uv(STAR_SEGMENTS, STAR_SEGMENTS),
    );
    let material = materials.add(StandardMaterial {
        base_color: colour_or_default(STAR_COLOUR, STAR_COLOUR),
        ..default()
    });

    let stars: Vec<_> = (0..count)
        .map(|_| {
            (
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(random_star_position(rng, spread)),
                Star,
            )
        })
        .collect();
    commands.spawn_batch(stars);

    debug!("Spawned {} stars", count);
}
