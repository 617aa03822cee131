use bevy::prelude::*;
use constants::scene::{
    TORUS_COLOUR, TORUS_MAJOR_RADIUS, TORUS_MAJOR_SEGMENTS, TORUS_MINOR_SEGMENTS,
    TORUS_SPIN_PER_FRAME, TORUS_TUBE_RADIUS,
};

use crate::engine::assets::scene_manifest::colour_or_default;

/// Accumulated Euler angles advanced by a fixed amount every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub per_frame: Vec3,
    pub angles: Vec3,
}

impl Spin {
    pub fn new(per_frame: Vec3) -> Self {
        Self {
            per_frame,
            angles: Vec3::ZERO,
        }
    }

    pub fn advance(&mut self) -> Quat {
        self.angles += self.per_frame;
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}

pub fn spawn_torus(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let torus = Torus {
        minor_radius: TORUS_TUBE_RADIUS,
        major_radius: TORUS_MAJOR_RADIUS,
    };

    commands.spawn((
        Mesh3d(meshes.add(
            torus
                .mesh()
                .major_resolution(TORUS_MAJOR_SEGMENTS)
                .minor_resolution(TORUS_MINOR_SEGMENTS),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour_or_default(TORUS_COLOUR, TORUS_COLOUR),
            ..default()
        })),
        Transform::IDENTITY,
        Spin::new(TORUS_SPIN_PER_FRAME),
    ));
}

pub fn spin_system(mut query: Query<(&mut Transform, &mut Spin)>) {
    for (mut transform, mut spin) in &mut query {
        transform.rotation = spin.advance();
    }
}
