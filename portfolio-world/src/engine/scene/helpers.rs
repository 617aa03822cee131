use bevy::prelude::*;
use constants::render_settings::{
    HELPER_GRID_DIVISIONS, HELPER_GRID_SIZE, HELPER_LIGHT_MARKER_RADIUS,
};

use crate::engine::scene::lighting::KeyLight;

/// Ground grid and a marker on the key light, drawn every frame.
pub fn draw_helpers(mut gizmos: Gizmos, lights: Query<&GlobalTransform, With<KeyLight>>) {
    let spacing = HELPER_GRID_SIZE / HELPER_GRID_DIVISIONS as f32;
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        UVec2::splat(HELPER_GRID_DIVISIONS),
        Vec2::splat(spacing),
        Color::srgb(0.27, 0.27, 0.27),
    );

    for light in &lights {
        gizmos.sphere(
            Isometry3d::from_translation(light.translation()),
            HELPER_LIGHT_MARKER_RADIUS,
            Color::WHITE,
        );
    }
}
