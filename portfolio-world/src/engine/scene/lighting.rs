use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION, POINT_LIGHT_RANGE,
};

#[derive(Component)]
pub struct KeyLight;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
        KeyLight,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });
}
