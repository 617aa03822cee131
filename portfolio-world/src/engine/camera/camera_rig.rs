use bevy::prelude::*;
use constants::camera::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_RIG_START_HEIGHT, CAMERA_RIG_YAW,
};
use constants::launch::INTRO_START_DISTANCE;

/// Pivot ("holder") of the camera rig. Its height follows the rocket.
#[derive(Component)]
pub struct CameraRigPivot;

/// Perspective camera parented to the pivot.
#[derive(Component)]
pub struct RigCamera;

/// Initial pivot transform: lifted above the launch pad and yawed.
pub fn rig_pivot_transform() -> Transform {
    Transform::from_xyz(0.0, CAMERA_RIG_START_HEIGHT, 0.0)
        .with_rotation(Quat::from_rotation_y(CAMERA_RIG_YAW))
}

/// Initial camera transform local to the pivot, looking down -Z at the pivot.
pub fn rig_camera_transform() -> Transform {
    Transform::from_xyz(0.0, 0.0, INTRO_START_DISTANCE)
}

pub fn spawn_camera_rig(commands: &mut Commands) -> Entity {
    commands
        .spawn((rig_pivot_transform(), Visibility::default(), CameraRigPivot))
        .with_children(|pivot| {
            pivot.spawn((
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: CAMERA_FOV_DEGREES.to_radians(),
                    near: CAMERA_NEAR,
                    far: CAMERA_FAR,
                    ..default()
                }),
                rig_camera_transform(),
                IsDefaultUiCamera,
                RigCamera,
            ));
        })
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_starts_at_intro_distance_facing_pivot() {
        let camera = rig_camera_transform();

        assert_eq!(camera.translation, Vec3::new(0.0, 0.0, INTRO_START_DISTANCE));
        assert!(camera.forward().dot(Vec3::NEG_Z) > 0.999);
    }

    #[test]
    fn pivot_starts_one_lift_above_launch_pad() {
        let pivot = rig_pivot_transform();

        assert_eq!(pivot.translation.y, 20.0);
        assert_eq!(pivot.translation.x, 0.0);
        assert_eq!(pivot.translation.z, 0.0);
    }
}
