use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use constants::launch::LAUNCH_PAD_HEIGHT;
use constants::scene::ROCKET_YAW;

/// Root of the rocket scene. This is the object scroll input launches.
#[derive(Component)]
pub struct Rocket;

/// Colour applied to the rocket body once its scene is instantiated.
#[derive(Component, Clone, Copy)]
pub struct RocketPaint(pub Color);

pub fn rocket_transform() -> Transform {
    Transform::from_xyz(0.0, LAUNCH_PAD_HEIGHT, 0.0)
        .with_rotation(Quat::from_rotation_y(ROCKET_YAW))
}

pub fn spawn_rocket(commands: &mut Commands, scene: Handle<Scene>, paint: Color) -> Entity {
    commands
        .spawn((
            SceneRoot(scene),
            rocket_transform(),
            Rocket,
            RocketPaint(paint),
        ))
        .observe(paint_rocket)
        .id()
}

/// Recolour the first mesh of the rocket scene. The glTF material is shared
/// by nothing else in the world, so it is edited in place.
fn paint_rocket(
    trigger: Trigger<SceneInstanceReady>,
    paints: Query<&RocketPaint>,
    children: Query<&Children>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let root = trigger.target();
    let Ok(RocketPaint(colour)) = paints.get(root) else {
        return;
    };

    let Some(body) = children
        .iter_descendants(root)
        .find_map(|entity| mesh_materials.get(entity).ok())
    else {
        warn!("Rocket scene has no mesh to paint");
        return;
    };

    match materials.get_mut(&body.0) {
        Some(material) => {
            material.base_color = *colour;
            info!("Rocket scene ready");
        }
        None => warn!("Rocket material not loaded, keeping original colour"),
    }
}
