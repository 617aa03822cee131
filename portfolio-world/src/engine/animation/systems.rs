use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::launch::WHEEL_PIXELS_PER_LINE;

use crate::engine::animation::sequencer::{LaunchSequencer, TickOutcome};
use crate::engine::camera::camera_rig::{CameraRigPivot, RigCamera};
use crate::engine::scene::rocket::Rocket;

/// One scroll gesture in page convention: positive `delta_y` scrolls down.
///
/// Written from the mouse wheel and from `scroll` messages forwarded by the
/// host page.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    pub delta_y: f32,
}

/// Convert a wheel event into page-convention pixels. Bevy reports wheel-up
/// as positive, pages report scroll-down as positive.
pub fn wheel_delta_y(event: &MouseWheel) -> f32 {
    match event.unit {
        MouseScrollUnit::Line => -event.y * WHEEL_PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => -event.y,
    }
}

/// Forward mouse wheel events as scroll input.
pub fn collect_wheel_input(
    mut wheel_events: EventReader<MouseWheel>,
    mut scroll_events: EventWriter<ScrollInput>,
) {
    for event in wheel_events.read() {
        scroll_events.write(ScrollInput {
            delta_y: wheel_delta_y(event),
        });
    }
}

/// Per-frame intro tick. Moves the rig camera until it arrives.
pub fn tick_launch_sequence(
    mut sequencer: ResMut<LaunchSequencer>,
    mut camera_query: Query<&mut Transform, With<RigCamera>>,
) {
    if sequencer.scroll_prompt_visible() {
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    if sequencer.tick(&mut camera_transform) == TickOutcome::Arrived {
        info!(
            "Camera approach complete at z = {:.1}, scroll launch enabled",
            camera_transform.translation.z
        );
    }
}

/// Apply scroll input to the rocket and the rig pivot.
///
/// Registered once for the whole run. Input is always drained so nothing
/// queued during the intro replays after the transition.
pub fn apply_scroll_input(
    sequencer: Res<LaunchSequencer>,
    mut scroll_events: EventReader<ScrollInput>,
    mut rocket_query: Query<&mut Transform, (With<Rocket>, Without<CameraRigPivot>)>,
    mut pivot_query: Query<&mut Transform, (With<CameraRigPivot>, Without<Rocket>)>,
) {
    if !sequencer.scroll_prompt_visible() {
        scroll_events.clear();
        return;
    }

    let (Ok(mut rocket), Ok(mut pivot)) = (rocket_query.single_mut(), pivot_query.single_mut())
    else {
        if !scroll_events.is_empty() {
            debug!("Scroll input dropped, rocket not spawned yet");
        }
        scroll_events.clear();
        return;
    };

    for event in scroll_events.read() {
        if let Some(height) = sequencer.on_scroll(event.delta_y, &mut rocket, &mut pivot) {
            debug!("Rocket height {:.1}", height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::sequencer::AnimationPhase;
    use crate::engine::camera::camera_rig::{rig_camera_transform, rig_pivot_transform};

    struct Rig {
        pivot: Entity,
        camera: Entity,
        rocket: Entity,
    }

    fn test_app() -> (App, Rig) {
        let mut app = App::new();
        app.add_event::<MouseWheel>()
            .add_event::<ScrollInput>()
            .init_resource::<LaunchSequencer>()
            .add_systems(
                Update,
                (
                    tick_launch_sequence,
                    collect_wheel_input,
                    apply_scroll_input,
                )
                    .chain(),
            );

        let camera = app
            .world_mut()
            .spawn((rig_camera_transform(), RigCamera))
            .id();
        let pivot = app
            .world_mut()
            .spawn((rig_pivot_transform(), CameraRigPivot))
            .add_child(camera)
            .id();
        let rocket = app.world_mut().spawn((Transform::IDENTITY, Rocket)).id();

        (app, Rig { pivot, camera, rocket })
    }

    fn translation(app: &App, entity: Entity) -> Vec3 {
        app.world().get::<Transform>(entity).unwrap().translation
    }

    fn phase(app: &App) -> AnimationPhase {
        app.world().resource::<LaunchSequencer>().phase()
    }

    fn wheel(y: f32, unit: MouseScrollUnit) -> MouseWheel {
        MouseWheel {
            unit,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn frames_drive_camera_until_arrival() {
        let (mut app, rig) = test_app();

        for _ in 0..134 {
            app.update();
        }
        assert_eq!(translation(&app, rig.camera).z, 60.0);
        assert_eq!(phase(&app), AnimationPhase::Intro);

        app.update();
        assert_eq!(phase(&app), AnimationPhase::Interactive);
        assert!(app.world().resource::<LaunchSequencer>().scroll_prompt_visible());

        for _ in 0..20 {
            app.update();
        }
        assert_eq!(translation(&app, rig.camera).z, 60.0);
        assert_eq!(translation(&app, rig.rocket), Vec3::ZERO);
        assert_eq!(translation(&app, rig.pivot).y, 20.0);
    }

    #[test]
    fn scroll_during_intro_is_discarded() {
        let (mut app, rig) = test_app();

        app.world_mut().send_event(ScrollInput { delta_y: 500.0 });
        for _ in 0..135 {
            app.update();
        }
        app.update();

        assert_eq!(phase(&app), AnimationPhase::Interactive);
        assert_eq!(translation(&app, rig.rocket).y, 0.0);
        assert_eq!(translation(&app, rig.pivot).y, 20.0);
    }

    #[test]
    fn scroll_after_arrival_launches_rocket() {
        let (mut app, rig) = test_app();
        for _ in 0..135 {
            app.update();
        }

        app.world_mut().send_event(ScrollInput { delta_y: 100.0 });
        app.update();

        assert_eq!(translation(&app, rig.rocket).y, 20.0);
        assert_eq!(translation(&app, rig.pivot).y, 40.0);
        assert_eq!(translation(&app, rig.camera).z, 60.0);
    }

    #[test]
    fn wheel_down_in_pixels_climbs() {
        let (mut app, rig) = test_app();
        for _ in 0..135 {
            app.update();
        }

        app.world_mut().send_event(wheel(-50.0, MouseScrollUnit::Pixel));
        app.update();

        assert_eq!(translation(&app, rig.rocket).y, 10.0);
        assert_eq!(translation(&app, rig.pivot).y, 30.0);
    }

    #[test]
    fn wheel_up_cannot_drop_below_pad() {
        let (mut app, rig) = test_app();
        for _ in 0..135 {
            app.update();
        }

        app.world_mut().send_event(wheel(3.0, MouseScrollUnit::Line));
        app.update();

        assert_eq!(translation(&app, rig.rocket).y, 0.0);
        assert_eq!(translation(&app, rig.pivot).y, 20.0);
    }

    #[test]
    fn line_deltas_scale_to_pixels() {
        let event = wheel(-3.0, MouseScrollUnit::Line);

        assert!((wheel_delta_y(&event) - 100.0).abs() < 1e-4);
    }
}
