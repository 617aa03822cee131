use bevy::math::Vec3;

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const POINT_LIGHT_RANGE: f32 = 2000.0;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;

pub const HELPER_GRID_SIZE: f32 = 400.0;
pub const HELPER_GRID_DIVISIONS: u32 = 50;
pub const HELPER_LIGHT_MARKER_RADIUS: f32 = 1.0;

/// Seconds between FPS notifications to the host page.
pub const FPS_NOTIFICATION_INTERVAL: f32 = 0.5;
