use crate::launch::{CAMERA_LIFT_ABOVE_ROCKET, LAUNCH_PAD_HEIGHT};

/// Yaw of the rig pivot around the vertical axis (radians).
pub const CAMERA_RIG_YAW: f32 = std::f32::consts::FRAC_PI_4;

/// Pivot height before any scroll input, keeping the rocket in frame.
pub const CAMERA_RIG_START_HEIGHT: f32 = LAUNCH_PAD_HEIGHT + CAMERA_LIFT_ABOVE_ROCKET;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;

/// Far plane covers the whole intro distance plus the backdrop sphere.
pub const CAMERA_FAR: f32 = 3000.0;
