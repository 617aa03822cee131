/// Camera-local z the intro approach starts from.
pub const INTRO_START_DISTANCE: f32 = 1400.0;

/// Distance removed from the camera-local z each frame while approaching.
pub const INTRO_APPROACH_STEP: f32 = 10.0;

/// The approach stops once the camera-local z is at or below this value.
pub const INTRO_STOP_DISTANCE: f32 = 60.0;

/// Wheel delta units per unit of rocket climb.
pub const SCROLL_DELTA_DIVISOR: f32 = 5.0;

/// Height of the camera pivot above the rocket.
pub const CAMERA_LIFT_ABOVE_ROCKET: f32 = 20.0;

/// The rocket never sinks below the launch pad.
pub const LAUNCH_PAD_HEIGHT: f32 = 0.0;

/// Pixel delta of one wheel line, matching a browser notch of three lines per 100px.
pub const WHEEL_PIXELS_PER_LINE: f32 = 100.0 / 3.0;
