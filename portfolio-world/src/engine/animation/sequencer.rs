use bevy::prelude::*;
use constants::launch::{
    CAMERA_LIFT_ABOVE_ROCKET, INTRO_APPROACH_STEP, INTRO_STOP_DISTANCE, LAUNCH_PAD_HEIGHT,
    SCROLL_DELTA_DIVISOR,
};

/// Phase of the landing animation. `Intro` moves to `Interactive` once and never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    #[default]
    Intro,
    Interactive,
}

impl AnimationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Interactive => "interactive",
        }
    }
}

/// Result of a single frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Camera moved one step closer.
    Approaching,
    /// Approach finished on this tick; scroll input is now live.
    Arrived,
    /// Nothing left to animate per frame.
    Idle,
}

/// Tunables for the approach and the scroll launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSettings {
    pub approach_step: f32,
    pub stop_distance: f32,
    pub scroll_divisor: f32,
    pub camera_lift: f32,
    pub pad_height: f32,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            approach_step: INTRO_APPROACH_STEP,
            stop_distance: INTRO_STOP_DISTANCE,
            scroll_divisor: SCROLL_DELTA_DIVISOR,
            camera_lift: CAMERA_LIFT_ABOVE_ROCKET,
            pad_height: LAUNCH_PAD_HEIGHT,
        }
    }
}

/// Owns the animation phase and decides how each frame and each scroll
/// gesture moves the camera rig and the rocket.
///
/// The approach step is per frame, not per second, so its wall-clock speed
/// follows the frame rate. The camera stops at the first distance that is
/// not above `stop_distance`, without snapping to it.
#[derive(Resource, Debug, Clone, Default)]
pub struct LaunchSequencer {
    phase: AnimationPhase,
    settings: LaunchSettings,
}

impl LaunchSequencer {
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Whether the presentation layer should show the "Scroll To Launch" prompt.
    pub fn scroll_prompt_visible(&self) -> bool {
        self.phase == AnimationPhase::Interactive
    }

    /// Advance the intro by one frame. `camera` is the camera's transform
    /// local to the rig pivot.
    pub fn tick(&mut self, camera: &mut Transform) -> TickOutcome {
        match self.phase {
            AnimationPhase::Intro if camera.translation.z > self.settings.stop_distance => {
                camera.translation.z -= self.settings.approach_step;
                TickOutcome::Approaching
            }
            AnimationPhase::Intro => {
                self.phase = AnimationPhase::Interactive;
                TickOutcome::Arrived
            }
            AnimationPhase::Interactive => TickOutcome::Idle,
        }
    }

    /// Apply one scroll gesture. `delta_y` is positive when scrolling down the
    /// page. Returns the new rocket height, or `None` while still in the intro.
    pub fn on_scroll(
        &self,
        delta_y: f32,
        rocket: &mut Transform,
        pivot: &mut Transform,
    ) -> Option<f32> {
        if self.phase != AnimationPhase::Interactive {
            return None;
        }

        let loc = (rocket.translation.y + delta_y / self.settings.scroll_divisor)
            .max(self.settings.pad_height);
        rocket.translation.y = loc;
        pivot.translation.y = loc + self.settings.camera_lift;
        Some(loc)
    }
}
