//! Camera rig: a yawed pivot that carries the viewing camera.
//!
//! The pivot supplies the rig's height and heading; the child camera's local
//! z is the distance the intro approach closes.

/// Rig components and spawning.
pub mod camera_rig;
