//! Scene content: backdrop, stars, torus, labels, rocket and lights.
//!
//! Everything here is spawned once. The only per-frame scene work outside
//! the landing animation is the torus spin and the optional helpers.

/// Textured inward-facing sphere around the scene.
pub mod backdrop;

/// Grid and light marker gizmos for layout debugging.
pub mod helpers;

/// Point and ambient lights.
pub mod lighting;

/// One-shot world population from the scene manifest.
pub mod populate;

/// The launchable rocket model and its recolouring.
pub mod rocket;

/// Randomly scattered star spheres.
pub mod starfield;

/// Text drawn to offscreen textures and shown on quads in the world.
pub mod text_labels;

/// Spinning torus.
pub mod torus;
