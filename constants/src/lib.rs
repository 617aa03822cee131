//! Shared configuration for the portfolio world.
//!
//! Compile-time values only. Content that can change without a rebuild lives
//! in the scene manifest loaded at runtime.

/// Intro approach and scroll launch parameters.
pub mod launch;

/// Camera rig placement and projection.
pub mod camera;

/// Default scene content used when the manifest omits a field.
pub mod scene;

/// Asset paths relative to the asset root.
pub mod path;

/// Lighting and helper rendering settings.
pub mod render_settings;
