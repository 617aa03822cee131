//! World content description and loaded asset handles.
//!
//! The scene manifest is the runtime configuration for what gets spawned;
//! world assets track the handles of everything fetched from the server.

/// Scene manifest loaded from JSON, with defaults for every field.
pub mod scene_manifest;

/// Handles of fonts, models and textures plus their load status.
pub mod world_assets;
