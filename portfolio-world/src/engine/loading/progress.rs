use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    /// Set when the manifest failed and the built-in defaults were used.
    pub manifest_fallback: bool,
    pub scene_populated: bool,
    pub assets_settled: bool,
}
