use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Populating,
    Running,
}

// Manifest is available, spawn the world next
pub fn transition_to_populating(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_loaded {
        info!("→ Transitioning to Populating state");
        next_state.set(AppState::Populating);
    }
}

// Final transition to running state
pub fn transition_to_running(
    mut loading_progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    loading_progress.scene_populated = true;
    info!("→ World populated, transitioning to Running state");
    next_state.set(AppState::Running);
}
