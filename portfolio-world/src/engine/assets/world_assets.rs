use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;
use serde::Serialize;

/// Load status reported to the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

impl AssetStatus {
    pub fn from_load_state(state: Option<&LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(_)) => Self::Failed,
            _ => Self::Pending,
        }
    }

    pub fn is_settled(&self) -> bool {
        *self != Self::Pending
    }
}

/// A fetched asset the world depends on, with the last status we reported.
#[derive(Debug, Clone)]
pub struct TrackedAsset {
    pub name: String,
    pub handle: UntypedHandle,
    pub status: AssetStatus,
}

/// Handles for every asset fetched while populating the world.
#[derive(Resource, Default)]
pub struct WorldAssets {
    pub label_font: Handle<Font>,
    pub backdrop_texture: Handle<Image>,
    pub rocket_scene: Handle<Scene>,
    tracked: Vec<TrackedAsset>,
}

impl WorldAssets {
    pub fn new(
        label_font: Handle<Font>,
        backdrop_texture: Handle<Image>,
        rocket_scene: Handle<Scene>,
    ) -> Self {
        Self {
            label_font,
            backdrop_texture,
            rocket_scene,
            tracked: Vec::new(),
        }
    }

    /// Keep a handle alive and report its progress under `name`.
    pub fn track(&mut self, name: impl Into<String>, handle: impl Into<UntypedHandle>) {
        self.tracked.push(TrackedAsset {
            name: name.into(),
            handle: handle.into(),
            status: AssetStatus::Pending,
        });
    }

    pub fn tracked(&self) -> &[TrackedAsset] {
        &self.tracked
    }

    pub fn tracked_mut(&mut self) -> impl Iterator<Item = &mut TrackedAsset> {
        self.tracked.iter_mut()
    }

    pub fn all_settled(&self) -> bool {
        self.tracked.iter().all(|asset| asset.status.is_settled())
    }
}

impl TrackedAsset {
    pub fn id(&self) -> UntypedAssetId {
        self.handle.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_maps_to_status() {
        assert_eq!(AssetStatus::from_load_state(None), AssetStatus::Pending);
        assert_eq!(
            AssetStatus::from_load_state(Some(&LoadState::Loading)),
            AssetStatus::Pending
        );
        assert_eq!(
            AssetStatus::from_load_state(Some(&LoadState::Loaded)),
            AssetStatus::Loaded
        );
    }

    #[test]
    fn settled_only_when_nothing_pending() {
        let mut assets = WorldAssets::default();
        assert!(assets.all_settled());

        assets.track("font", Handle::<Font>::default());
        assets.track("rocket", Handle::<Scene>::default());
        assert!(!assets.all_settled());

        for asset in assets.tracked_mut() {
            asset.status = AssetStatus::Loaded;
        }
        assert!(assets.all_settled());
    }
}
