//! Loading flow: scene manifest first, then per-asset progress tracking.

/// Scene manifest loading with fallback to defaults.
pub mod manifest_loader;

/// Loading milestones shared with the host page.
pub mod progress;

/// Load status tracking for fonts, models and textures.
pub mod asset_tracking;
