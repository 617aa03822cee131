use bevy::prelude::*;
use constants::path::{BACKDROP_TEXTURE_PATH, LABEL_FONT_PATH, ROCKET_MODEL_PATH};
use constants::scene::{
    ROCKET_COLOUR, STAR_COUNT, STAR_SPREAD, WELCOME_TEXT, WELCOME_TEXT_COLOUR,
    WELCOME_TEXT_POSITION, WELCOME_TEXT_SIZE, WELCOME_TEXT_YAW,
};
use serde::{Deserialize, Serialize};

/// A text label placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLabel {
    pub text: String,
    pub position: [f32; 3],
    /// Rotation about the vertical axis, radians.
    pub yaw: f32,
    /// Glyph height in world units.
    pub size: f32,
    pub colour: String,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            text: WELCOME_TEXT.to_string(),
            position: WELCOME_TEXT_POSITION.to_array(),
            yaw: WELCOME_TEXT_YAW,
            size: WELCOME_TEXT_SIZE,
            colour: WELCOME_TEXT_COLOUR.to_string(),
        }
    }
}

impl TextLabel {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .with_rotation(Quat::from_rotation_y(self.yaw))
    }
}

/// Everything the world spawns. Mirrors `world.scene.json`; missing fields
/// take the built-in defaults so an empty object is a valid manifest.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneManifest {
    pub star_count: usize,
    pub star_spread: f32,
    pub backdrop_texture: String,
    pub label_font: String,
    pub labels: Vec<TextLabel>,
    pub rocket_model: String,
    pub rocket_colour: String,
    pub show_helpers: bool,
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            star_spread: STAR_SPREAD,
            backdrop_texture: BACKDROP_TEXTURE_PATH.to_string(),
            label_font: LABEL_FONT_PATH.to_string(),
            labels: vec![TextLabel::default()],
            rocket_model: ROCKET_MODEL_PATH.to_string(),
            rocket_colour: ROCKET_COLOUR.to_string(),
            show_helpers: false,
        }
    }
}

impl SceneManifest {
    pub fn rocket_colour(&self) -> Color {
        colour_or_default(&self.rocket_colour, ROCKET_COLOUR)
    }
}

/// Parse a `#rrggbb` colour, logging and falling back on a bad string.
pub fn colour_or_default(hex: &str, fallback: &str) -> Color {
    match Srgba::hex(hex) {
        Ok(colour) => colour.into(),
        Err(e) => {
            warn!("Invalid colour {:?} ({}), using {}", hex, e, fallback);
            Srgba::hex(fallback).map(Color::from).unwrap_or(Color::WHITE)
        }
    }
}

/// Run condition for the debug helpers.
pub fn helpers_enabled(manifest: Option<Res<SceneManifest>>) -> bool {
    manifest.is_some_and(|m| m.show_helpers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest: SceneManifest = serde_json::from_str("{}").unwrap();

        assert_eq!(manifest, SceneManifest::default());
        assert_eq!(manifest.star_count, 1600);
        assert_eq!(manifest.labels.len(), 1);
        assert_eq!(manifest.labels[0].text, "Joshua");
    }

    #[test]
    fn partial_label_keeps_remaining_defaults() {
        let manifest: SceneManifest = serde_json::from_str(
            r#"{
                "star_count": 10,
                "labels": [
                    { "text": "Joshua" },
                    { "text": "Engineer", "position": [30.0, -15.0, -30.0], "size": 5.0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.star_count, 10);
        assert_eq!(manifest.star_spread, 400.0);
        assert_eq!(manifest.labels[1].position, [30.0, -15.0, -30.0]);
        assert_eq!(manifest.labels[1].size, 5.0);
        assert_eq!(manifest.labels[1].colour, "#696969");
        assert_eq!(manifest.labels[1].yaw, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn rocket_colour_parses_hex() {
        let manifest = SceneManifest::default();

        assert_eq!(
            manifest.rocket_colour(),
            Color::Srgba(Srgba::rgb_u8(0x33, 0x99, 0xcc))
        );
    }

    #[test]
    fn bad_colour_falls_back() {
        assert_eq!(
            colour_or_default("not-a-colour", "#ff6347"),
            Color::Srgba(Srgba::rgb_u8(0xff, 0x63, 0x47))
        );
    }

    #[test]
    fn label_transform_applies_yaw() {
        let transform = TextLabel::default().transform();

        assert_eq!(transform.translation, Vec3::new(30.0, 0.0, -30.0));
        assert!(transform.forward().dot(Vec3::X) > 0.999);
    }
}
