use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::render::view::RenderLayers;
use constants::scene::{
    LABEL_FONT_PIXELS, LABEL_GLYPH_ADVANCE, LABEL_TEXTURE_HEIGHT, LABEL_TEXTURE_MAX_WIDTH,
    LABEL_TEXTURE_WIDTH,
};

use crate::engine::assets::scene_manifest::{TextLabel, colour_or_default};

/// Quad in the 3D world showing one label texture.
#[derive(Component)]
pub struct TextLabelPanel;

/// First render layer used for label cameras. Layer 0 is the main scene.
const FIRST_LABEL_LAYER: usize = 1;

/// Texture width that holds `text` on one line, with half a texture height
/// of margin. Returns `None` when even the widest texture would clip it.
pub fn label_texture_width(text: &str) -> Option<u32> {
    let glyphs = text.chars().count() as f32;
    let needed = (glyphs * LABEL_FONT_PIXELS * LABEL_GLYPH_ADVANCE).ceil() as u32
        + LABEL_TEXTURE_HEIGHT / 2;
    let width = needed.max(LABEL_TEXTURE_WIDTH);
    (width <= LABEL_TEXTURE_MAX_WIDTH).then_some(width)
}

/// World size of the quad for a label whose glyphs are `size` units tall,
/// drawn into a texture `texture_width` pixels wide.
pub fn panel_size(size: f32, texture_width: u32) -> Vec2 {
    let font_share = LABEL_FONT_PIXELS / LABEL_TEXTURE_HEIGHT as f32;
    let height = size / font_share;
    let aspect = texture_width as f32 / LABEL_TEXTURE_HEIGHT as f32;
    Vec2::new(height * aspect, height)
}

fn label_target_image(width: u32) -> Image {
    let size = Extent3d {
        width,
        height: LABEL_TEXTURE_HEIGHT,
        ..default()
    };

    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;
    image
}

/// Draw each label with a 2D camera into its own texture, then place the
/// texture on a double-sided quad in the world.
pub fn spawn_text_labels(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    font: Handle<Font>,
    labels: &[TextLabel],
) {
    for (index, label) in labels.iter().enumerate() {
        if label.text.trim().is_empty() {
            warn!("Skipping empty text label at index {}", index);
            continue;
        }

        let texture_width = label_texture_width(&label.text).unwrap_or_else(|| {
            warn!(
                "Text label {:?} is too long for one line and will be clipped",
                label.text
            );
            LABEL_TEXTURE_MAX_WIDTH
        });

        let layer = RenderLayers::layer(FIRST_LABEL_LAYER + index);
        let target = images.add(label_target_image(texture_width));

        commands.spawn((
            Camera2d,
            Camera {
                target: target.clone().into(),
                clear_color: ClearColorConfig::Custom(Color::NONE),
                order: -1 - index as isize,
                ..default()
            },
            layer.clone(),
        ));

        commands.spawn((
            Text2d::new(label.text.clone()),
            TextFont {
                font: font.clone(),
                font_size: LABEL_FONT_PIXELS,
                ..default()
            },
            TextColor(Color::WHITE),
            layer,
        ));

        let size = panel_size(label.size, texture_width);
        commands.spawn((
            Mesh3d(meshes.add(Rectangle::new(size.x, size.y))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: colour_or_default(&label.colour, "#ffffff"),
                base_color_texture: Some(target),
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                double_sided: true,
                ..default()
            })),
            label.transform(),
            TextLabelPanel,
        ));

        debug!("Spawned text label {:?}", label.text);
    }
}
