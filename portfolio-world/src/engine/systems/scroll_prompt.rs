use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use constants::scene::SCROLL_PROMPT_TEXT;

use crate::engine::animation::sequencer::LaunchSequencer;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Component)]
pub struct ScrollPrompt;

/// Native overlay: centred near the bottom, hidden until the approach ends.
/// On the web the host page draws the prompt instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_scroll_prompt(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::FlexEnd,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(SCROLL_PROMPT_TEXT),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(48.0)),
                    ..default()
                },
                Visibility::Hidden,
                ScrollPrompt,
            ));
        });
}

/// Mirror the sequencer's prompt flag onto the overlay and the host page.
/// Only reacts when the flag actually changes.
pub fn sync_scroll_prompt(
    sequencer: Res<LaunchSequencer>,
    mut last_visible: Local<Option<bool>>,
    mut prompts: Query<&mut Visibility, With<ScrollPrompt>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let visible = sequencer.scroll_prompt_visible();
    if *last_visible == Some(visible) {
        return;
    }
    *last_visible = Some(visible);

    for mut visibility in &mut prompts {
        *visibility = if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    rpc_interface.send_notification(
        "scroll_prompt_visibility",
        serde_json::json!({
            "visible": visible,
            "phase": sequencer.phase().as_str(),
        }),
    );
}
