use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;

use crate::rpc::WebRpcInterface;
use crate::rpc::web_rpc::smoothed_fps;

/// Seconds between `fps_update` notifications.
const FPS_NOTIFY_INTERVAL: f32 = 0.5;

#[derive(Component)]
pub struct FpsText;

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    if current_time - *last_send_time >= FPS_NOTIFY_INTERVAL {
        let fps = smoothed_fps(&diagnostics);
        if fps > 0.0 {
            rpc_interface.send_notification("fps_update", serde_json::json!({ "fps": fps }));
            *last_send_time = current_time;
        }
    }
}

/// Native FPS overlay in the bottom-right corner.
pub fn spawn_fps_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.5)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let fps = smoothed_fps(&diagnostics);
    if fps <= 0.0 {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.1}");
    }
}
