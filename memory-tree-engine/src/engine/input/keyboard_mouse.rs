use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use super::morph_inputs::{MorphInputs, RotationSettings};

/// Pan and zoom change per second while a key is held.
const VIEW_KEY_RATE: f32 = 0.8;

/// Maps keyboard and mouse onto `MorphInputs`.
///
/// Space toggles the mode, B toggles the rotation boost, left click fires a
/// trigger at the cursor, arrows pan and `=`/`-` zoom.
pub fn keyboard_mouse_input_system(
    mut inputs: ResMut<MorphInputs>,
    rotation: Res<RotationSettings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        inputs.mode = inputs.mode.toggled();
        info!("Morph mode: {:?}", inputs.mode);
    }

    if keyboard.just_pressed(KeyCode::KeyB) {
        inputs.rotation_boost = if inputs.rotation_boost > 0.0 {
            0.0
        } else {
            rotation.boost
        };
        info!("Rotation boost: {:.2}", inputs.rotation_boost);
    }

    if let Ok(window) = windows.single() {
        let pointer = window
            .cursor_position()
            .and_then(|cursor| cursor_fraction(cursor, window.size()));
        inputs.set_pointer(pointer);
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        inputs.trigger();
    }

    let mut pan_input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        pan_input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        pan_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        pan_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        pan_input.y -= 1.0;
    }

    let mut zoom_input = 0.0;
    if keyboard.pressed(KeyCode::Equal) {
        zoom_input += 1.0;
    }
    if keyboard.pressed(KeyCode::Minus) {
        zoom_input -= 1.0;
    }

    if pan_input != Vec2::ZERO || zoom_input != 0.0 {
        let step = VIEW_KEY_RATE * time.delta_secs();
        let pan = inputs.pan + pan_input * step;
        let zoom = inputs.zoom + zoom_input * step;
        inputs.set_view(pan, zoom);
    }
}

/// Cursor position in window pixels to screen fractions (origin top-left).
pub fn cursor_fraction(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(cursor / window_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_fraction_normalises_by_window_size() {
        let fraction = cursor_fraction(Vec2::new(200.0, 150.0), Vec2::new(800.0, 600.0));
        assert_eq!(fraction, Some(Vec2::new(0.25, 0.25)));
    }

    #[test]
    fn degenerate_window_has_no_pointer() {
        assert_eq!(cursor_fraction(Vec2::ONE, Vec2::ZERO), None);
    }
}
