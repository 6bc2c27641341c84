use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::state::GameState;
use super::UpdateSet;

pub struct InputPlugin;

/// Pointer position normalized to [-1, 1] on each axis (x rightward,
/// y upward). Holds its last value while the cursor is outside the window.
#[derive(Resource, Default)]
pub(crate) struct PointerState {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (pointer_system, start_click_system).in_set(UpdateSet::Input),
        );
    }
}

/// Window cursor coordinates (origin top-left, y down) to normalized device
/// coordinates (origin center, y up).
pub(crate) fn normalize_pointer(cursor: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (cursor.x / width) * 2.0 - 1.0,
        1.0 - (cursor.y / height) * 2.0,
    )
}

fn pointer_system(
    mut pointer: ResMut<PointerState>,
    q_window: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };
    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let normalized = normalize_pointer(cursor, window.width(), window.height());
    pointer.x = normalized.x;
    pointer.y = normalized.y;
}

/// A click anywhere starts the game, but only from the welcome screen.
fn start_click_system(mut state: ResMut<GameState>, buttons: Res<ButtonInput<MouseButton>>) {
    if state.welcome() && buttons.just_pressed(MouseButton::Left) {
        state.reset(false);
    }
}
