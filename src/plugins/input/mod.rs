//! Pointer input plugin (render-only).
//!
//! Samples the window and writes gameplay intent:
//! - cursor movement → `PointerMoved` (world x)
//! - left button release → `PointerReleased`
//!
//! Gameplay never reads window or mouse state directly, which keeps it headless.

use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::common::messages::{PointerMoved, PointerReleased};
use crate::common::state::{FrameSystems, GameState};
use crate::plugins::camera::MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (track_cursor, detect_release)
            .before(FrameSystems::Input)
            .run_if(in_state(GameState::InGame)),
    );
}

fn track_cursor(
    mut cursor: MessageReader<CursorMoved>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut writer: MessageWriter<PointerMoved>,
) {
    let Some(last) = cursor.read().last() else {
        return;
    };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    let world = match camera.viewport_to_world_2d(camera_tf, last.position) {
        Ok(p) => p,
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); return; }
    };

    writer.write(PointerMoved { x: world.x });
}

fn detect_release(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut writer: MessageWriter<PointerReleased>,
) {
    let mouse = buttons.is_some_and(|b| b.just_released(MouseButton::Left));
    let touch = touches.is_some_and(|t| t.any_just_released());
    if mouse || touch {
        writer.write(PointerReleased);
    }
}
