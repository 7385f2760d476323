//! Core plugin: shared resources, message buffers and frame ordering.

use bevy::prelude::*;

use crate::common::messages::{PlaySfx, PointerMoved, PointerReleased};
use crate::common::state::{FrameSystems, GameState};
use crate::common::tunables::Tunables;

/// Host page background (`#2d2d2d`).
const BACKGROUND: Color = Color::srgb(0.176, 0.176, 0.176);

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(BACKGROUND));

    app.add_message::<PointerMoved>()
        .add_message::<PointerReleased>()
        .add_message::<PlaySfx>();

    app.configure_sets(
        Update,
        (
            FrameSystems::Input,
            FrameSystems::Bricks,
            FrameSystems::Hud,
            FrameSystems::Round,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
