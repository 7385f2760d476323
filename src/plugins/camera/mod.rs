//! Camera plugin (render-only).
//!
//! A fixed camera centred on the playfield, so world x lines up with canvas x
//! and world y is canvas y flipped.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let centre = tunables.playfield * 0.5;
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(centre.x, centre.y, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}
