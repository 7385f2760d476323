//! World plugin: spawns the arena bounds.
//!
//! Only the left, right and top edges are solid. The bottom is left open so the
//! ball can leave the playfield, which is how a round is lost.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_bounds);
}

fn spawn_bounds(mut commands: Commands, tunables: Res<Tunables>) {
    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Ball]);
    let field = tunables.playfield;
    let restitution = Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max);

    let mut spawn_wall = |name: &'static str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            restitution,
            Friction::ZERO,
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_wall(
        "WallTop",
        Vec2::new(field.x * 0.5, field.y + THICKNESS * 0.5),
        Vec2::new(field.x + THICKNESS * 2.0, THICKNESS),
    );
    spawn_wall(
        "WallLeft",
        Vec2::new(-THICKNESS * 0.5, field.y * 0.5),
        Vec2::new(THICKNESS, field.y * 2.0),
    );
    spawn_wall(
        "WallRight",
        Vec2::new(field.x + THICKNESS * 0.5, field.y * 0.5),
        Vec2::new(THICKNESS, field.y * 2.0),
    );
}
