//! Ball plugin.
//!
//! The ball is the only dynamic body. It owns `CollisionEventsEnabled`, so every
//! `CollisionStart` the round cares about has the ball on one side.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::manifest::{AssetKey, Skin};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component, Debug, Default)]
pub struct Ball;

impl Ball {
    /// Initial kick-off.
    #[inline]
    pub fn launch(vel: &mut LinearVelocity, tunables: &Tunables) {
        vel.0 = tunables.launch_velocity;
    }

    /// Steer by where the ball met the paddle: `offset` is `ball.x - paddle.x`.
    #[inline]
    pub fn nudge(vel: &mut LinearVelocity, offset: f32, tunables: &Tunables) {
        vel.x += tunables.nudge_factor * offset;
    }

    /// Canvas-space rest point above the paddle while waiting to serve.
    #[inline]
    pub fn rest_position(paddle_x: f32, tunables: &Tunables) -> Vec2 {
        tunables.canvas_to_world(Vec2::new(paddle_x, tunables.ball_rest_canvas_y))
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn);
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let size = AssetKey::Ball.descriptor().display_size();
    let pos = Ball::rest_position(tunables.playfield.x * 0.5, &tunables);

    // Perfectly elastic against everything it touches.
    let restitution = Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max);
    let friction = Friction::ZERO.with_combine_rule(CoefficientCombine::Min);

    commands.spawn((
        Name::new("Ball"),
        Ball,
        Skin(AssetKey::Ball),
        Sprite {
            color: Color::srgb(0.95, 0.9, 0.7),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(pos.extend(2.0)),
        RigidBody::Dynamic,
        Collider::circle(size.x * 0.5),
        CollisionLayers::new(Layer::Ball, [Layer::World, Layer::Paddle, Layer::Brick]),
        restitution,
        friction,
        LockedAxes::ROTATION_LOCKED,
        SleepingDisabled,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

/// `OnEnter(Playing)`: the one launch per serve.
pub fn launch_ball(tunables: Res<Tunables>, mut q_ball: Query<&mut LinearVelocity, With<Ball>>) {
    let Ok(mut vel) = q_ball.single_mut() else {
        debug!("No ball to launch");
        return;
    };
    Ball::launch(&mut vel, &tunables);
}

#[cfg(test)]
mod tests;
