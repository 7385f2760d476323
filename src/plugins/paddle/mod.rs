//! Paddle plugin.
//!
//! The paddle is kinematic: the ball bounces off it but can never push it.
//! Its x follows the pointer one-to-one with no clamping, so it can be dragged
//! partly off screen.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::manifest::{AssetKey, Skin};
use crate::common::messages::{PlaySfx, PointerMoved};
use crate::common::state::{FrameSystems, GameState};
use crate::common::tunables::Tunables;

#[derive(Component, Debug, Default)]
pub struct Paddle;

impl Paddle {
    /// Move to `x`, keeping the fixed height.
    #[inline]
    pub fn move_to(tf: &mut Transform, x: f32) {
        tf.translation.x = x;
    }

    /// Audio feedback only; a hit never changes the paddle.
    #[inline]
    pub fn hit(sfx: &mut MessageWriter<PlaySfx>) {
        sfx.write(PlaySfx(AssetKey::Paddle));
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, follow_pointer.in_set(FrameSystems::Input));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let size = AssetKey::Paddle.descriptor().display_size();
    let pos = tunables.canvas_to_world(Vec2::new(tunables.playfield.x * 0.5, tunables.paddle_canvas_y));

    commands.spawn((
        Name::new("Paddle"),
        Paddle,
        Skin(AssetKey::Paddle),
        Sprite {
            color: Color::srgb(0.35, 0.75, 0.4),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(pos.extend(1.0)),
        RigidBody::Kinematic,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(Layer::Paddle, [Layer::Ball]),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Only the latest pointer position of the frame matters.
fn follow_pointer(
    mut moved: MessageReader<PointerMoved>,
    mut q_paddle: Query<&mut Transform, With<Paddle>>,
) {
    let Some(last) = moved.read().last() else {
        return;
    };
    let Ok(mut tf) = q_paddle.single_mut() else {
        return;
    };
    Paddle::move_to(&mut tf, last.x);
}
