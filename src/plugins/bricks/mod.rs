//! Bricks plugin: a fixed grid of immovable, swaying targets.
//!
//! Bricks are spawned once per `InGame` and never despawned. A hit disables a
//! brick without structural changes: it is hidden and its collision filters are
//! emptied, so it stops generating contacts. `reset` undoes both.
//!
//! Every brick advances its sway counter each frame even while disabled, so a
//! reset brick picks up in phase with its neighbours.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::manifest::{AssetKey, Skin};
use crate::common::messages::PlaySfx;
use crate::common::state::{FrameSystems, GameState};
use crate::common::tunables::Tunables;

#[derive(Component, Debug, Clone)]
pub struct Brick {
    base: Vec2,
    counter: u32,
    enabled: bool,
}

impl Brick {
    /// Pin the sway origin to where the brick was spawned.
    pub fn at(base: Vec2) -> Self {
        Self {
            base,
            counter: 0,
            enabled: true,
        }
    }

    #[inline]
    pub fn base(&self) -> Vec2 {
        self.base
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance one frame and return the new position.
    pub fn advance(&mut self, tunables: &Tunables) -> Vec2 {
        self.counter = self.counter.wrapping_add(1);
        self.base + sway_offset(self.counter, self.base.x, tunables)
    }

    /// Returns false if the brick was already out of play.
    pub fn hit(&mut self) -> bool {
        std::mem::replace(&mut self.enabled, false)
    }

    /// Back in play at the base position.
    pub fn reset(&mut self) -> Vec2 {
        self.enabled = true;
        self.base
    }
}

/// Sway displacement after `counter` frames (one degree per frame).
///
/// Vertical amplitude is constant; horizontal amplitude shrinks to zero at the
/// pivot column and flips sign past it.
pub fn sway_offset(counter: u32, base_x: f32, tunables: &Tunables) -> Vec2 {
    let s = ((counter % 360) as f32).to_radians().sin();
    let amp = tunables.oscillation_amplitude;
    let pivot = tunables.oscillation_pivot_x;
    Vec2::new(amp * s * (pivot - base_x) / pivot, amp * s)
}

#[inline]
fn live_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Brick, [Layer::Ball])
}

#[inline]
fn inert_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Brick, [] as [Layer; 0])
}

/// Take a brick out of play. Writes the hit sound only for a live brick.
pub fn hit_brick(
    brick: &mut Brick,
    vis: &mut Visibility,
    layers: &mut CollisionLayers,
    sfx: &mut MessageWriter<PlaySfx>,
) -> bool {
    if !brick.hit() {
        return false;
    }
    *vis = Visibility::Hidden;
    *layers = inert_layers();
    sfx.write(PlaySfx(AssetKey::Brick));
    true
}

/// Return a brick to play at its base position.
pub fn reset_brick(
    brick: &mut Brick,
    tf: &mut Transform,
    vis: &mut Visibility,
    layers: &mut CollisionLayers,
) {
    let base = brick.reset();
    tf.translation.x = base.x;
    tf.translation.y = base.y;
    *vis = Visibility::Inherited;
    *layers = live_layers();
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_grid)
        .add_systems(Update, sway.in_set(FrameSystems::Bricks));
}

fn spawn_grid(mut commands: Commands, tunables: Res<Tunables>) {
    let size = AssetKey::Brick.descriptor().display_size();
    let restitution = Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max);

    let cells = (0..tunables.brick_columns)
        .flat_map(|col| (0..tunables.brick_rows).map(move |row| (col, row)));

    for (col, row) in cells {
        let canvas = tunables.brick_origin + tunables.brick_spacing * Vec2::new(col as f32, row as f32);
        let base = tunables.canvas_to_world(canvas);

        commands.spawn((
            Name::new(format!("Brick{col}x{row}")),
            Brick::at(base),
            Skin(AssetKey::Brick),
            Sprite {
                color: Color::srgb(0.95, 0.8, 0.25),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(base.extend(1.0)),
            Visibility::Inherited,
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            live_layers(),
            restitution,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Runs for every brick regardless of whether it is in play.
fn sway(tunables: Res<Tunables>, mut q: Query<(&mut Brick, &mut Transform)>) {
    for (mut brick, mut tf) in &mut q {
        let pos = brick.advance(&tunables);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
    }
}
