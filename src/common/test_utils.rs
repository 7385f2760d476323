//! Test helpers.
//!
//! `World::run_system_once` (via `RunSystemOnce`) runs one system without a schedule.
//! Systems that use `Commands` only enqueue structural changes, so we flush
//! afterwards to make spawns and inserts visible to assertions.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use super::state::RoundState;
use super::tunables::Tunables;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world with default tunables and the given round state already active.
pub fn world_in_round(state: RoundState) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(State::new(state));
    world.init_resource::<NextState<RoundState>>();
    world
}

/// Ensure the message buffer for `M` exists so readers/writers can run.
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Inject a collision start between two single-entity bodies.
pub fn write_collision(world: &mut World, a: Entity, b: Entity) {
    ensure_messages::<CollisionStart>(world);
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

/// The round state requested by the last system run, if any.
pub fn pending_round(world: &World) -> Option<RoundState> {
    match world.resource::<NextState<RoundState>>() {
        NextState::Pending(s) => Some(*s),
        _ => None,
    }
}
