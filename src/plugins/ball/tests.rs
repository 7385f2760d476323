use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::Ball;

#[test]
fn spawn_creates_resting_ball() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let mut q = world.query_filtered::<(&Transform, &LinearVelocity), With<Ball>>();
    let (tf, vel) = q.single(&world).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(400.0, 150.0));
    assert_eq!(vel.0, Vec2::ZERO);
}

#[test]
fn launch_sets_fixed_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    let ball = world.spawn((Ball, LinearVelocity(Vec2::new(3.0, 4.0)))).id();

    run_system_once(&mut world, super::launch_ball);

    // Canvas (-75, 300) is down-left; world y points up.
    assert_eq!(world.get::<LinearVelocity>(ball).unwrap().0, Vec2::new(-75.0, -300.0));
}

#[test]
fn nudge_only_changes_horizontal_speed() {
    let t = Tunables::default();
    let mut vel = LinearVelocity(Vec2::new(-75.0, 300.0));

    Ball::nudge(&mut vel, 12.5, &t);
    assert_eq!(vel.0, Vec2::new(-50.0, 300.0));

    Ball::nudge(&mut vel, -40.0, &t);
    assert_eq!(vel.0, Vec2::new(-130.0, 300.0));
}

#[test]
fn rest_position_tracks_paddle_x() {
    let t = Tunables::default();
    assert_eq!(Ball::rest_position(-20.0, &t), Vec2::new(-20.0, 150.0));
}
