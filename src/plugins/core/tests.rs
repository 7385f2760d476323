use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::messages::{PlaySfx, PointerMoved, PointerReleased};
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn registers_gameplay_messages() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Messages<PointerMoved>>().is_some());
    assert!(app.world().get_resource::<Messages<PointerReleased>>().is_some());
    assert!(app.world().get_resource::<Messages<PlaySfx>>().is_some());
}

#[test]
fn default_grid_is_72_bricks() {
    assert_eq!(Tunables::default().brick_count(), 72);
}

#[test]
fn canvas_space_flips_y() {
    let t = Tunables::default();
    assert_eq!(t.canvas_to_world(Vec2::new(400.0, 550.0)), Vec2::new(400.0, 50.0));
    assert_eq!(t.canvas_to_world(Vec2::new(0.0, 600.0)).y, t.lower_bound());
}

#[test]
fn lower_bound_follows_the_playfield_height() {
    let t = Tunables {
        playfield: Vec2::new(800.0, 900.0),
        ..default()
    };
    assert_eq!(t.lower_bound(), t.canvas_to_world(Vec2::new(0.0, 900.0)).y);
    assert!(t.canvas_to_world(Vec2::new(0.0, 901.0)).y < t.lower_bound());
    assert!(t.canvas_to_world(Vec2::new(0.0, 899.0)).y > t.lower_bound());
}
