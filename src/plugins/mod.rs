//! Feature plugins.

use bevy::prelude::*;

pub mod ball;
pub mod bricks;
pub mod core;
pub mod hud;
pub mod paddle;
pub mod physics;
pub mod round;
pub mod world;

// Render-only
pub mod assets;
pub mod audio;
pub mod camera;
pub mod input;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    paddle::plugin(app);
    ball::plugin(app);
    bricks::plugin(app);
    round::plugin(app);
    hud::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    input::plugin(app);
    assets::plugin(app);
    audio::plugin(app);
}
