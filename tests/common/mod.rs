//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `breakout::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use breakout::common::state::RoundState;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Core ECS + states.
    // AssetPlugin + ScenePlugin so SceneSpawner exists for the physics plugins.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    breakout::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Current round state; panics if the app is not in game.
pub fn round(app: &App) -> RoundState {
    *app.world().resource::<State<RoundState>>().get()
}
