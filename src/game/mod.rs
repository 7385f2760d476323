//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: DefaultPlugins (window/render/audio) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::{GameState, RoundState};
use crate::plugins;


/// Host element the canvas is mounted in when embedded in a page.
pub const DEFAULT_ROOT: &str = "root";

pub fn run() {
    run_in(DEFAULT_ROOT);
}

/// Run the full game inside the host element `root` (by id).
pub fn run_in(root: &str) {
    #[cfg(target_arch = "wasm32")]
    if mount_canvas(root).is_none() {
        warn!("could not mount a canvas for #{root}");
    }

    let root = root.to_owned();
    App::new()
        .add_plugins(move |app: &mut App| configure_full(app, &root))
        .run();
}

/// Id of the canvas created inside the host element `root`.
pub fn canvas_id(root: &str) -> String {
    format!("{root}-canvas")
}

/// The primary window; on wasm it binds to the canvas mounted inside `root`.
pub fn primary_window(root: &str) -> Window {
    Window {
        title: "Breakout".into(),
        resolution: WindowResolution::new(800, 600),
        resizable: false,
        canvas: Some(format!("#{}", canvas_id(root))),
        fit_canvas_to_parent: true,
        ..default()
    }
}

/// Append a `<canvas>` to the host element unless one was mounted already.
/// Falls back to the page body when the host element is missing.
#[cfg(target_arch = "wasm32")]
fn mount_canvas(root: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let id = canvas_id(root);
    if document.get_element_by_id(&id).is_some() {
        return Some(());
    }
    let host = match document.get_element_by_id(root) {
        Some(host) => host,
        None => document.body()?.into(),
    };
    let canvas = document.create_element("canvas").ok()?;
    canvas.set_id(&id);
    host.append_child(&canvas).ok()?;
    Some(())
}

/// Full configuration for `cargo run` and the browser build.
pub fn configure_full(app: &mut App, root: &str) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(primary_window(root)),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera/input/assets/audio).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    app.add_sub_state::<RoundState>();
    plugins::register_gameplay(app);
}
