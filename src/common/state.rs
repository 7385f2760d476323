//! Global state machine.
//!
//! `GameState` scopes the lifetime of everything spawned for play.
//! `RoundState` is the breakout round FSM and only exists while `InGame`:
//!
//! ```text
//!   Waiting --pointer released--> Playing
//!   Playing --ball below bound--> GameOver --5s--> Waiting
//!   Playing --no bricks left----> Win      --5s--> Waiting
//! ```

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, SubStates, Default)]
#[source(GameState = GameState::InGame)]
pub enum RoundState {
    #[default]
    Waiting,
    Playing,
    Win,
    GameOver,
}

/// Per-frame ordering inside `Update`.
///
/// Input is consumed first so the round logic sees this frame's paddle,
/// then bricks move, then the HUD reads state, then the FSM runs.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FrameSystems {
    Input,
    Bricks,
    Hud,
    Round,
}
