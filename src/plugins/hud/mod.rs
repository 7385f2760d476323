//! HUD plugin: score on the bottom left, round feedback on the bottom right.
//!
//! Both texts are derived from `Session` and `RoundState` every frame and are
//! only written when the derived string changes.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::{FrameSystems, GameState, RoundState};
use crate::plugins::round::Session;

/// Canvas y of the HUD line.
const HUD_TOP: f32 = 575.0;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct StatusText;

/// Combo feedback tiers, ordered by threshold.
const COMBO_TIERS: [(u32, &str); 7] = [
    (0, ""),
    (2, "Double!"),
    (3, "Tripple!"),
    (5, "Great!!!"),
    (10, "Super!!!!!"),
    (15, "AMAZING!"),
    (20, "GODLIKE"),
];

/// Feedback text for a round state; while playing, the highest combo tier reached.
pub fn status_text(state: RoundState, combo: u32) -> &'static str {
    match state {
        RoundState::Waiting => "Click to Begin",
        RoundState::Playing => COMBO_TIERS
            .iter()
            .filter(|(level, _)| *level <= combo)
            .last()
            .map_or("", |(_, text)| *text),
        RoundState::GameOver => "Game Over",
        RoundState::Win => "You Win!",
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (refresh_score, refresh_status).in_set(FrameSystems::Hud),
        );
}

fn spawn(mut commands: Commands) {
    let font = TextFont {
        font_size: 16.0,
        ..default()
    };

    commands.spawn((
        Name::new("Scoreboard"),
        ScoreText,
        Text::new(score_text(0)),
        font.clone(),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(HUD_TOP),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("Status"),
        StatusText,
        Text::new(""),
        font,
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(0.0),
            top: Val::Px(HUD_TOP),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn refresh_score(session: Res<Session>, mut q: Query<&mut Text, With<ScoreText>>) {
    let wanted = score_text(session.score);
    for mut text in &mut q {
        if text.0 != wanted {
            text.0.clone_from(&wanted);
        }
    }
}

fn refresh_status(
    state: Res<State<RoundState>>,
    session: Res<Session>,
    mut q: Query<&mut Text, With<StatusText>>,
) {
    let wanted = status_text(*state.get(), session.combo);
    for mut text in &mut q {
        if text.0 != wanted {
            text.0 = wanted.to_owned();
        }
    }
}
