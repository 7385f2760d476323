//! Ball contact rules.
//!
//! Reads Avian `CollisionStart` messages. Only the ball has
//! `CollisionEventsEnabled`, so a message is either ball × paddle, ball × brick
//! or ball × wall (walls need no response beyond the physical bounce).
//!
//! Physical consequences (brick removal, sounds, nudge) apply in every round
//! state. Score and combo only move while `Playing`.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::messages::PlaySfx;
use crate::common::state::RoundState;
use crate::common::tunables::Tunables;
use crate::plugins::ball::Ball;
use crate::plugins::bricks::{Brick, hit_brick};
use crate::plugins::paddle::Paddle;

use super::session::Session;

/// Other party of a contact involving the ball, if any.
#[inline]
fn ball_partner(ev: &CollisionStart, is_ball: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    let a = ev.body1.unwrap_or(ev.collider1);
    let b = ev.body2.unwrap_or(ev.collider2);
    match (is_ball(a), is_ball(b)) {
        (true, false) => Some((a, b)),
        (false, true) => Some((b, a)),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn resolve_ball_contacts(
    mut started: MessageReader<CollisionStart>,
    state: Res<State<RoundState>>,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut sfx: MessageWriter<PlaySfx>,
    mut q_ball: Query<(&Position, &mut LinearVelocity), With<Ball>>,
    q_paddle: Query<&Position, (With<Paddle>, Without<Ball>)>,
    mut q_bricks: Query<(&mut Brick, &mut Visibility, &mut CollisionLayers), Without<Ball>>,
    // A brick can only fall once per step even if several contacts report it.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();
    let scoring = *state.get() == RoundState::Playing;

    for ev in started.read() {
        let Some((ball, other)) = ball_partner(ev, |e| q_ball.contains(e)) else {
            continue;
        };

        // Physics positions are current for this step; transforms lag a sync behind.
        if let Ok(paddle_pos) = q_paddle.get(other) {
            let Ok((ball_pos, mut vel)) = q_ball.get_mut(ball) else {
                continue;
            };
            let offset = ball_pos.x - paddle_pos.x;

            Paddle::hit(&mut sfx);
            Ball::nudge(&mut vel, offset, &tunables);
            if scoring {
                session.paddle_touched();
            }
            debug!("Paddle contact, offset {offset:.1}");
            continue;
        }

        if let Ok((mut brick, mut vis, mut layers)) = q_bricks.get_mut(other) {
            if !seen.insert(other) {
                continue;
            }
            if !hit_brick(&mut brick, &mut vis, &mut layers, &mut sfx) {
                continue;
            }
            if scoring {
                let points = session.brick_broken(tunables.points_per_combo);
                debug!("Brick broken: +{points} (combo {})", session.combo);
            }
        }
    }
}
